//! Marquee application layer
//!
//! Coordinates the TMDB catalogue behind a message-driven engine: UI
//! intents go in as [`Message`]s, fetches run as background tasks, and
//! every processing cycle publishes a pure [`view::ViewModel`] snapshot.

// Module declarations
pub mod config;
pub mod engine;
pub mod handler;
pub mod message;
pub mod queries;
pub mod services;
pub mod state;
pub mod view;

#[cfg(test)]
pub mod mocks;

// Re-export main entry points
pub use config::Settings;
pub use engine::{Engine, EngineHandle};
pub use handler::{update, UpdateAction, UpdateResult};
pub use message::Message;
pub use services::MovieApi;
pub use state::{AppState, SelectionState};
pub use view::{view_model, ViewModel};
