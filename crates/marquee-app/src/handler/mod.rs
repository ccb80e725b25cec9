//! Handler module - TEA update function
//!
//! `update()` is pure of I/O: it mutates [`AppState`](crate::AppState) and
//! returns the fetches the engine should dispatch. Network work happens in
//! the engine's action handler, results come back as completion messages.

mod update;


use marquee_core::{GenreId, MovieId};

use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Fetches the event loop should dispatch after an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Fetch the weekly trending page.
    FetchTrending,

    /// Fetch the genre reference list.
    FetchGenres,

    /// Fetch search results for a non-empty query.
    FetchSearch { query: String },

    /// Fetch the discover page for a genre.
    FetchMoviesByGenre { genre_id: GenreId },

    /// Fetch full details for a movie.
    FetchDetails { movie_id: MovieId },

    /// Fetch similar movies for a movie.
    FetchSimilar { movie_id: MovieId },
}

/// Result of one update step: an optional follow-up message to keep
/// processing and an optional action for the event loop to perform.
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
