//! # marquee-core - Core Domain Types
//!
//! Foundation crate for Marquee. Provides the movie domain model, error
//! taxonomy, image URL construction, and logging bootstrap.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`movie`)
//! - [`MovieSummary`] - A movie as listed by trending/search/discover
//! - [`MovieDetails`] - Full record fetched per movie id
//! - [`Genre`] - Genre reference entry
//! - [`Page`] - One page of listing results (never merged across pages)
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Application error enum
//! - [`FetchError`] - Cloneable per-query failure, carried inside messages
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ### Images (`images`)
//! - [`poster_url`] / [`backdrop_url`] - Pure CDN URL construction with
//!   placeholder fallback for absent paths
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use marquee_core::prelude::*;
//! ```

pub mod error;
pub mod images;
pub mod logging;
pub mod movie;

/// Prelude for common imports used throughout all Marquee crates
pub mod prelude {
    pub use super::error::{Error, FetchError, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, FetchError, Result};
pub use images::{backdrop_url, poster_url, BackdropSize, PosterSize, IMAGE_BASE_URL};
pub use movie::{Genre, GenreId, GenreList, MovieDetails, MovieId, MovieSummary, Page};
