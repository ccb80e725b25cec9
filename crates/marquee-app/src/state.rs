//! Application state (Model in TEA pattern)

use marquee_core::{GenreId, MovieId};

use crate::queries::Queries;

/// Process-local UI selection state.
///
/// Invariant: a non-empty `search_query` and a set `selected_genre` are
/// mutually exclusive — setting one clears the other. `selected_movie` is
/// independent and controls modal visibility only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// Current search text. Empty means the search filter is inactive.
    pub search_query: String,

    /// Active genre filter, if any.
    pub selected_genre: Option<GenreId>,

    /// Movie whose details modal is open, if any.
    pub selected_movie: Option<MovieId>,
}

impl SelectionState {
    /// Set the search text and clear the genre filter.
    ///
    /// Empty text is legal and means "clear the search filter".
    pub fn search(&mut self, text: impl Into<String>) {
        self.search_query = text.into();
        self.selected_genre = None;
    }

    /// Set (or clear) the genre filter and clear the search text.
    pub fn select_genre(&mut self, genre_id: Option<GenreId>) {
        self.selected_genre = genre_id;
        self.search_query.clear();
    }

    /// Open the details modal for a movie.
    pub fn select_movie(&mut self, movie_id: MovieId) {
        self.selected_movie = Some(movie_id);
    }

    /// Close the details modal.
    pub fn close_details(&mut self) {
        self.selected_movie = None;
    }

    /// Return to the trending view. The modal is untouched.
    pub fn reset_home(&mut self) {
        self.search_query.clear();
        self.selected_genre = None;
    }

    /// `true` when the search filter is active.
    pub fn is_searching(&self) -> bool {
        !self.search_query.is_empty()
    }

    /// `true` when neither search nor a genre filter is active.
    pub fn is_home(&self) -> bool {
        !self.is_searching() && self.selected_genre.is_none()
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// UI selection state driving which queries are active.
    pub selection: SelectionState,

    /// Per-key query cache for every endpoint.
    pub queries: Queries,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
