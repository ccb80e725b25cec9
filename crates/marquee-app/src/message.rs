//! Message types for the application (TEA pattern)

use marquee_core::{FetchError, Genre, GenreId, MovieDetails, MovieId, MovieSummary, Page};

/// Outcome of one fetch attempt, cloneable so messages stay cloneable.
pub type FetchOutcome<T> = std::result::Result<T, FetchError>;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Kick off the initial queries (trending + genre list).
    Bootstrap,

    /// Internal follow-up of [`Message::Bootstrap`]: ensure the genre list.
    EnsureGenres,

    /// Internal follow-up of [`Message::SelectMovie`]: ensure the
    /// similar-movies row for the open modal.
    EnsureSimilar(MovieId),

    // ─────────────────────────────────────────────────────────
    // Selection Messages (UI callbacks)
    // ─────────────────────────────────────────────────────────
    /// Set the search text. Clears any genre filter; empty text clears the
    /// search filter itself.
    Search(String),

    /// Set or clear the genre filter. Clears any search text.
    SelectGenre(Option<GenreId>),

    /// Open the details modal for a movie.
    SelectMovie(MovieId),

    /// Close the details modal.
    CloseDetails,

    /// Return to the trending view (logo click).
    ResetHome,

    // ─────────────────────────────────────────────────────────
    // Fetch Completions (keyed by the parameters they were issued for)
    // ─────────────────────────────────────────────────────────
    /// Trending fetch settled.
    TrendingFetched(FetchOutcome<Page<MovieSummary>>),

    /// Genre list fetch settled.
    GenresFetched(FetchOutcome<Vec<Genre>>),

    /// Search fetch settled for `query`.
    SearchFetched {
        query: String,
        result: FetchOutcome<Page<MovieSummary>>,
    },

    /// Discover-by-genre fetch settled for `genre_id`.
    GenreMoviesFetched {
        genre_id: GenreId,
        result: FetchOutcome<Page<MovieSummary>>,
    },

    /// Details fetch settled for `movie_id`.
    DetailsFetched {
        movie_id: MovieId,
        result: FetchOutcome<MovieDetails>,
    },

    /// Similar-movies fetch settled for `movie_id`.
    SimilarFetched {
        movie_id: MovieId,
        result: FetchOutcome<Page<MovieSummary>>,
    },
}
