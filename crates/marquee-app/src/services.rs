//! Movie catalogue service trait
//!
//! The engine talks to the catalogue through [`MovieApi`] so tests can slot
//! in a scripted implementation. Errors are flattened to
//! [`FetchError`](marquee_core::FetchError) at this seam: the engine and the
//! query cache never see transport-level detail.

use async_trait::async_trait;

use marquee_api::TmdbClient;
use marquee_core::{Genre, GenreId, MovieDetails, MovieId, MovieSummary, Page};

use crate::message::FetchOutcome;

/// The six catalogue operations the engine dispatches.
#[async_trait]
pub trait MovieApi: Send + Sync {
    /// Weekly trending movies.
    async fn trending(&self) -> FetchOutcome<Page<MovieSummary>>;

    /// Genre reference list.
    async fn genres(&self) -> FetchOutcome<Vec<Genre>>;

    /// Text search. Callers must not pass an empty query.
    async fn search_movies(&self, query: &str) -> FetchOutcome<Page<MovieSummary>>;

    /// Discover movies for a genre.
    async fn movies_by_genre(&self, genre_id: GenreId) -> FetchOutcome<Page<MovieSummary>>;

    /// Full details for one movie.
    async fn movie_details(&self, movie_id: MovieId) -> FetchOutcome<MovieDetails>;

    /// Movies similar to one movie.
    async fn similar_movies(&self, movie_id: MovieId) -> FetchOutcome<Page<MovieSummary>>;
}

#[async_trait]
impl MovieApi for TmdbClient {
    async fn trending(&self) -> FetchOutcome<Page<MovieSummary>> {
        Ok(TmdbClient::trending(self).await?)
    }

    async fn genres(&self) -> FetchOutcome<Vec<Genre>> {
        Ok(TmdbClient::genres(self).await?)
    }

    async fn search_movies(&self, query: &str) -> FetchOutcome<Page<MovieSummary>> {
        Ok(TmdbClient::search_movies(self, query).await?)
    }

    async fn movies_by_genre(&self, genre_id: GenreId) -> FetchOutcome<Page<MovieSummary>> {
        Ok(TmdbClient::movies_by_genre(self, genre_id).await?)
    }

    async fn movie_details(&self, movie_id: MovieId) -> FetchOutcome<MovieDetails> {
        Ok(TmdbClient::movie_details(self, movie_id).await?)
    }

    async fn similar_movies(&self, movie_id: MovieId) -> FetchOutcome<Page<MovieSummary>> {
        Ok(TmdbClient::similar_movies(self, movie_id).await?)
    }
}
