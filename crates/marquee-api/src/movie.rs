use marquee_core::{MovieDetails, MovieId, MovieSummary, Page};

use crate::TmdbClient;

impl TmdbClient {
    /// Full record for a single movie. Upstream 404 surfaces as
    /// [`ApiError::Api`](crate::ApiError::Api) with status 404.
    ///
    /// GET /movie/{movie_id}
    pub async fn movie_details(&self, movie_id: MovieId) -> crate::Result<MovieDetails> {
        self.get(&format!("/movie/{movie_id}"), &[]).await
    }

    /// Movies similar to the given movie, first page.
    ///
    /// GET /movie/{movie_id}/similar
    pub async fn similar_movies(&self, movie_id: MovieId) -> crate::Result<Page<MovieSummary>> {
        self.get(&format!("/movie/{movie_id}/similar"), &[]).await
    }
}
