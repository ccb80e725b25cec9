use marquee_core::{MovieSummary, Page};

use crate::TmdbClient;

impl TmdbClient {
    /// Server-side text search, first page.
    ///
    /// GET /search/movie
    ///
    /// Callers must not pass an empty query; the coordinator suppresses the
    /// query instead of calling this.
    pub async fn search_movies(&self, query: &str) -> crate::Result<Page<MovieSummary>> {
        self.get("/search/movie", &[("query", query), ("include_adult", "false")])
            .await
    }
}
