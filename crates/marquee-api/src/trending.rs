use marquee_core::{MovieSummary, Page};

use crate::TmdbClient;

impl TmdbClient {
    /// First page of this week's trending movies.
    ///
    /// GET /trending/movie/week
    pub async fn trending(&self) -> crate::Result<Page<MovieSummary>> {
        self.get("/trending/movie/week", &[]).await
    }
}
