use marquee_core::{GenreId, MovieSummary, Page};

use crate::TmdbClient;

impl TmdbClient {
    /// Movies matching a genre, server-side filtered, first page.
    ///
    /// GET /discover/movie?with_genres={genre_id}
    pub async fn movies_by_genre(&self, genre_id: GenreId) -> crate::Result<Page<MovieSummary>> {
        let genre = genre_id.to_string();
        self.get("/discover/movie", &[("with_genres", genre.as_str())])
            .await
    }
}
