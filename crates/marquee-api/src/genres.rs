use marquee_core::{Genre, GenreList};

use crate::TmdbClient;

impl TmdbClient {
    /// The movie genre reference list. Effectively static for the session.
    ///
    /// GET /genre/movie/list
    pub async fn genres(&self) -> crate::Result<Vec<Genre>> {
        let list: GenreList = self.get("/genre/movie/list", &[]).await?;
        Ok(list.genres)
    }
}
