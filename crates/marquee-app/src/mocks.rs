//! Scripted [`MovieApi`] implementation for engine tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use marquee_core::{Genre, GenreId, MovieDetails, MovieId, MovieSummary, Page};

use crate::message::FetchOutcome;
use crate::services::MovieApi;

fn empty_page<T>() -> Page<T> {
    Page {
        page: 1,
        results: Vec::new(),
        total_pages: 1,
        total_results: 0,
    }
}

pub fn page_of(movies: Vec<MovieSummary>) -> Page<MovieSummary> {
    Page {
        page: 1,
        total_pages: 1,
        total_results: movies.len() as u32,
        results: movies,
    }
}

pub fn movie(id: MovieId, title: &str) -> MovieSummary {
    MovieSummary {
        id,
        title: title.to_string(),
        poster_path: None,
        backdrop_path: None,
        overview: String::new(),
        release_date: String::new(),
        vote_average: 7.0,
        genre_ids: Vec::new(),
    }
}

/// Scripted catalogue: every operation returns its preset outcome (an empty
/// page / empty list when nothing was scripted) and counts its calls.
#[derive(Default)]
pub struct MockMovieApi {
    trending: Mutex<Option<FetchOutcome<Page<MovieSummary>>>>,
    genres: Mutex<Option<FetchOutcome<Vec<Genre>>>>,
    search: Mutex<HashMap<String, FetchOutcome<Page<MovieSummary>>>>,
    by_genre: Mutex<HashMap<GenreId, FetchOutcome<Page<MovieSummary>>>>,
    details: Mutex<HashMap<MovieId, FetchOutcome<MovieDetails>>>,
    similar: Mutex<HashMap<MovieId, FetchOutcome<Page<MovieSummary>>>>,

    pub trending_calls: AtomicUsize,
    pub genres_calls: AtomicUsize,
    pub search_calls: AtomicUsize,
    pub by_genre_calls: AtomicUsize,
    pub details_calls: AtomicUsize,
    pub similar_calls: AtomicUsize,
}

impl MockMovieApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trending(self, outcome: FetchOutcome<Page<MovieSummary>>) -> Self {
        *self.trending.lock().unwrap() = Some(outcome);
        self
    }

    pub fn with_genres(self, outcome: FetchOutcome<Vec<Genre>>) -> Self {
        *self.genres.lock().unwrap() = Some(outcome);
        self
    }

    pub fn with_search(
        self,
        query: &str,
        outcome: FetchOutcome<Page<MovieSummary>>,
    ) -> Self {
        self.search
            .lock()
            .unwrap()
            .insert(query.to_string(), outcome);
        self
    }

    pub fn with_movies_by_genre(
        self,
        genre_id: GenreId,
        outcome: FetchOutcome<Page<MovieSummary>>,
    ) -> Self {
        self.by_genre.lock().unwrap().insert(genre_id, outcome);
        self
    }

    pub fn with_details(self, movie_id: MovieId, outcome: FetchOutcome<MovieDetails>) -> Self {
        self.details.lock().unwrap().insert(movie_id, outcome);
        self
    }

    pub fn with_similar(
        self,
        movie_id: MovieId,
        outcome: FetchOutcome<Page<MovieSummary>>,
    ) -> Self {
        self.similar.lock().unwrap().insert(movie_id, outcome);
        self
    }
}

#[async_trait]
impl MovieApi for MockMovieApi {
    async fn trending(&self) -> FetchOutcome<Page<MovieSummary>> {
        self.trending_calls.fetch_add(1, Ordering::SeqCst);
        self.trending
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Ok(empty_page()))
    }

    async fn genres(&self) -> FetchOutcome<Vec<Genre>> {
        self.genres_calls.fetch_add(1, Ordering::SeqCst);
        self.genres
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn search_movies(&self, query: &str) -> FetchOutcome<Page<MovieSummary>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.search
            .lock()
            .unwrap()
            .get(query)
            .cloned()
            .unwrap_or_else(|| Ok(empty_page()))
    }

    async fn movies_by_genre(&self, genre_id: GenreId) -> FetchOutcome<Page<MovieSummary>> {
        self.by_genre_calls.fetch_add(1, Ordering::SeqCst);
        self.by_genre
            .lock()
            .unwrap()
            .get(&genre_id)
            .cloned()
            .unwrap_or_else(|| Ok(empty_page()))
    }

    async fn movie_details(&self, movie_id: MovieId) -> FetchOutcome<MovieDetails> {
        self.details_calls.fetch_add(1, Ordering::SeqCst);
        self.details
            .lock()
            .unwrap()
            .get(&movie_id)
            .cloned()
            .unwrap_or(Err(marquee_core::FetchError::NotFound))
    }

    async fn similar_movies(&self, movie_id: MovieId) -> FetchOutcome<Page<MovieSummary>> {
        self.similar_calls.fetch_add(1, Ordering::SeqCst);
        self.similar
            .lock()
            .unwrap()
            .get(&movie_id)
            .cloned()
            .unwrap_or_else(|| Ok(empty_page()))
    }
}
