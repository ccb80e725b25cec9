//! Movie metadata types matching the TMDB wire format

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// TMDB movie identifier.
pub type MovieId = u64;
/// TMDB genre identifier.
pub type GenreId = u64;

/// A movie as returned by the listing endpoints (trending, search, discover).
///
/// Immutable once fetched; identified by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: MovieId,
    pub title: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub overview: String,
    /// ISO date (`2024-07-19`). Empty or missing when unannounced.
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub genre_ids: Vec<GenreId>,
}

impl MovieSummary {
    /// Release year parsed from `release_date`, `None` when absent or malformed.
    pub fn release_year(&self) -> Option<i32> {
        NaiveDate::parse_from_str(&self.release_date, "%Y-%m-%d")
            .ok()
            .map(|d| d.year())
    }
}

/// Full movie record from `/movie/{id}`.
///
/// Superset of [`MovieSummary`]; fetched lazily per selected movie and held
/// only in the query cache for the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    pub id: MovieId,
    pub title: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub genres: Vec<Genre>,
    /// Runtime in minutes. TMDB reports `null` for unannounced titles.
    pub runtime: Option<u32>,
    pub tagline: Option<String>,
    #[serde(default)]
    pub status: String,
    /// 0 means unknown/undisclosed.
    #[serde(default)]
    pub budget: u64,
    /// 0 means unknown/undisclosed.
    #[serde(default)]
    pub revenue: u64,
    pub homepage: Option<String>,
}

impl MovieDetails {
    /// Release year parsed from `release_date`, `None` when absent or malformed.
    pub fn release_year(&self) -> Option<i32> {
        NaiveDate::parse_from_str(&self.release_date, "%Y-%m-%d")
            .ok()
            .map(|d| d.year())
    }

    /// Runtime formatted as `"2h 19m"`, `None` when the runtime is unknown.
    pub fn format_runtime(&self) -> Option<String> {
        let minutes = self.runtime?;
        Some(format!("{}h {}m", minutes / 60, minutes % 60))
    }
}

/// A movie genre from the static reference list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
}

/// One page of results from a listing endpoint.
///
/// Pages are never merged; only the first page is ever requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub page: u32,
    pub results: Vec<T>,
    pub total_pages: u32,
    pub total_results: u32,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Wire wrapper around `/genre/movie/list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreList {
    pub genres: Vec<Genre>,
}
