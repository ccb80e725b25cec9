//! View-state reducer: one coherent render model per state snapshot
//!
//! [`view_model`] is a pure function of [`AppState`]. It decides which of
//! the three mutually-exclusive sources (search / genre / trending) is
//! active, merges their loading/error flags, derives the home-view hero and
//! carousel rows, and exposes the details modal. It performs no I/O.

use marquee_core::{Genre, MovieDetails, MovieId, MovieSummary, Page};

use crate::queries::QueryState;
use crate::state::AppState;

/// Number of home-view genre carousels.
const HOME_GENRE_ROWS: usize = 3;

/// Which result set is eligible for display (search > genre > trending).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveSource {
    Search,
    Genre,
    Trending,
}

/// A horizontal carousel on the home view.
///
/// Rows are a client-side filter of the trending result set, so their
/// loading/error flags mirror the trending query rather than a dedicated
/// fetch. Kept as-is from the original behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRow {
    pub title: String,
    pub movies: Vec<MovieSummary>,
    pub is_loading: bool,
    pub is_error: bool,
}

/// The details modal, visible while a movie is selected.
///
/// Its query state is independent of the main grid: a loading or failed
/// details fetch never blocks or errors the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailsModal {
    pub movie_id: MovieId,
    pub details: QueryState<MovieDetails>,
    pub similar: QueryState<Page<MovieSummary>>,
}

/// Everything the presentation layer needs to render one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub source: ActiveSource,

    /// Section heading for the main grid.
    pub heading: String,

    /// The active result set; empty until the active query is `Ready`.
    pub movies: Vec<MovieSummary>,

    /// Trending-loading always counts; search/genre loading only while active.
    pub is_loading: bool,

    /// Same conditional merge as `is_loading`.
    pub is_error: bool,

    /// Loaded successfully with zero results. Distinct from `is_error`.
    pub is_empty: bool,

    /// Hero banner movie (first trending result), home view only.
    pub hero: Option<MovieSummary>,

    /// Secondary carousels, home view only.
    pub rows: Vec<MovieRow>,

    /// Genre reference list for the filter bar (empty until loaded).
    pub genres: Vec<Genre>,

    /// Details modal, present while a movie is selected.
    pub modal: Option<DetailsModal>,
}

/// Compute the render model for the current state.
pub fn view_model(state: &AppState) -> ViewModel {
    let selection = &state.selection;
    let queries = &state.queries;

    let trending = queries.trending.state();
    let genres = queries
        .genres
        .data()
        .cloned()
        .unwrap_or_default();

    let (source, active) = if selection.is_searching() {
        (
            ActiveSource::Search,
            queries.search.state(&selection.search_query),
        )
    } else if let Some(genre_id) = selection.selected_genre {
        (ActiveSource::Genre, queries.by_genre.state(&genre_id))
    } else {
        (ActiveSource::Trending, trending)
    };

    let is_loading = trending.is_in_flight()
        || (source != ActiveSource::Trending && active.is_in_flight());
    let is_error = trending.is_failed()
        || (source != ActiveSource::Trending && active.is_failed());

    let movies = active
        .data()
        .map(|page| page.results.clone())
        .unwrap_or_default();
    let is_empty = !is_loading && !is_error && movies.is_empty();

    let heading = match source {
        ActiveSource::Search => {
            format!("Search Results for \"{}\"", selection.search_query)
        }
        ActiveSource::Genre => {
            let genre_id = selection.selected_genre.unwrap_or_default();
            let name = genres
                .iter()
                .find(|g| g.id == genre_id)
                .map(|g| g.name.as_str())
                .unwrap_or("Genre");
            format!("{name} Movies")
        }
        ActiveSource::Trending => "Trending Movies".to_string(),
    };

    let (hero, rows) = if selection.is_home() {
        (home_hero(state), home_rows(state, &genres))
    } else {
        (None, Vec::new())
    };

    let modal = selection.selected_movie.map(|movie_id| DetailsModal {
        movie_id,
        details: queries.details.state(&movie_id).clone(),
        similar: queries.similar.state(&movie_id).clone(),
    });

    ViewModel {
        source,
        heading,
        movies,
        is_loading,
        is_error,
        is_empty,
        hero,
        rows,
        genres,
        modal,
    }
}

fn home_hero(state: &AppState) -> Option<MovieSummary> {
    state
        .queries
        .trending
        .data()
        .and_then(|page| page.results.first())
        .cloned()
}

fn home_rows(state: &AppState, genres: &[Genre]) -> Vec<MovieRow> {
    let trending = state.queries.trending.state();
    let trending_movies = trending.data().map(|p| p.results.as_slice());
    let is_loading = trending.is_in_flight();
    let is_error = trending.is_failed();

    let mut rows = Vec::new();

    // "Popular This Week": trending entries 1..=10, skipping the hero.
    if let Some(movies) = trending_movies {
        if !movies.is_empty() {
            rows.push(MovieRow {
                title: "Popular This Week".to_string(),
                movies: movies.iter().skip(1).take(10).cloned().collect(),
                is_loading,
                is_error,
            });
        }
    }

    // One carousel per leading genre, filtered client-side from trending.
    for genre in genres.iter().take(HOME_GENRE_ROWS) {
        let movies = trending_movies
            .map(|ms| {
                ms.iter()
                    .filter(|m| m.genre_ids.contains(&genre.id))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        rows.push(MovieRow {
            title: format!("{} Movies", genre.name),
            movies,
            is_loading,
            is_error,
        });
    }

    rows
}
