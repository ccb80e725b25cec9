//! Main update function - handles state transitions (TEA pattern)

use marquee_core::prelude::*;

use crate::message::Message;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Process a message and update state.
/// Returns optional follow-up message and/or fetch action.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Bootstrap => {
            // Trending first, genre list as a follow-up.
            let result = ensure_trending(state);
            UpdateResult {
                message: Some(Message::EnsureGenres),
                action: result,
            }
        }

        Message::EnsureGenres => match state.queries.genres.ensure() {
            true => UpdateResult::action(UpdateAction::FetchGenres),
            false => UpdateResult::none(),
        },

        // ─────────────────────────────────────────────────────────
        // Selection Messages
        // ─────────────────────────────────────────────────────────
        Message::Search(text) => {
            state.selection.search(text);
            // Suppressed while the query is empty: stays pending-with-no-data.
            if !state.selection.is_searching() {
                return UpdateResult::none();
            }
            let query = state.selection.search_query.clone();
            match state.queries.search.ensure(query.clone()) {
                true => UpdateResult::action(UpdateAction::FetchSearch { query }),
                false => UpdateResult::none(),
            }
        }

        Message::SelectGenre(genre_id) => {
            state.selection.select_genre(genre_id);
            let Some(genre_id) = genre_id else {
                return UpdateResult::none();
            };
            match state.queries.by_genre.ensure(genre_id) {
                true => UpdateResult::action(UpdateAction::FetchMoviesByGenre { genre_id }),
                false => UpdateResult::none(),
            }
        }

        Message::SelectMovie(movie_id) => {
            state.selection.select_movie(movie_id);
            // Details first, the similar-movies row as a follow-up.
            let action = state
                .queries
                .details
                .ensure(movie_id)
                .then_some(UpdateAction::FetchDetails { movie_id });
            UpdateResult {
                message: Some(Message::EnsureSimilar(movie_id)),
                action,
            }
        }

        Message::EnsureSimilar(movie_id) => match state.queries.similar.ensure(movie_id) {
            true => UpdateResult::action(UpdateAction::FetchSimilar { movie_id }),
            false => UpdateResult::none(),
        },

        Message::CloseDetails => {
            // Clears the selection regardless of the details query status;
            // an in-flight fetch settles into the cache unobserved.
            state.selection.close_details();
            UpdateResult::none()
        }

        Message::ResetHome => {
            state.selection.reset_home();
            // Trending is usually loaded by now; this retries after failure.
            match ensure_trending(state) {
                Some(action) => UpdateResult::action(action),
                None => UpdateResult::none(),
            }
        }

        // ─────────────────────────────────────────────────────────
        // Fetch Completions
        // ─────────────────────────────────────────────────────────
        Message::TrendingFetched(result) => {
            if let Err(err) = &result {
                warn!(%err, "trending fetch failed");
            }
            state.queries.trending.resolve(result);
            UpdateResult::none()
        }

        Message::GenresFetched(result) => {
            if let Err(err) = &result {
                warn!(%err, "genre list fetch failed");
            }
            state.queries.genres.resolve(result);
            UpdateResult::none()
        }

        Message::SearchFetched { query, result } => {
            if let Err(err) = &result {
                warn!(%query, %err, "search fetch failed");
            }
            state.queries.search.resolve(&query, result);
            UpdateResult::none()
        }

        Message::GenreMoviesFetched { genre_id, result } => {
            if let Err(err) = &result {
                warn!(genre_id, %err, "discover fetch failed");
            }
            state.queries.by_genre.resolve(&genre_id, result);
            UpdateResult::none()
        }

        Message::DetailsFetched { movie_id, result } => {
            if let Err(err) = &result {
                warn!(movie_id, %err, "details fetch failed");
            }
            state.queries.details.resolve(&movie_id, result);
            UpdateResult::none()
        }

        Message::SimilarFetched { movie_id, result } => {
            if let Err(err) = &result {
                warn!(movie_id, %err, "similar fetch failed");
            }
            state.queries.similar.resolve(&movie_id, result);
            UpdateResult::none()
        }
    }
}

fn ensure_trending(state: &mut AppState) -> Option<UpdateAction> {
    state
        .queries
        .trending
        .ensure()
        .then_some(UpdateAction::FetchTrending)
}
