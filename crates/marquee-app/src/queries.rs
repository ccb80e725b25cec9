//! Keyed query cache: dedup, staleness discard, retry-on-reselect

use std::collections::HashMap;
use std::hash::Hash;

use marquee_core::prelude::*;
use marquee_core::{Genre, GenreId, MovieDetails, MovieId, MovieSummary, Page};

/// Lifecycle of a single query invocation.
///
/// Transitions are one-directional per key: `NotStarted` → `InFlight` →
/// `Ready` | `Failed`. A different key gets a fresh instance; a `Failed`
/// entry is cleared when its key is selected again so the user can retry.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    /// Request not issued (also the perpetual state of a suppressed query).
    NotStarted,

    /// Request issued, result not yet applied.
    InFlight,

    /// Terminal: data available.
    Ready(T),

    /// Terminal: this attempt failed. Re-selecting the key retries.
    Failed(FetchError),
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        QueryState::NotStarted
    }
}

impl<T> QueryState<T> {
    /// No data yet: either not started or still in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, QueryState::NotStarted | QueryState::InFlight)
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, QueryState::InFlight)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, QueryState::Failed(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Ready(data) => Some(data),
            _ => None,
        }
    }
}

/// An unkeyed query slot (trending, the genre list): one state machine for
/// the whole session.
#[derive(Debug, Clone)]
pub struct QuerySlot<T> {
    state: QueryState<T>,
}

impl<T> Default for QuerySlot<T> {
    fn default() -> Self {
        Self {
            state: QueryState::NotStarted,
        }
    }
}

impl<T> QuerySlot<T> {
    pub fn state(&self) -> &QueryState<T> {
        &self.state
    }

    pub fn data(&self) -> Option<&T> {
        self.state.data()
    }

    /// Mark the slot in-flight if a fetch should be issued.
    ///
    /// Returns `true` exactly when the caller must dispatch the fetch:
    /// an in-flight or already-loaded slot absorbs the request (dedup /
    /// serve-from-cache). A failed slot retries.
    pub fn ensure(&mut self) -> bool {
        match self.state {
            QueryState::NotStarted | QueryState::Failed(_) => {
                self.state = QueryState::InFlight;
                true
            }
            QueryState::InFlight | QueryState::Ready(_) => false,
        }
    }

    /// Apply a completed result. Ignored unless the slot is in flight.
    pub fn resolve(&mut self, result: std::result::Result<T, FetchError>) {
        if !self.state.is_in_flight() {
            debug!("dropping completion for a slot that is not in flight");
            return;
        }
        self.state = match result {
            Ok(data) => QueryState::Ready(data),
            Err(err) => QueryState::Failed(err),
        };
    }
}

/// A keyed family of query state machines (search by text, discover by
/// genre, details by movie id).
///
/// Every key owns its own entry; a completion is written into the entry it
/// was issued for. Display always reads the entry for the *current*
/// selection, so a late result for a superseded key can never overwrite
/// what is on screen — it just fills its own cache entry.
#[derive(Debug, Clone)]
pub struct KeyedQueries<K, T> {
    entries: HashMap<K, QueryState<T>>,
}

impl<K, T> Default for KeyedQueries<K, T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone, T> KeyedQueries<K, T> {
    /// State for a key; `NotStarted` when the key has never been requested.
    pub fn state(&self, key: &K) -> &QueryState<T> {
        self.entries.get(key).unwrap_or(&QueryState::NotStarted)
    }

    pub fn data(&self, key: &K) -> Option<&T> {
        self.entries.get(key).and_then(|s| s.data())
    }

    /// Mark a key in-flight if a fetch should be issued for it.
    ///
    /// Same dedup/retry rules as [`QuerySlot::ensure`]: a fresh key or a
    /// previously failed one dispatches, an in-flight or loaded key does
    /// not (the cached value is served immediately).
    pub fn ensure(&mut self, key: K) -> bool {
        let entry = self.entries.entry(key).or_default();
        match entry {
            QueryState::NotStarted | QueryState::Failed(_) => {
                *entry = QueryState::InFlight;
                true
            }
            QueryState::InFlight | QueryState::Ready(_) => false,
        }
    }

    /// Apply a completed result to the entry it was issued for.
    ///
    /// A completion for a key that was never requested (or already settled)
    /// is dropped: the in-flight marker is the only thing a result may
    /// replace, which keeps entries one-directional per invocation.
    pub fn resolve(&mut self, key: &K, result: std::result::Result<T, FetchError>) {
        match self.entries.get_mut(key) {
            Some(entry) if entry.is_in_flight() => {
                *entry = match result {
                    Ok(data) => QueryState::Ready(data),
                    Err(err) => QueryState::Failed(err),
                };
            }
            _ => debug!("dropping completion for an unsolicited or settled key"),
        }
    }
}

/// All query state for the session, one slot or keyed family per endpoint.
///
/// The cache lives exactly as long as the session ([`crate::AppState`]);
/// nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct Queries {
    /// Weekly trending window. Always active.
    pub trending: QuerySlot<Page<MovieSummary>>,

    /// Genre reference list. Fetched once, safe to treat as static.
    pub genres: QuerySlot<Vec<Genre>>,

    /// Text search keyed by the query string.
    pub search: KeyedQueries<String, Page<MovieSummary>>,

    /// Discover-by-genre keyed by genre id.
    pub by_genre: KeyedQueries<GenreId, Page<MovieSummary>>,

    /// Movie details keyed by movie id.
    pub details: KeyedQueries<MovieId, MovieDetails>,

    /// Similar movies keyed by movie id.
    pub similar: KeyedQueries<MovieId, Page<MovieSummary>>,
}
