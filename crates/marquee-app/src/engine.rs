//! Engine - owns the event loop that ties messages, fetches, and views
//!
//! The engine drains the message channel through the TEA update cycle,
//! spawns one background task per [`UpdateAction`], and publishes a fresh
//! [`ViewModel`] on a watch channel after every processing cycle. Fetch
//! results come back as completion messages carrying the parameters they
//! were issued for, so the query cache can file them under the right key.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

use marquee_core::{Error, GenreId, MovieId, Result};

use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::services::MovieApi;
use crate::state::AppState;
use crate::view::{view_model, ViewModel};

/// Message channel capacity. Completions plus UI intents stay well below
/// this in practice.
const CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for the movie browser.
pub struct Engine<A: MovieApi + 'static> {
    /// TEA application state (the Model)
    state: AppState,

    /// Catalogue the fetch tasks call into.
    api: Arc<A>,

    /// Sender half of the unified message channel.
    /// Cloned into every spawned fetch task and every handle.
    msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    msg_rx: mpsc::Receiver<Message>,

    /// Latest view model, recomputed after each processing cycle.
    view_tx: watch::Sender<ViewModel>,

    /// Shutdown signal. Send `true` to stop the run loop.
    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,
}

/// Cloneable front door to a running engine: dispatch UI intents, observe
/// view models, request shutdown.
#[derive(Clone)]
pub struct EngineHandle {
    msg_tx: mpsc::Sender<Message>,
    view_rx: watch::Receiver<ViewModel>,
    shutdown_tx: watch::Sender<bool>,
}

impl<A: MovieApi + 'static> Engine<A> {
    pub fn new(api: A) -> Self {
        let state = AppState::new();
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);
        let (view_tx, _) = watch::channel(view_model(&state));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        Self {
            state,
            api: Arc::new(api),
            msg_tx,
            msg_rx,
            view_tx,
            shutdown_tx,
            shutdown_rx,
        }
    }

    /// Create a handle for dispatching intents and observing views.
    pub fn handle(&self) -> EngineHandle {
        EngineHandle {
            msg_tx: self.msg_tx.clone(),
            view_rx: self.view_tx.subscribe(),
            shutdown_tx: self.shutdown_tx.clone(),
        }
    }

    /// Run until shutdown is requested.
    ///
    /// Processes [`Message::Bootstrap`] first so the trending page and the
    /// genre list start loading immediately.
    pub async fn run(mut self) {
        info!("engine starting");
        self.process_message(Message::Bootstrap);

        let mut shutdown_rx = self.shutdown_rx.clone();
        loop {
            tokio::select! {
                _ = shutdown_rx.changed() => {
                    if *shutdown_rx.borrow() {
                        break;
                    }
                }
                msg = self.msg_rx.recv() => {
                    match msg {
                        Some(msg) => self.process_message(msg),
                        None => break,
                    }
                }
            }
        }
        info!("engine stopped");
    }

    /// Process one message through the TEA update cycle, dispatching any
    /// actions and follow-up messages, then publish the new view model.
    pub fn process_message(&mut self, message: Message) {
        let mut msg = Some(message);
        while let Some(m) = msg {
            let result = handler::update(&mut self.state, m);
            if let Some(action) = result.action {
                self.handle_action(action);
            }
            msg = result.message;
        }

        // send_replace so the view is published even with no subscriber yet.
        self.view_tx.send_replace(view_model(&self.state));
    }

    /// Execute an action by spawning a background fetch task. The task
    /// reports back through the message channel with the parameters the
    /// fetch was issued for.
    fn handle_action(&self, action: UpdateAction) {
        debug!(?action, "dispatching fetch");
        let api = Arc::clone(&self.api);
        let msg_tx = self.msg_tx.clone();

        tokio::spawn(async move {
            let message = match action {
                UpdateAction::FetchTrending => Message::TrendingFetched(api.trending().await),
                UpdateAction::FetchGenres => Message::GenresFetched(api.genres().await),
                UpdateAction::FetchSearch { query } => {
                    let result = api.search_movies(&query).await;
                    Message::SearchFetched { query, result }
                }
                UpdateAction::FetchMoviesByGenre { genre_id } => Message::GenreMoviesFetched {
                    genre_id,
                    result: api.movies_by_genre(genre_id).await,
                },
                UpdateAction::FetchDetails { movie_id } => Message::DetailsFetched {
                    movie_id,
                    result: api.movie_details(movie_id).await,
                },
                UpdateAction::FetchSimilar { movie_id } => Message::SimilarFetched {
                    movie_id,
                    result: api.similar_movies(movie_id).await,
                },
            };
            // A send failure only means the engine already shut down.
            if msg_tx.send(message).await.is_err() {
                debug!("engine gone, dropping fetch completion");
            }
        });
    }

    /// Current view model (for callers not using the watch channel).
    pub fn view(&self) -> ViewModel {
        self.view_tx.borrow().clone()
    }
}

impl EngineHandle {
    /// Subscribe to view model updates.
    pub fn views(&self) -> watch::Receiver<ViewModel> {
        self.view_rx.clone()
    }

    /// Latest published view model.
    pub fn view(&self) -> ViewModel {
        self.view_rx.borrow().clone()
    }

    /// Set the search text (empty text clears the filter).
    pub async fn search(&self, text: impl Into<String>) -> Result<()> {
        self.send(Message::Search(text.into())).await
    }

    /// Set or clear the genre filter.
    pub async fn select_genre(&self, genre_id: Option<GenreId>) -> Result<()> {
        self.send(Message::SelectGenre(genre_id)).await
    }

    /// Open the details modal for a movie.
    pub async fn select_movie(&self, movie_id: MovieId) -> Result<()> {
        self.send(Message::SelectMovie(movie_id)).await
    }

    /// Close the details modal.
    pub async fn close_details(&self) -> Result<()> {
        self.send(Message::CloseDetails).await
    }

    /// Return to the trending view.
    pub async fn reset_home(&self) -> Result<()> {
        self.send(Message::ResetHome).await
    }

    /// Request engine shutdown.
    pub fn shutdown(&self) {
        // Ignore the error: a stopped engine is already what we want.
        let _ = self.shutdown_tx.send(true);
    }

    async fn send(&self, message: Message) -> Result<()> {
        self.msg_tx
            .send(message)
            .await
            .map_err(|e| Error::channel_send(format!("engine stopped, dropped {:?}", e.0)))
    }
}
