use crate::models::SearchResult;
use crate::services::BookshelfService;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Observable state of the shelf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShelfState {
    Loading,
    Success(SearchResult),
    Error(String),
}

impl ShelfState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ShelfState::Loading)
    }
}

/// Drives searches for a consumer and publishes their outcome as `ShelfState`.
///
/// Only one search is in flight at a time: starting a new one aborts the
/// previous task, and a superseded search never publishes. Dropping the
/// presenter aborts whatever is still running.
pub struct ShelfPresenter {
    service: Arc<BookshelfService>,
    state: Arc<watch::Sender<ShelfState>>,
    generation: Arc<AtomicU64>,
    draft_query: Mutex<String>,
    last_query: Mutex<String>,
    in_flight: Mutex<Option<JoinHandle<()>>>,
}

impl ShelfPresenter {
    pub fn new(service: Arc<BookshelfService>, initial_query: impl Into<String>) -> Self {
        let (state, _) = watch::channel(ShelfState::Loading);

        Self {
            service,
            state: Arc::new(state),
            generation: Arc::new(AtomicU64::new(0)),
            draft_query: Mutex::new(String::new()),
            last_query: Mutex::new(initial_query.into()),
            in_flight: Mutex::new(None),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ShelfState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> ShelfState {
        self.state.borrow().clone()
    }

    pub fn last_query(&self) -> String {
        lock(&self.last_query).clone()
    }

    /// Query being edited; it only takes effect on `perform_search`.
    pub fn query(&self) -> String {
        lock(&self.draft_query).clone()
    }

    pub fn set_query(&self, query: impl Into<String>) {
        *lock(&self.draft_query) = query.into();
    }

    /// Commit the edited query and search for it.
    pub fn perform_search(&self) {
        let query = self.query();
        self.search(query);
    }

    /// Start a search for `query`. Must be called from within a tokio runtime.
    pub fn search(&self, query: impl Into<String>) {
        let query = query.into();
        *lock(&self.last_query) = query.clone();

        let mut in_flight = lock(&self.in_flight);
        if let Some(previous) = in_flight.take() {
            previous.abort();
        }

        // Bumped under the watch lock so a stale task can't slip in between.
        let mut generation = 0;
        self.state.send_modify(|state| {
            generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *state = ShelfState::Loading;
        });
        debug!(generation, "Starting search for '{}'", query);

        let service = self.service.clone();
        let state = self.state.clone();
        let current = self.generation.clone();

        *in_flight = Some(tokio::spawn(async move {
            let next = match service.search(&query).await {
                Ok(books) => ShelfState::Success(books),
                Err(e) => {
                    warn!(error = %e, "Search for '{}' failed", query);
                    ShelfState::Error(e.to_string())
                }
            };

            state.send_if_modified(|published| {
                if current.load(Ordering::SeqCst) != generation {
                    return false;
                }
                *published = next;
                true
            });
        }));
    }

    /// Re-run the last query.
    pub fn retry(&self) {
        let query = self.last_query();
        self.search(query);
    }
}

impl Drop for ShelfPresenter {
    fn drop(&mut self) {
        if let Some(task) = lock(&self.in_flight).take() {
            task.abort();
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
