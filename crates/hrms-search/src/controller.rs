//! Debounced search controller
//!
//! Owns the one pending search task. Every keystroke aborts its predecessor
//! before scheduling a new one, and bumps a generation counter so that a
//! response which still slips through after being superseded never renders.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

use hrms_view::{EventBus, Render, Subscription, UiEvent};

use crate::backend::SearchBackend;
use crate::view::SearchView;

pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(300);
pub const MIN_QUERY_CHARS: usize = 2;

#[derive(Default)]
struct SearchState {
    /// Trimmed text of the latest keystroke
    query: String,
    view: SearchView,
    /// Bumped on every input; a response renders only if it still matches
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

pub struct SearchController<B: SearchBackend> {
    backend: Arc<B>,
    state: Arc<Mutex<SearchState>>,
    quiet_period: Duration,
    min_query_chars: usize,
}

impl<B: SearchBackend> SearchController<B> {
    pub fn new(backend: B) -> Self {
        Self::with_timing(backend, DEFAULT_QUIET_PERIOD, MIN_QUERY_CHARS)
    }

    pub fn with_timing(backend: B, quiet_period: Duration, min_query_chars: usize) -> Self {
        Self {
            backend: Arc::new(backend),
            state: Arc::new(Mutex::new(SearchState::default())),
            quiet_period,
            min_query_chars,
        }
    }

    /// Handle a change of the search box content.
    ///
    /// Must be called from within a tokio runtime.
    pub fn on_input(&self, raw: &str) {
        let query = raw.trim().to_string();

        let mut state = self.state.lock();
        state.generation += 1;
        let generation = state.generation;

        if let Some(pending) = state.pending.take() {
            pending.abort();
        }
        state.query = query.clone();

        if query.chars().count() < self.min_query_chars {
            state.view = SearchView::Idle;
            return;
        }

        state.view = SearchView::Loading;

        let backend = Arc::clone(&self.backend);
        let shared = Arc::clone(&self.state);
        let quiet_period = self.quiet_period;

        state.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet_period).await;

            tracing::debug!(query = %query, generation, "Issuing employee search");
            let outcome = backend.search(&query).await;

            let mut state = shared.lock();
            if state.generation != generation {
                tracing::debug!(query = %query, generation, "Discarded stale search response");
                return;
            }

            state.pending = None;
            state.view = match outcome {
                Ok(results) if results.is_empty() => SearchView::Empty,
                Ok(results) => {
                    tracing::debug!(query = %query, count = results.len(), "Search returned results");
                    SearchView::Results(results)
                }
                Err(e) => {
                    tracing::warn!(query = %query, error = %e, "Employee search failed");
                    SearchView::Failed
                }
            };
        }));
    }

    /// Listen for input on the field with id `target`
    pub fn attach(&self, bus: &EventBus, target: &str) -> Subscription {
        let controller = self.clone();
        let target = target.to_string();

        bus.subscribe("quick-search", move |event| {
            if let UiEvent::Input { target: field, value } = event {
                if field == target {
                    controller.on_input(&value);
                }
            }
        })
    }

    /// Drop any pending search and clear the results
    pub fn reset(&self) {
        let mut state = self.state.lock();
        state.generation += 1;
        if let Some(pending) = state.pending.take() {
            pending.abort();
        }
        state.query.clear();
        state.view = SearchView::Idle;
    }

    pub fn view(&self) -> SearchView {
        self.state.lock().view.clone()
    }

    pub fn query(&self) -> String {
        self.state.lock().query.clone()
    }

    pub fn is_pending(&self) -> bool {
        self.state.lock().pending.is_some()
    }

    pub fn render_html(&self) -> String {
        self.state.lock().view.render_html()
    }
}

impl<B: SearchBackend> Clone for SearchController<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            state: Arc::clone(&self.state),
            quiet_period: self.quiet_period,
            min_query_chars: self.min_query_chars,
        }
    }
}
