//! Search dialog visibility and focus
//!
//! The query field only takes focus once the dialog has finished its
//! opening animation.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

pub const DEFAULT_FOCUS_DELAY: Duration = Duration::from_millis(500);

#[derive(Default)]
struct ModalState {
    open: bool,
    focused: bool,
    pending_focus: Option<JoinHandle<()>>,
}

#[derive(Clone)]
pub struct SearchModal {
    state: Arc<Mutex<ModalState>>,
    focus_delay: Duration,
}

impl SearchModal {
    pub fn new(focus_delay: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(ModalState::default())),
            focus_delay,
        }
    }

    pub fn open(&self) {
        let mut state = self.state.lock();
        if let Some(pending) = state.pending_focus.take() {
            pending.abort();
        }
        state.open = true;
        state.focused = false;

        let shared = Arc::clone(&self.state);
        let delay = self.focus_delay;
        state.pending_focus = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut state = shared.lock();
            if state.open {
                state.focused = true;
            }
            state.pending_focus = None;
        }));
    }

    pub fn close(&self) {
        let mut state = self.state.lock();
        if let Some(pending) = state.pending_focus.take() {
            pending.abort();
        }
        state.open = false;
        state.focused = false;
    }

    pub fn is_open(&self) -> bool {
        self.state.lock().open
    }

    pub fn has_focus(&self) -> bool {
        self.state.lock().focused
    }
}

impl Default for SearchModal {
    fn default() -> Self {
        Self::new(DEFAULT_FOCUS_DELAY)
    }
}
