//! Page events and explicit subscriptions
//!
//! Components register interest at initialization and get back a
//! `Subscription`; dropping or disposing it detaches the listener. Tests feed
//! the bus directly instead of needing a real page.

use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

const BUS_CAPACITY: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Text field content changed
    Input { target: String, value: String },
    /// Pointer click anywhere in the document
    Click,
    /// Key press anywhere in the document
    KeyPress,
}

impl UiEvent {
    pub fn input(target: impl Into<String>, value: impl Into<String>) -> Self {
        UiEvent::Input {
            target: target.into(),
            value: value.into(),
        }
    }

    /// Click and key press count as user activity
    pub fn is_activity(&self) -> bool {
        matches!(self, UiEvent::Click | UiEvent::KeyPress)
    }
}

/// Fan-out of page events to every subscription.
///
/// Each listener buffers at most 256 unread events. A listener that falls
/// further behind loses the oldest ones and logs a warning; the newest
/// events, including the latest input value, are always delivered.
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<UiEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(BUS_CAPACITY);
        Self { tx }
    }

    /// Deliver an event to every live subscription. Returns how many
    /// listeners will see it.
    pub fn publish(&self, event: UiEvent) -> usize {
        self.tx.send(event).unwrap_or(0)
    }

    pub fn listener_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Run `handler` for every event published after this call.
    ///
    /// Must be called from within a tokio runtime.
    pub fn subscribe<F>(&self, name: &'static str, mut handler: F) -> Subscription
    where
        F: FnMut(UiEvent) + Send + 'static,
    {
        let mut rx = self.tx.subscribe();
        let handle = tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(event) => handler(event),
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(listener = name, skipped, "Event listener lagged");
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        });

        tracing::debug!(listener = name, "Subscribed to UI events");

        Subscription { name, handle }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to a registered listener. Dropping it detaches the listener.
pub struct Subscription {
    name: &'static str,
    handle: JoinHandle<()>,
}

impl Subscription {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_active(&self) -> bool {
        !self.handle.is_finished()
    }

    pub fn dispose(self) {
        tracing::debug!(listener = self.name, "Disposed UI event listener");
        // Drop does the abort
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
