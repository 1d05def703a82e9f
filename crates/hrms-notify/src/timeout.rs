//! Session inactivity warning
//!
//! The server drops idle sessions; the page warns a few minutes earlier so
//! unsaved work can be kept. The warning is advisory only.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

use hrms_view::{EventBus, Subscription};

use crate::center::NotificationCenter;

pub const DEFAULT_WARNING_AFTER: Duration = Duration::from_secs(25 * 60);
pub const SESSION_EXPIRY_WARNING: &str =
    "Phiên làm việc sắp hết hạn. Vui lòng lưu công việc của bạn.";

pub struct SessionTimeout {
    notifier: NotificationCenter,
    window: Duration,
    /// At most one armed timer
    pending: Arc<Mutex<Option<JoinHandle<()>>>>,
    warnings_issued: Arc<AtomicUsize>,
}

impl SessionTimeout {
    pub fn new(notifier: NotificationCenter, window: Duration) -> Self {
        Self {
            notifier,
            window,
            pending: Arc::new(Mutex::new(None)),
            warnings_issued: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Cancel the running countdown, if any, and start a fresh one.
    ///
    /// Must be called from within a tokio runtime.
    pub fn arm(&self) {
        let mut pending = self.pending.lock();
        if let Some(previous) = pending.take() {
            previous.abort();
        }

        let notifier = self.notifier.clone();
        let warnings = Arc::clone(&self.warnings_issued);
        let window = self.window;

        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            warnings.fetch_add(1, Ordering::SeqCst);
            tracing::info!(idle_secs = window.as_secs(), "Session inactivity warning");
            notifier.warning(SESSION_EXPIRY_WARNING);
        }));
    }

    pub fn record_activity(&self) {
        tracing::trace!("User activity, re-arming session timer");
        self.arm();
    }

    /// Re-arm on every click or key press published on `bus`
    pub fn attach(&self, bus: &EventBus) -> Subscription {
        let watcher = self.clone();
        bus.subscribe("session-timeout", move |event| {
            if event.is_activity() {
                watcher.record_activity();
            }
        })
    }

    pub fn stop(&self) {
        if let Some(pending) = self.pending.lock().take() {
            pending.abort();
        }
    }

    pub fn is_armed(&self) -> bool {
        self.pending
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn warnings_issued(&self) -> usize {
        self.warnings_issued.load(Ordering::SeqCst)
    }

    pub fn window(&self) -> Duration {
        self.window
    }
}

impl Clone for SessionTimeout {
    fn clone(&self) -> Self {
        Self {
            notifier: self.notifier.clone(),
            window: self.window,
            pending: Arc::clone(&self.pending),
            warnings_issued: Arc::clone(&self.warnings_issued),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::Severity;
    use hrms_view::UiEvent;
    use tokio::time::sleep;

    fn watcher() -> (NotificationCenter, SessionTimeout) {
        let center = NotificationCenter::default();
        let timeout = SessionTimeout::new(center.clone(), DEFAULT_WARNING_AFTER);
        (center, timeout)
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_warning_after_window() {
        let (center, timeout) = watcher();
        timeout.arm();

        sleep(DEFAULT_WARNING_AFTER - Duration::from_secs(1)).await;
        assert_eq!(timeout.warnings_issued(), 0);
        assert!(center.is_empty());

        sleep(Duration::from_secs(2)).await;
        assert_eq!(timeout.warnings_issued(), 1);
        let banners = center.banners();
        assert_eq!(banners.len(), 1);
        assert_eq!(banners[0].severity, Severity::Warning);
        assert_eq!(banners[0].message, SESSION_EXPIRY_WARNING);

        sleep(Duration::from_secs(3600)).await;
        assert_eq!(timeout.warnings_issued(), 1);
        assert!(!timeout.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_activity_restarts_countdown() {
        let (_center, timeout) = watcher();
        timeout.arm();

        sleep(Duration::from_secs(20 * 60)).await;
        timeout.record_activity();
        sleep(Duration::from_secs(20 * 60)).await;
        assert_eq!(timeout.warnings_issued(), 0);

        sleep(Duration::from_secs(5 * 60 + 1)).await;
        assert_eq!(timeout.warnings_issued(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rearming_never_stacks() {
        let (center, timeout) = watcher();
        for _ in 0..5 {
            timeout.arm();
            sleep(Duration::from_secs(1)).await;
        }

        sleep(DEFAULT_WARNING_AFTER).await;
        assert_eq!(timeout.warnings_issued(), 1);
        assert_eq!(center.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_bus_activity_suppresses_warning() {
        let bus = EventBus::new();
        let (_center, timeout) = watcher();
        let _subscription = timeout.attach(&bus);
        timeout.arm();

        sleep(Duration::from_secs(24 * 60)).await;
        bus.publish(UiEvent::KeyPress);
        sleep(Duration::from_secs(24 * 60)).await;
        bus.publish(UiEvent::input("quickSearch", "ng"));
        sleep(Duration::from_secs(30)).await;
        assert_eq!(timeout.warnings_issued(), 0);

        sleep(Duration::from_secs(60)).await;
        assert_eq!(timeout.warnings_issued(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_disarms() {
        let (_center, timeout) = watcher();
        timeout.arm();
        assert!(timeout.is_armed());
        timeout.stop();

        sleep(DEFAULT_WARNING_AFTER * 2).await;
        assert_eq!(timeout.warnings_issued(), 0);
        assert!(!timeout.is_armed());
    }
}
