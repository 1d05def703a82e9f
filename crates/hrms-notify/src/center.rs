//! Notification center
//!
//! Holds the banners currently on screen, newest first, and the removal
//! timer of each one.

use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

use hrms_view::Render;

use crate::error::NotifyError;
use crate::notification::{Banner, Severity};
use crate::Result;

pub const DEFAULT_AUTO_DISMISS: Duration = Duration::from_millis(5000);

pub struct NotificationCenter {
    banners: Arc<RwLock<Vec<Banner>>>,
    timers: Arc<Mutex<HashMap<String, JoinHandle<()>>>>,
    auto_dismiss: Duration,
}

impl NotificationCenter {
    pub fn new(auto_dismiss: Duration) -> Self {
        Self {
            banners: Arc::new(RwLock::new(Vec::new())),
            timers: Arc::new(Mutex::new(HashMap::new())),
            auto_dismiss,
        }
    }

    /// Put a banner at the top and schedule its removal.
    ///
    /// Must be called from within a tokio runtime.
    pub fn show(&self, severity: Severity, message: impl Into<String>) -> Banner {
        let banner = Banner::new(severity, message.into());
        self.banners.write().insert(0, banner.clone());
        self.schedule_removal(&banner.id);

        tracing::info!(
            banner_id = %banner.id,
            severity = %banner.severity,
            "Showing notification"
        );

        banner
    }

    pub fn success(&self, message: impl Into<String>) -> Banner {
        self.show(Severity::Success, message)
    }

    pub fn danger(&self, message: impl Into<String>) -> Banner {
        self.show(Severity::Danger, message)
    }

    pub fn warning(&self, message: impl Into<String>) -> Banner {
        self.show(Severity::Warning, message)
    }

    pub fn info(&self, message: impl Into<String>) -> Banner {
        self.show(Severity::Info, message)
    }

    /// Take over alerts the server rendered into the page. They keep their
    /// order below any banners already shown and expire on the same delay.
    pub fn adopt_flashed<I>(&self, flashed: I) -> Vec<Banner>
    where
        I: IntoIterator<Item = (Severity, String)>,
    {
        let adopted: Vec<Banner> = flashed
            .into_iter()
            .map(|(severity, message)| Banner::new(severity, message))
            .collect();

        self.banners.write().extend(adopted.iter().cloned());
        for banner in &adopted {
            self.schedule_removal(&banner.id);
        }

        tracing::debug!(count = adopted.len(), "Adopted flashed alerts");

        adopted
    }

    /// Close a banner before its timer fires
    pub fn dismiss(&self, id: &str) -> Result<Banner> {
        if let Some(timer) = self.timers.lock().remove(id) {
            timer.abort();
        }

        let mut banners = self.banners.write();
        let index = banners
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| NotifyError::NotFound(id.to_string()))?;
        let banner = banners.remove(index);

        tracing::debug!(banner_id = %id, "Dismissed notification");

        Ok(banner)
    }

    pub fn clear(&self) {
        for (_, timer) in self.timers.lock().drain() {
            timer.abort();
        }
        self.banners.write().clear();
    }

    pub fn banners(&self) -> Vec<Banner> {
        self.banners.read().clone()
    }

    pub fn len(&self) -> usize {
        self.banners.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.banners.read().is_empty()
    }

    pub fn render_html(&self) -> String {
        self.banners
            .read()
            .iter()
            .map(Render::render_html)
            .collect()
    }

    fn schedule_removal(&self, id: &str) {
        let banners = Arc::clone(&self.banners);
        let timers = Arc::clone(&self.timers);
        let delay = self.auto_dismiss;
        let banner_id = id.to_string();

        // Held across the spawn so the task cannot remove its entry first
        let mut pending = self.timers.lock();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            banners.write().retain(|b| b.id != banner_id);
            timers.lock().remove(&banner_id);
            tracing::debug!(banner_id = %banner_id, "Notification expired");
        });
        pending.insert(id.to_string(), handle);
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(DEFAULT_AUTO_DISMISS)
    }
}

impl Clone for NotificationCenter {
    fn clone(&self) -> Self {
        Self {
            banners: Arc::clone(&self.banners),
            timers: Arc::clone(&self.timers),
            auto_dismiss: self.auto_dismiss,
        }
    }
}
