//! Portal configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Origin the portal pages are served from
    pub base_url: String,
    /// Employee search endpoint, relative to `base_url`
    pub search_endpoint: String,
    /// Quiet period after the last keystroke before searching
    pub search_debounce_ms: u64,
    pub min_query_chars: usize,
    /// Banner lifetime
    pub notification_ttl_ms: u64,
    /// Inactivity before the session warning shows
    pub session_warning_minutes: u64,
    pub modal_focus_delay_ms: u64,
}

impl Config {
    /// Parse a JSON override; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let base = self.base_url()?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(CoreError::Config(format!(
                "base_url must be http or https, got {}",
                base.scheme()
            )));
        }
        if self.search_endpoint.trim().is_empty() {
            return Err(CoreError::Config("search_endpoint is empty".to_string()));
        }
        if self.min_query_chars == 0 {
            return Err(CoreError::Config(
                "min_query_chars must be at least 1".to_string(),
            ));
        }
        if self.notification_ttl_ms == 0 {
            return Err(CoreError::Config(
                "notification_ttl_ms must be positive".to_string(),
            ));
        }
        if self.session_warning_minutes == 0 {
            return Err(CoreError::Config(
                "session_warning_minutes must be positive".to_string(),
            ));
        }
        if self.session_warning_minutes.checked_mul(60).is_none() {
            return Err(CoreError::Config(format!(
                "session_warning_minutes is too large: {}",
                self.session_warning_minutes
            )));
        }
        Ok(())
    }

    pub fn base_url(&self) -> Result<Url> {
        Ok(Url::parse(&self.base_url)?)
    }

    pub fn search_url(&self) -> Result<Url> {
        Ok(self.base_url()?.join(&self.search_endpoint)?)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }

    pub fn session_warning_after(&self) -> Duration {
        Duration::from_secs(self.session_warning_minutes.saturating_mul(60))
    }

    pub fn modal_focus_delay(&self) -> Duration {
        Duration::from_millis(self.modal_focus_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/".to_string(),
            search_endpoint: "/api/search-employees".to_string(),
            search_debounce_ms: 300,
            min_query_chars: 2,
            notification_ttl_ms: 5000,
            session_warning_minutes: 25,
            modal_focus_delay_ms: 500,
        }
    }
}
