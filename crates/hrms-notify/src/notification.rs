//! Banner data structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hrms_view::{escape_html, Render};

use crate::error::NotifyError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Danger,
    Warning,
    Info,
}

impl Severity {
    /// Suffix of the `alert-*` style class
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Danger => "danger",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = NotifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "success" => Ok(Severity::Success),
            "danger" | "error" => Ok(Severity::Danger),
            "warning" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            _ => Err(NotifyError::UnknownSeverity(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Banner {
    pub id: String,
    pub severity: Severity,
    pub message: String,
    pub created_at: DateTime<Utc>,
    /// Close control shown; always true for banners raised by the portal
    pub dismissible: bool,
}

impl Banner {
    pub fn new(severity: Severity, message: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            severity,
            message,
            created_at: Utc::now(),
            dismissible: true,
        }
    }
}

impl Render for Banner {
    fn render_html(&self) -> String {
        let mut out = String::new();
        out.push_str(r#"<div class="alert alert-"#);
        out.push_str(self.severity.as_str());
        if self.dismissible {
            out.push_str(" alert-dismissible");
        }
        out.push_str(r#" fade show" role="alert" data-banner-id=""#);
        out.push_str(&escape_html(&self.id));
        out.push_str(r#"">"#);
        out.push_str(&escape_html(&self.message));
        if self.dismissible {
            out.push_str(r#"<button type="button" class="btn-close" data-bs-dismiss="alert"></button>"#);
        }
        out.push_str("</div>");
        out
    }
}
