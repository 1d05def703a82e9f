//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("View error: {0}")]
    View(#[from] hrms_view::ViewError),

    #[error("Locale error: {0}")]
    Locale(#[from] hrms_locale::LocaleError),

    #[error("Search error: {0}")]
    Search(#[from] hrms_search::SearchError),

    #[error("Notification error: {0}")]
    Notify(#[from] hrms_notify::NotifyError),

    #[error("Form error: {0}")]
    Form(#[from] hrms_forms::FormError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Portal not started")]
    NotStarted,
}
