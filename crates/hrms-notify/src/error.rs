//! Notification error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Notification not found: {0}")]
    NotFound(String),

    #[error("Unknown severity: {0}")]
    UnknownSeverity(String),
}
