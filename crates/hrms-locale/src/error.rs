//! Locale error types

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LocaleError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Date out of range: {0}")]
    OutOfRange(String),
}
