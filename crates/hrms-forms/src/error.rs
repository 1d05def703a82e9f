//! Form error types

use thiserror::Error;

use crate::print::PrintState;
use crate::validation::Violation;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("Form has {} invalid field(s)", .0.len())]
    Invalid(Vec<Violation>),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server returned status {status}: {body}")]
    Server { status: u16, body: String },

    #[error("Unsupported form method: {0}")]
    UnsupportedMethod(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Unknown export format: {0}")]
    UnknownFormat(String),

    #[error("Field not found: {0}")]
    FieldNotFound(String),

    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("Row not found: {0}")]
    RowNotFound(String),

    #[error("Field group not found: {0}")]
    FieldGroupNotFound(String),

    #[error("Invalid print transition from {from} to {to}")]
    InvalidTransition { from: PrintState, to: PrintState },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FormError {
    /// Text shown to the user after a failed submit: the server's own body
    /// when it answered, otherwise the error itself.
    pub fn user_text(&self) -> String {
        match self {
            FormError::Server { body, .. } => body.clone(),
            other => other.to_string(),
        }
    }
}
