//! Search error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Search endpoint returned status {0}")]
    Status(u16),

    #[error("Invalid search endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}
