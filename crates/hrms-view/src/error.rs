//! View error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewError {
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
