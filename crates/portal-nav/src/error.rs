//! Navigation Errors
//!
//! Error type shared by the navigation core and its host implementations.

use thiserror::Error;

/// Common result type for navigation operations
pub type NavResult<T> = Result<T, NavError>;

/// Navigation-level errors
#[derive(Debug, Error)]
pub enum NavError {
    #[error("request failed: {0}")]
    Http(String),

    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("invalid payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("{0} is unavailable")]
    Unavailable(&'static str),

    #[error("invalid config: {0}")]
    Config(String),
}
