//! Group state persistence errors.

use thiserror::Error;

/// Errors raised by group state backends.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("scope {0:?} contains '.'")]
    InvalidScope(String),
    #[error("state backend lock poisoned")]
    LockPoisoned,
}
