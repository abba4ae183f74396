//! Error types for the cache library
//!
//! The cache itself never fails. These are the errors of the database layer
//! that read-through callers propagate, plus configuration loading errors.

use thiserror::Error;

// == Database Error Enum ==
/// Domain errors raised by the database layer sitting behind the cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DbError {
    /// Client is not connected
    #[error("{0}")]
    Disconnected(String),

    /// Requested document does not exist
    #[error("{0}")]
    NotFound(String),

    /// Write collided with an existing document
    #[error("{0}")]
    Conflict(String),

    /// Transaction aborted, safe to retry
    #[error("{0}")]
    Transaction(String),

    /// Write was not acknowledged by the server
    #[error("{0}")]
    Unacknowledged(String),

    /// Any other database failure
    #[error("{0}")]
    Other(String),
}

impl DbError {
    pub fn disconnected() -> Self {
        Self::Disconnected("Disconnected".to_string())
    }

    pub fn not_found() -> Self {
        Self::NotFound("Not Found".to_string())
    }

    pub fn conflict() -> Self {
        Self::Conflict("Conflict".to_string())
    }

    pub fn transaction() -> Self {
        Self::Transaction("Transaction Error".to_string())
    }

    pub fn unacknowledged() -> Self {
        Self::Unacknowledged("Unacknowledged".to_string())
    }

    pub fn other() -> Self {
        Self::Other("Unknown DB Error".to_string())
    }

    /// Returns true for errors where retrying the operation may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transaction(_))
    }
}

// == Config Error Enum ==
/// Errors raised while loading a [`CacheConfig`](crate::CacheConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Capacity must be at least one
    #[error("Invalid capacity: {0}")]
    InvalidCapacity(usize),

    /// Malformed JSON document
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// == Result Type Alias ==
/// Convenience Result type for database-backed loaders.
pub type Result<T, E = DbError> = std::result::Result<T, E>;
