//! Error types for the book and account stores.

use thiserror::Error;

/// Unified store error type
#[derive(Debug, Error)]
pub enum StoreError {
    /// Registration attempted with an email that already has an account
    #[error("An account with email '{0}' already exists")]
    DuplicateEmail(String),

    /// The backing database cannot be reached (failed to open, pool
    /// closed, or timed out acquiring a connection)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Any other database error
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    /// IO error (std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolClosed | sqlx::Error::PoolTimedOut => {
                StoreError::Unavailable(err.to_string())
            }
            other => StoreError::Database(other),
        }
    }
}

impl StoreError {
    /// True when the error is a UNIQUE constraint violation.
    ///
    /// Used by registration to turn the users.email constraint into
    /// [`StoreError::DuplicateEmail`].
    pub fn is_unique_violation(&self) -> bool {
        match self {
            StoreError::Database(sqlx::Error::Database(db)) => db.is_unique_violation(),
            _ => false,
        }
    }
}
