//! Database module for SQLite persistence
//!
//! Handles book records, user accounts, and reading-progress queries.

mod books;
mod progress;
mod schema;
mod users;

pub use books::*;
pub use progress::*;
pub use schema::*;
pub use users::*;

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::error::{Result, StoreError};

/// Create a new database connection pool for the given file.
///
/// The file is created if missing. Every mutating statement commits
/// immediately; no multi-statement transactions are used anywhere in
/// this crate. An unreachable file surfaces as
/// [`StoreError::Unavailable`].
pub async fn create_pool(path: &Path, max_connections: u32) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .map_err(|e| StoreError::Unavailable(e.to_string()))?;

    tracing::debug!(path = %path.display(), "opened sqlite pool");

    Ok(pool)
}

#[cfg(test)]
pub(crate) async fn memory_pool() -> SqlitePool {
    // One connection only: each in-memory connection is its own database.
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite")
}
