//! Library partition handle
//!
//! A [`Library`] is an explicitly constructed handle to one book
//! collection: open on startup, close on shutdown. Nothing relies on
//! implicit finalization to release the underlying SQLite file.

use std::path::Path;

use sqlx::SqlitePool;

use crate::db::{self, BookRepository, ReadingProgress};
use crate::error::Result;

/// Default file name for the single global collection
pub const DEFAULT_LIBRARY_FILE: &str = "books.db";

/// Handle to one book partition.
///
/// Clones share the same pool; closing any clone closes all of them.
#[derive(Debug, Clone)]
pub struct Library {
    pool: SqlitePool,
}

impl Library {
    /// Open (creating if missing) the library at the given path and
    /// initialize its schema.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(path, 5).await
    }

    /// Open with an explicit pool size
    pub async fn open_with(path: impl AsRef<Path>, max_connections: u32) -> Result<Self> {
        let path = path.as_ref();
        let pool = db::create_pool(path, max_connections).await?;
        db::init_books_schema(&pool).await?;

        tracing::info!(path = %path.display(), "opened library");

        Ok(Self { pool })
    }

    /// Book operations on this partition
    pub fn books(&self) -> BookRepository<'_> {
        BookRepository::new(&self.pool)
    }

    /// Reading progress for this partition
    pub async fn progress(&self) -> Result<ReadingProgress> {
        db::reading_progress(&self.pool).await
    }

    /// Get the underlying pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the partition. Subsequent operations fail with a
    /// storage-unavailable error.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

// ============================================================================
// Tests
// ============================================================================
