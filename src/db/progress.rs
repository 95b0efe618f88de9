//! Reading progress statistics

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::error::Result;

/// Aggregate reading progress for one library partition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadingProgress {
    /// Total books in the collection
    pub total: i64,

    /// Percentage of books marked read; 0.0 for an empty collection
    pub percent_complete: f64,
}

/// Compute reading progress over a library partition.
///
/// `percent_complete = 100 * read / total`, with an empty collection
/// reported as zero rather than dividing by zero. Display rounding is
/// left to the caller.
pub async fn reading_progress(pool: &SqlitePool) -> Result<ReadingProgress> {
    let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM books")
        .fetch_one(pool)
        .await?;

    let (completed,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM books WHERE read_status = 1")
        .fetch_one(pool)
        .await?;

    let percent_complete = if total > 0 {
        completed as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    Ok(ReadingProgress {
        total,
        percent_complete,
    })
}

// ============================================================================
// Tests
// ============================================================================
