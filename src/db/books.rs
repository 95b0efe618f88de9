//! Book database operations

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::error::Result;

/// Book record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    /// Publication year, stored as entered (free text)
    pub year: String,
    pub genre: String,
    pub read_status: bool,
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.read_status { "Read" } else { "Unread" };
        write!(
            f,
            "{} by {} ({}) - {} - {}",
            self.title, self.author, self.year, self.genre, status
        )
    }
}

/// Fields for creating a book, or for fully replacing one on update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: String,
    pub genre: String,
    pub read_status: bool,
}

/// Book repository over one library partition
pub struct BookRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> BookRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new book, returning its freshly assigned id
    pub async fn insert(&self, book: &NewBook) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO books (title, author, year, genre, read_status)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.year)
        .bind(&book.genre)
        .bind(book.read_status)
        .execute(self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Delete every book whose title matches exactly.
    ///
    /// Titles are not unique, so this removes all matching rows and
    /// returns how many were removed; 0 means nothing matched.
    pub async fn delete_by_title(&self, title: &str) -> Result<u64> {
        let result = sqlx::query("DELETE FROM books WHERE title = ?")
            .bind(title)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Replace all fields of the book with the given id.
    ///
    /// Returns `false` when no book has that id; partial-field updates
    /// are not supported.
    pub async fn update(&self, id: i64, book: &NewBook) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE books SET title = ?, author = ?, year = ?, genre = ?, read_status = ?
            WHERE id = ?
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.year)
        .bind(&book.genre)
        .bind(book.read_status)
        .bind(id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// First book whose title matches exactly, if any
    pub async fn find_by_title(&self, title: &str) -> Result<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, author, year, genre, read_status
            FROM books
            WHERE title = ?
            ORDER BY id ASC
            "#,
        )
        .bind(title)
        .fetch_optional(self.pool)
        .await?;

        Ok(book)
    }

    /// Snapshot of every book, in insertion (id) order
    pub async fn list_all(&self) -> Result<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, author, year, genre, read_status
            FROM books
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(books)
    }

    /// Search books by title or author substring.
    ///
    /// Matching is case-insensitive for ASCII text (SQLite LIKE
    /// semantics). No match yields an empty vector.
    pub async fn search(&self, text: &str) -> Result<Vec<Book>> {
        let pattern = format!("%{}%", text);

        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, author, year, genre, read_status
            FROM books
            WHERE title LIKE ? OR author LIKE ?
            ORDER BY id ASC
            "#,
        )
        .bind(&pattern)
        .bind(&pattern)
        .fetch_all(self.pool)
        .await?;

        Ok(books)
    }
}

// ============================================================================
// Tests
// ============================================================================
