//! Database schema initialization

use sqlx::SqlitePool;

use crate::error::Result;

/// Initialize the books schema on a library partition
pub async fn init_books_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(BOOKS_SCHEMA_SQL).execute(pool).await?;

    Ok(())
}

/// Initialize the users schema on the accounts database
pub async fn init_users_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(USERS_SCHEMA_SQL).execute(pool).await?;

    Ok(())
}

const BOOKS_SCHEMA_SQL: &str = r#"
-- Book records; year is stored as free text, not validated as numeric
CREATE TABLE IF NOT EXISTS books (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    author TEXT NOT NULL,
    year TEXT NOT NULL,
    genre TEXT NOT NULL,
    read_status BOOLEAN NOT NULL DEFAULT 0
);

CREATE INDEX IF NOT EXISTS idx_books_title ON books(title);
"#;

const USERS_SCHEMA_SQL: &str = r#"
-- Accounts; password holds a hex digest, never plaintext
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT UNIQUE NOT NULL,
    password TEXT NOT NULL
);
"#;
