//! User account operations

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::auth;
use crate::error::{Result, StoreError};

/// User account record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Hex digest of the password, never plaintext
    #[serde(skip_serializing)]
    pub password: String,
}

/// User repository over the accounts database
pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Register a new account.
    ///
    /// The plaintext password is digested before storage. A second
    /// registration with the same email fails with
    /// [`StoreError::DuplicateEmail`] and leaves the first account
    /// untouched.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<User> {
        let digest = auth::digest(password);

        let result = sqlx::query(
            r#"
            INSERT INTO users (name, email, password)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(&digest)
        .execute(self.pool)
        .await
        .map_err(StoreError::from);

        let result = match result {
            Err(err) if err.is_unique_violation() => {
                return Err(StoreError::DuplicateEmail(email.to_string()));
            }
            other => other?,
        };

        tracing::info!(email, "registered account");

        Ok(User {
            id: result.last_insert_rowid(),
            name: name.to_string(),
            email: email.to_string(),
            password: digest,
        })
    }

    /// Look up an account by credentials.
    ///
    /// Returns `None` for a wrong password exactly as for an unknown
    /// email, so callers cannot probe which addresses have accounts.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<Option<User>> {
        let digest = auth::digest(password);

        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE email = ? AND password = ?
            "#,
        )
        .bind(email)
        .bind(&digest)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{init_users_schema, memory_pool};

    async fn test_pool() -> SqlitePool {
        let pool = memory_pool().await;
        init_users_schema(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn test_register_and_authenticate() {
        let pool = test_pool().await;
        let repo = UserRepository::new(&pool);

        let user = repo
            .register("Alice", "alice@example.com", "correct horse")
            .await
            .unwrap();
        assert_eq!(user.email, "alice@example.com");
        assert_ne!(user.password, "correct horse");

        let found = repo
            .authenticate("alice@example.com", "correct horse")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, user.id);
        assert_eq!(found.name, "Alice");
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let pool = test_pool().await;
        let repo = UserRepository::new(&pool);

        repo.register("Alice", "alice@example.com", "one")
            .await
            .unwrap();

        let err = repo
            .register("Also Alice", "alice@example.com", "two")
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateEmail(ref email) if email == "alice@example.com"));

        // First account unchanged: original password still works
        let found = repo
            .authenticate("alice@example.com", "one")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.name, "Alice");
    }

    #[tokio::test]
    async fn test_wrong_password_matches_unknown_email() {
        let pool = test_pool().await;
        let repo = UserRepository::new(&pool);

        repo.register("Alice", "alice@example.com", "secret")
            .await
            .unwrap();

        // Both failure modes come back as the same None
        let wrong_password = repo
            .authenticate("alice@example.com", "not the secret")
            .await
            .unwrap();
        let unknown_email = repo
            .authenticate("nobody@example.com", "secret")
            .await
            .unwrap();
        assert!(wrong_password.is_none());
        assert!(unknown_email.is_none());
    }

    #[tokio::test]
    async fn test_plaintext_never_stored() {
        let pool = test_pool().await;
        let repo = UserRepository::new(&pool);

        repo.register("Alice", "alice@example.com", "secret")
            .await
            .unwrap();

        let (stored,): (String,) =
            sqlx::query_as("SELECT password FROM users WHERE email = 'alice@example.com'")
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(stored, crate::auth::digest("secret"));
    }
}
