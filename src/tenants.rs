//! Per-user partition registry
//!
//! Routes each account to its own library file. Partitions are keyed by
//! the user's row id rather than a hash of the raw email: the id is
//! stable for the lifetime of the account and cannot collide.

use std::collections::HashMap;
use std::path::PathBuf;

use tokio::sync::Mutex;

use crate::db::User;
use crate::error::Result;
use crate::library::Library;

/// Registry of open per-user libraries.
///
/// `library_for` opens a partition on first use and returns the cached
/// handle afterwards, so repeated requests for the same user share one
/// pool. `close_all` releases every cached handle.
pub struct TenantRegistry {
    data_dir: PathBuf,
    max_connections: u32,
    libraries: Mutex<HashMap<i64, Library>>,
}

impl TenantRegistry {
    pub fn new(data_dir: PathBuf, max_connections: u32) -> Self {
        Self {
            data_dir,
            max_connections,
            libraries: Mutex::new(HashMap::new()),
        }
    }

    /// File backing the given user's partition
    pub fn partition_path(&self, user: &User) -> PathBuf {
        self.data_dir.join(format!("library-{}.db", user.id))
    }

    /// Get (opening if necessary) the library for an authenticated user
    pub async fn library_for(&self, user: &User) -> Result<Library> {
        let mut libraries = self.libraries.lock().await;

        if let Some(library) = libraries.get(&user.id) {
            return Ok(library.clone());
        }

        let path = self.partition_path(user);
        let library = Library::open_with(&path, self.max_connections).await?;
        tracing::info!(user_id = user.id, path = %path.display(), "opened tenant library");

        libraries.insert(user.id, library.clone());
        Ok(library)
    }

    /// Close every open partition
    pub async fn close_all(&self) {
        let mut libraries = self.libraries.lock().await;
        for (_, library) in libraries.drain() {
            library.close().await;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
