//! Application state management
//!
//! Composition root for the multi-user variant: one accounts database
//! plus a registry of per-user library partitions, all with explicit
//! open/shutdown lifecycle.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::Config;
use crate::db::{self, User, UserRepository};
use crate::error::Result;
use crate::library::Library;
use crate::tenants::TenantRegistry;

const ACCOUNTS_FILE: &str = "accounts.db";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    accounts: SqlitePool,
    tenants: TenantRegistry,
}

impl AppState {
    /// Open the accounts database under the configured data directory
    /// and prepare the tenant registry.
    pub async fn open(config: Config) -> Result<Self> {
        std::fs::create_dir_all(&config.data_dir)?;

        let accounts_path = config.data_dir.join(ACCOUNTS_FILE);
        let accounts = db::create_pool(&accounts_path, config.max_connections).await?;
        db::init_users_schema(&accounts).await?;

        tracing::info!(path = %accounts_path.display(), "opened accounts database");

        let tenants = TenantRegistry::new(config.data_dir.clone(), config.max_connections);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                accounts,
                tenants,
            }),
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Account operations (register, authenticate)
    pub fn users(&self) -> UserRepository<'_> {
        UserRepository::new(&self.inner.accounts)
    }

    /// Route an authenticated user to their own library partition
    pub async fn library_for(&self, user: &User) -> Result<Library> {
        self.inner.tenants.library_for(user).await
    }

    /// Close the accounts database and every open tenant partition.
    ///
    /// Call before the application exits; handles are unusable after.
    pub async fn shutdown(&self) {
        tracing::info!("shutting down application state");
        self.inner.tenants.close_all().await;
        self.inner.accounts.close().await;
    }
}
