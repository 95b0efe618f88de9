//! Estante
//!
//! SQLite-backed data-access core for a personal book collection
//! manager. Two usage shapes:
//!
//! - A single shared collection: open a [`library::Library`] at a path
//!   and use its book and progress operations directly.
//! - Per-user collections: open an [`state::AppState`], register and
//!   authenticate accounts, and route each user to their own isolated
//!   library partition.
//!
//! # Modules
//!
//! - `auth`: password digests
//! - `config`: environment-based configuration
//! - `db`: pools, schema, and the book/user/progress operations
//! - `library`: explicit-lifecycle handle to one book partition
//! - `tenants`: registry of per-user partitions
//! - `state`: multi-user composition root

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod library;
pub mod state;
pub mod tenants;

pub use config::Config;
pub use db::{Book, BookRepository, NewBook, ReadingProgress, User, UserRepository};
pub use error::{Result, StoreError};
pub use library::Library;
pub use state::AppState;
pub use tenants::TenantRegistry;
