//! End-to-end flow over file-backed databases: register, authenticate,
//! and work inside per-user library partitions.

use anyhow::Result;
use estante::{AppState, Config, NewBook, StoreError};
use tempfile::TempDir;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "estante=debug".into()),
        )
        .try_init();
}

fn test_config(dir: &TempDir) -> Config {
    Config {
        data_dir: dir.path().to_path_buf(),
        max_connections: 5,
    }
}

fn dune(read: bool) -> NewBook {
    NewBook {
        title: "Dune".to_string(),
        author: "Frank Herbert".to_string(),
        year: "1965".to_string(),
        genre: "Sci-Fi".to_string(),
        read_status: read,
    }
}

#[tokio::test]
async fn register_login_and_manage_books() -> Result<()> {
    init_tracing();
    let dir = TempDir::new()?;
    let app = AppState::open(test_config(&dir)).await?;

    app.users()
        .register("Alice", "alice@example.com", "secret")
        .await?;

    // Login with the right credentials
    let alice = app
        .users()
        .authenticate("alice@example.com", "secret")
        .await?
        .expect("valid credentials");

    // Wrong password looks exactly like an unknown account
    assert!(app
        .users()
        .authenticate("alice@example.com", "wrong")
        .await?
        .is_none());

    let library = app.library_for(&alice).await?;
    let id = library.books().insert(&dune(false)).await?;

    let mut edited = dune(true);
    edited.genre = "Science Fiction".to_string();
    assert!(library.books().update(id, &edited).await?);

    let books = library.books().list_all().await?;
    assert_eq!(books.len(), 1);
    assert!(books[0].read_status);
    assert_eq!(books[0].genre, "Science Fiction");

    app.shutdown().await;
    Ok(())
}

#[tokio::test]
async fn duplicate_registration_is_rejected() -> Result<()> {
    let dir = TempDir::new()?;
    let app = AppState::open(test_config(&dir)).await?;

    app.users()
        .register("Alice", "alice@example.com", "one")
        .await?;
    let err = app
        .users()
        .register("Imposter", "alice@example.com", "two")
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicateEmail(_)));

    app.shutdown().await;
    Ok(())
}

#[tokio::test]
async fn users_only_see_their_own_partition() -> Result<()> {
    let dir = TempDir::new()?;
    let app = AppState::open(test_config(&dir)).await?;

    let users = app.users();
    let alice = users.register("Alice", "alice@example.com", "a").await?;
    let bob = users.register("Bob", "bob@example.com", "b").await?;

    let alice_lib = app.library_for(&alice).await?;
    alice_lib.books().insert(&dune(true)).await?;

    let bob_lib = app.library_for(&bob).await?;
    assert!(bob_lib.books().list_all().await?.is_empty());

    // Progress is per partition too
    let progress = alice_lib.progress().await?;
    assert_eq!(progress.total, 1);
    assert_eq!(progress.percent_complete, 100.0);
    assert_eq!(bob_lib.progress().await?.total, 0);

    app.shutdown().await;
    Ok(())
}

#[tokio::test]
async fn shutdown_releases_every_handle() -> Result<()> {
    let dir = TempDir::new()?;
    let app = AppState::open(test_config(&dir)).await?;

    let alice = app
        .users()
        .register("Alice", "alice@example.com", "a")
        .await?;
    let library = app.library_for(&alice).await?;

    app.shutdown().await;

    assert!(matches!(
        library.books().list_all().await.unwrap_err(),
        StoreError::Unavailable(_)
    ));
    assert!(app
        .users()
        .authenticate("alice@example.com", "a")
        .await
        .is_err());
    Ok(())
}
