// ABOUTME: SQLite connection management and schema bootstrap for Postforge
// ABOUTME: Exposes the user API key storage layer

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::debug;

pub mod api_keys;

pub use api_keys::{ApiKeyStorage, UserApiKeys};

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Open (creating if missing) the SQLite database at the given path and
/// ensure the schema exists.
pub async fn init_pool(database_path: &Path) -> StorageResult<SqlitePool> {
    if let Some(parent) = database_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    debug!("Connecting to database: {}", database_path.display());

    let options = SqliteConnectOptions::new()
        .filename(database_path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    run_schema(&pool).await?;
    Ok(pool)
}

/// In-memory pool for tests
pub async fn init_memory_pool() -> StorageResult<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;

    run_schema(&pool).await?;
    Ok(pool)
}

async fn run_schema(pool: &SqlitePool) -> StorageResult<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS user_api_keys (
            user_id TEXT PRIMARY KEY,
            groq_api_key TEXT,
            phi_agno_api_key TEXT,
            created_at TEXT NOT NULL DEFAULT (datetime('now', 'utc')),
            updated_at TEXT NOT NULL DEFAULT (datetime('now', 'utc'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
