//! Database connection pool management
//!
//! Uses sqlx SqlitePool over a single file, created when missing.

use std::path::Path;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use super::repos::DbError;

/// Default maximum connections for the pool.
/// Reads dominate; SQLite serializes the rare write itself.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Open (creating if absent) the SQLite store at `path`.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the
/// file cannot be opened.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("./plans.db").await?;
/// ```
pub async fn create_pool(path: impl AsRef<Path>) -> Result<SqlitePool, DbError> {
    create_pool_with_options(path, DEFAULT_MAX_CONNECTIONS).await
}

/// Open the SQLite store with a custom connection limit.
pub async fn create_pool_with_options(
    path: impl AsRef<Path>,
    max_connections: u32,
) -> Result<SqlitePool, DbError> {
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5)); // Prevent SQLITE_BUSY with concurrent readers

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::debug!(path = %path.display(), "Opened plan store");
    Ok(pool)
}

/// Round-trip a trivial query to confirm the store answers.
pub async fn ping(pool: &SqlitePool) -> Result<(), DbError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
