//! Database connection pool and startup migrations

pub mod repos;

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

pub use repos::{DbError, ProductRepo, UserRepo};

/// Default maximum connections for the pool.
/// Kept low for single-process tooling.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Open (creating if missing) the database file and build the pool.
pub async fn connect(path: &Path) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .connect_with(options)
        .await
}

/// In-memory pool. A single pinned connection, since each SQLite
/// in-memory connection is its own database.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            balance INTEGER NOT NULL DEFAULT 0,
            is_member INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        );
    "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            price INTEGER NOT NULL,
            stock INTEGER NOT NULL DEFAULT 0,
            category TEXT NOT NULL DEFAULT '',
            rating REAL NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        );
    "#,
    )
    .execute(pool)
    .await?;

    info!("database migrations complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let pool = connect_in_memory().await.expect("pool creation failed");
        run_migrations(&pool).await.expect("first run failed");
        run_migrations(&pool).await.expect("second run failed");
    }

    #[tokio::test]
    async fn connect_creates_database_file() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        let path = dir.path().join("storefront.db");

        let pool = connect(&path).await.expect("pool creation failed");
        run_migrations(&pool).await.expect("migrations failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");
        assert_eq!(result.0, 1);
        assert!(path.exists());
    }
}
