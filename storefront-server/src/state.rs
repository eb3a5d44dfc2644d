//! Application state shared across handlers
//!
//! The pool is constructed once at startup and injected into route
//! handlers through axum's `State`; nothing reaches for a global.

use sqlx::SqlitePool;

/// Shared application state. `SqlitePool` is internally
/// reference-counted; clones share the same pool.
#[derive(Clone)]
pub struct AppState {
    pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
