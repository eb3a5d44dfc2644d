//! Repository implementations for database access
//!
//! One repository per entity, borrowing the shared pool. Every
//! operation is a single parameterized statement; UPDATE/DELETE check
//! the affected-row count so a clean statement against a missing row
//! still reports not-found.

pub mod products;
pub mod users;

pub use products::ProductRepo;
pub use users::UserRepo;

use thiserror::Error;

/// Database error type
#[derive(Debug, Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}
