//! User repository
//!
//! The user id is assigned by storage; INSERT uses RETURNING so the
//! caller gets the stored row back, generated id and timestamp
//! included.

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use storefront_core::{User, UserCreateRequest, UserUpdateRequest};

use super::DbError;

/// User repository
pub struct UserRepo<'a> {
    pool: &'a SqlitePool,
}

fn user_from_row(row: &SqliteRow) -> Result<User, sqlx::Error> {
    Ok(User {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        balance: row.try_get("balance")?,
        is_member: row.try_get("is_member")?,
        created_at: row.try_get("created_at")?,
    })
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all users ordered by id. An empty table is an empty vec,
    /// not a fault.
    pub async fn list(&self) -> Result<Vec<User>, DbError> {
        let rows = sqlx::query(
            "SELECT id, name, email, balance, is_member, created_at FROM users ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        let users = rows
            .iter()
            .map(user_from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(users)
    }

    pub async fn get(&self, id: i64) -> Result<User, DbError> {
        let row = sqlx::query(
            "SELECT id, name, email, balance, is_member, created_at FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "user",
            id: id.to_string(),
        })?;

        Ok(user_from_row(&row)?)
    }

    pub async fn create(&self, req: &UserCreateRequest) -> Result<User, DbError> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (name, email, balance, is_member, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, name, email, balance, is_member, created_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.email)
        .bind(req.balance)
        .bind(req.is_member)
        .bind(Utc::now())
        .fetch_one(self.pool)
        .await?;

        Ok(user_from_row(&row)?)
    }

    /// Full-column update of the mutable fields (name, balance,
    /// membership); id and email are immutable after creation.
    pub async fn update(&self, id: i64, req: &UserUpdateRequest) -> Result<(), DbError> {
        let result = sqlx::query("UPDATE users SET name = ?, balance = ?, is_member = ? WHERE id = ?")
            .bind(&req.name)
            .bind(req.balance)
            .bind(req.is_member)
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "user",
                id: id.to_string(),
            });
        }
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "user",
                id: id.to_string(),
            });
        }
        Ok(())
    }
}
