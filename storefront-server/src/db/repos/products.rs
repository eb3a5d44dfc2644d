//! Product repository
//!
//! Product ids are caller-supplied and unique at the storage layer; a
//! duplicate id surfaces as the generic storage fault, not a distinct
//! error kind.

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::warn;

use storefront_core::{Product, ProductCreateRequest, ProductUpdateRequest};

use super::DbError;

const PRODUCT_COLUMNS: &str = "id, name, price, stock, category, rating, created_at";

/// Product repository
pub struct ProductRepo<'a> {
    pool: &'a SqlitePool,
}

fn product_from_row(row: &SqliteRow) -> Result<Product, sqlx::Error> {
    Ok(Product {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        price: row.try_get("price")?,
        stock: row.try_get("stock")?,
        category: row.try_get("category")?,
        rating: row.try_get("rating")?,
        created_at: row.try_get("created_at")?,
    })
}

impl<'a> ProductRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all products, newest first.
    pub async fn list(&self) -> Result<Vec<Product>, DbError> {
        let rows = sqlx::query(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        let products = rows
            .iter()
            .map(product_from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(products)
    }

    pub async fn get(&self, id: &str) -> Result<Product, DbError> {
        let row = sqlx::query(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "product",
            id: id.to_owned(),
        })?;

        Ok(product_from_row(&row)?)
    }

    pub async fn create(&self, req: &ProductCreateRequest) -> Result<Product, DbError> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO products (id, name, price, stock, category, rating, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(&req.id)
        .bind(&req.name)
        .bind(req.price)
        .bind(req.stock)
        .bind(&req.category)
        .bind(req.rating)
        .bind(Utc::now())
        .fetch_one(self.pool)
        .await?;

        Ok(product_from_row(&row)?)
    }

    /// Full-column update of every mutable field.
    pub async fn update(&self, id: &str, req: &ProductUpdateRequest) -> Result<(), DbError> {
        let result = sqlx::query(
            "UPDATE products SET name = ?, price = ?, stock = ?, category = ?, rating = ? WHERE id = ?",
        )
        .bind(&req.name)
        .bind(req.price)
        .bind(req.stock)
        .bind(&req.category)
        .bind(req.rating)
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "product",
                id: id.to_owned(),
            });
        }
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "product",
                id: id.to_owned(),
            });
        }
        Ok(())
    }

    /// Case-insensitive substring search against name or category,
    /// best-rated first. A row that fails to decode is skipped rather
    /// than failing the whole search.
    pub async fn search(&self, keyword: &str) -> Result<Vec<Product>, DbError> {
        let pattern = format!("%{keyword}%");
        let rows = sqlx::query(&format!(
            r#"
            SELECT {PRODUCT_COLUMNS} FROM products
            WHERE LOWER(name) LIKE LOWER(?) OR LOWER(category) LIKE LOWER(?)
            ORDER BY rating DESC
            "#
        ))
        .bind(&pattern)
        .bind(&pattern)
        .fetch_all(self.pool)
        .await?;

        let products = rows
            .iter()
            .filter_map(|row| match product_from_row(row) {
                Ok(product) => Some(product),
                Err(err) => {
                    warn!("skipping product row that failed to decode: {err}");
                    None
                }
            })
            .collect();
        Ok(products)
    }
}
