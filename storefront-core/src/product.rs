//! Product record and request payloads
//!
//! Product ids are caller-chosen strings, unique at the storage
//! layer. Price is a whole-unit integer and must be positive at
//! creation; stock has no guard and may go negative.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// A stored product row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: i64,
    pub stock: i64,
    pub category: String,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
}

/// Creation payload: id, name and a positive price required
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreateRequest {
    pub id: String,
    pub name: String,
    pub price: i64,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub rating: f64,
}

impl ProductCreateRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::Empty { field: "id" });
        }
        if self.name.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }
        if self.price <= 0 {
            return Err(ValidationError::NotPositive { field: "price" });
        }
        Ok(())
    }
}

/// Update payload, full-overwrite semantics: omitted fields land as
/// their zero value in the UPDATE.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdateRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub rating: f64,
}
