//! User record and request payloads
//!
//! The user id is assigned by storage; email is immutable after
//! creation, so the update payload carries only name, balance and
//! membership.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// A stored user row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub balance: i64,
    pub is_member: bool,
    pub created_at: DateTime<Utc>,
}

/// Creation payload: name and email required, the rest defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreateRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub balance: i64,
    #[serde(default)]
    pub is_member: bool,
}

impl UserCreateRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }
        if self.email.is_empty() {
            return Err(ValidationError::Empty { field: "email" });
        }
        Ok(())
    }
}

/// Update payload. Fields default to their zero value when omitted
/// and the update overwrites every mutable column with whatever is
/// here; there is no partial-field semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserUpdateRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub balance: i64,
    #[serde(default)]
    pub is_member: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_name() {
        let req = UserCreateRequest {
            name: String::new(),
            email: "a@b.com".into(),
            balance: 0,
            is_member: false,
        };
        let err = req.validate().unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "name" }));
    }

    #[test]
    fn create_requires_email() {
        let req = UserCreateRequest {
            name: "Ana".into(),
            email: String::new(),
            balance: 0,
            is_member: false,
        };
        let err = req.validate().unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "email" }));
    }

    #[test]
    fn create_accepts_minimal_payload() {
        let req: UserCreateRequest =
            serde_json::from_str(r#"{"name":"Ana","email":"a@b.com"}"#).unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.balance, 0);
        assert!(!req.is_member);
    }

    #[test]
    fn update_defaults_missing_fields_to_zero() {
        let req: UserUpdateRequest = serde_json::from_str(r#"{"name":"Ana"}"#).unwrap();
        assert_eq!(req.name, "Ana");
        assert_eq!(req.balance, 0);
        assert!(!req.is_member);
    }
}
