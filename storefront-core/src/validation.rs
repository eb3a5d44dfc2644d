//! Validation error types

use thiserror::Error;

/// Validation error for request payloads
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    #[error("{field} is required")]
    Empty { field: &'static str },

    /// Numeric field must be strictly positive
    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::Empty { field: "name" };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::NotPositive { field: "price" };
        assert_eq!(err.to_string(), "price must be greater than zero");
    }
}
