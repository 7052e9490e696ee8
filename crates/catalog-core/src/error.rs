//! # Error Types
//!
//! The single validation error kind of the product catalog.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  catalog-core errors (this file)                                       │
//! │  └── DataValidationError - Bad input or invalid record state           │
//! │                                                                         │
//! │  catalog-db errors (separate crate)                                    │
//! │  └── DbError             - Storage failures, wraps DataValidationError │
//! │                                                                         │
//! │  Flow: DataValidationError → DbError::Validation → caller              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending field in every message
//! 3. Errors are enum variants, never String
//! 4. Every "bad input" outcome is one of these variants, whatever layer finds it

use thiserror::Error;

// =============================================================================
// Data Validation Error
// =============================================================================

/// Input and state validation failures.
///
/// Raised while deserializing a product mapping, while checking field rules
/// before a write, and when a write needs an id the record does not have.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataValidationError {
    /// The mapping handed to `deserialize` is not a JSON object.
    #[error("Invalid product: body of request contained bad or no data")]
    NotAnObject,

    /// A required key is absent from the mapping.
    #[error("Invalid product: missing {field}")]
    MissingField { field: String },

    /// A key is present but holds the wrong JSON type.
    ///
    /// ## When This Occurs
    /// - `available` is a string such as `"True"` instead of a boolean
    /// - `name` is a number
    /// - `category` is not a string
    #[error("Invalid type for {field}: expected {expected}, found {found}")]
    InvalidType {
        field: String,
        expected: String,
        found: String,
    },

    /// The category name is not a member of the fixed set.
    #[error("Invalid attribute: category '{value}' is not one of {allowed:?}")]
    InvalidCategory { value: String, allowed: Vec<String> },

    /// The price is null, not numeric, or cannot be stored.
    #[error("Invalid price: {reason}")]
    InvalidPrice { reason: String },

    /// A write that targets an existing row was called on an unsaved record.
    #[error("{operation} called with empty id field")]
    MissingId { operation: String },

    /// Field value is too long for its column.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },
}

impl DataValidationError {
    /// Creates a MissingField error.
    pub fn missing(field: impl Into<String>) -> Self {
        DataValidationError::MissingField {
            field: field.into(),
        }
    }

    /// Creates an InvalidType error.
    pub fn invalid_type(
        field: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        DataValidationError::InvalidType {
            field: field.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Creates an InvalidPrice error.
    pub fn invalid_price(reason: impl Into<String>) -> Self {
        DataValidationError::InvalidPrice {
            reason: reason.into(),
        }
    }

    /// Creates a MissingId error for the named operation.
    pub fn missing_id(operation: impl Into<String>) -> Self {
        DataValidationError::MissingId {
            operation: operation.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with DataValidationError.
pub type ValidationResult<T> = Result<T, DataValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DataValidationError::missing("name");
        assert_eq!(err.to_string(), "Invalid product: missing name");

        let err = DataValidationError::missing_id("Update");
        assert_eq!(err.to_string(), "Update called with empty id field");
    }

    #[test]
    fn test_invalid_type_message() {
        let err = DataValidationError::invalid_type("available", "boolean", "string");
        assert_eq!(
            err.to_string(),
            "Invalid type for available: expected boolean, found string"
        );
    }
}
