//! # Validation Module
//!
//! Field rules checked before a product is written or after it is
//! deserialized.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Product::deserialize                                         │
//! │  ├── Key presence, JSON types, category membership                     │
//! │  └── then THIS MODULE via Product::validate                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: ProductRepository create/update                              │
//! │  └── THIS MODULE via Product::validate                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── CHECK on category                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;

use crate::error::{DataValidationError, ValidationResult};
use crate::price;

/// Maximum characters in a product name.
pub const MAX_NAME_LEN: usize = 100;

/// Maximum characters in a product description.
pub const MAX_DESCRIPTION_LEN: usize = 250;

/// Validates a product name.
///
/// At most [`MAX_NAME_LEN`] characters. Any string fits otherwise, the empty
/// one included, same as the column.
///
/// ## Example
/// ```rust
/// use catalog_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Fedora").is_ok());
/// assert!(validate_product_name(&"A".repeat(101)).is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.chars().count() > MAX_NAME_LEN {
        return Err(DataValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates an optional description. `None` and empty text are fine.
pub fn validate_description(description: Option<&str>) -> ValidationResult<()> {
    match description {
        Some(text) if text.chars().count() > MAX_DESCRIPTION_LEN => {
            Err(DataValidationError::TooLong {
                field: "description".to_string(),
                max: MAX_DESCRIPTION_LEN,
            })
        }
        _ => Ok(()),
    }
}

/// Validates that a price fits the storage column.
pub fn validate_price(amount: Decimal) -> ValidationResult<()> {
    price::to_cents(amount).map(|_| ())
}

// =============================================================================
// Unit Tests
// =============================================================================
