//! # catalog-core: Product Domain Model
//!
//! Pure types of the product catalog with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Product Catalog Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │          Web service layer (out of scope: upstream caller)       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON mapping                           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ catalog-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  product  │  │   price   │  │validation │  │  factory  │  │   │
//! │  │   │  Product  │  │ PriceQuery│  │  rules    │  │  samples  │  │   │
//! │  │   │  Category │  │  cents    │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 catalog-db (Database Layer)                     │   │
//! │  │              SQLite queries, migration, repository              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`] - `Product` record, `Category` enum, JSON mapping
//! - [`price`] - Price parsing and cents normalization
//! - [`error`] - `DataValidationError`
//! - [`validation`] - Field rules
//! - [`factory`] - Deterministic sample products
//!
//! ## Example Usage
//!
//! ```rust
//! use catalog_core::{Category, Product};
//! use rust_decimal::Decimal;
//! use serde_json::json;
//!
//! let mut product = Product::default();
//! product.deserialize(&json!({
//!     "name": "Fedora",
//!     "description": "A red hat",
//!     "price": "12.50",
//!     "available": true,
//!     "category": "CLOTHS",
//! })).unwrap();
//!
//! assert_eq!(product.category, Category::Cloths);
//! assert_eq!(product.price, Decimal::new(1250, 2));
//! assert_eq!(product.serialize()["price"], json!("12.50"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod factory;
pub mod price;
pub mod product;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{DataValidationError, ValidationResult};
pub use price::PriceQuery;
pub use product::{Category, Product};
pub use rust_decimal::Decimal;
