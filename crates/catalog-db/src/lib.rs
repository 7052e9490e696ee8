//! # catalog-db: Database Layer for the Product Catalog
//!
//! SQLite storage for [`catalog_core::Product`] using sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Product Catalog Data Flow                           │
//! │                                                                         │
//! │  Caller constructs / mutates a Product                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   catalog-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repository   │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │◄───│ (product.rs)  │    │  (embedded)  │  │   │
//! │  │   │ SqlitePool    │    │ ProductRepo   │    │ 0001_create  │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database at DATABASE_URI                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Configuration and connection pool
//! - [`migrations`] - Embedded schema migration
//! - [`error`] - Database error types
//! - [`repository`] - `ProductRepository`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use catalog_core::{Category, Decimal, Product};
//! use catalog_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::from_env()).await?;
//!
//! let mut hat = Product::new("Fedora", "A red hat", Decimal::new(1250, 2), true, Category::Cloths);
//! db.products().create(&mut hat).await?;
//!
//! let clothes = db.products().find_by_category(Category::Cloths).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::product::ProductRepository;
