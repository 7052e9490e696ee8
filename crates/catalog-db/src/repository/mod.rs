//! # Repository Module
//!
//! Database repository implementations for the product catalog.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Caller                                                                │
//! │       │  db.products().find_by_category(Category::Tools)               │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── create / update / delete / delete_all                             │
//! │  ├── all / count / find                                                │
//! │  └── find_by_name / _availability / _price / _category                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product CRUD and finders

pub mod product;
