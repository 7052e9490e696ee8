//! # Product Types
//!
//! The product record and its category.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────┐         ┌─────────────────┐                  │
//! │  │       Product        │         │    Category     │                  │
//! │  │  ──────────────────  │         │  ─────────────  │                  │
//! │  │  id: Option<i64>     │         │  UNKNOWN (dflt) │                  │
//! │  │  name                │────────►│  CLOTHS         │                  │
//! │  │  description?        │         │  FOOD           │                  │
//! │  │  price: Decimal      │         │  HOUSEWARES     │                  │
//! │  │  available: bool     │         │  AUTOMOTIVE     │                  │
//! │  │  category            │         │  TOOLS          │                  │
//! │  └──────────────────────┘         └─────────────────┘                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Record Lifecycle
//! ```text
//! Product::new(..)        id = None      (in memory only)
//!      │
//!      ▼ create()
//! persisted               id = Some(n)   (row inserted)
//!      │
//!      ▼ update()         requires id, otherwise DataValidationError
//! persisted               row rewritten
//!      │
//!      ▼ delete()
//! gone                    row removed
//! ```
//!
//! ## JSON Mapping
//! `serialize` and `deserialize` exchange the record with the web layer as
//! `{id, name, description, price, available, category}`. Price travels as a
//! decimal string, category as its upper-case name.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;

use crate::error::{DataValidationError, ValidationResult};
use crate::price::price_from_json;
use crate::validation::{validate_description, validate_price, validate_product_name};

// =============================================================================
// Category
// =============================================================================

/// Fixed classification of a product.
///
/// The name string (`"CLOTHS"`, `"FOOD"`, ...) is what the JSON mapping and
/// the `category` column carry. Parsing is exact: `"cloths"` is rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "UPPERCASE"))]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    #[default]
    Unknown,
    Cloths,
    Food,
    Housewares,
    Automotive,
    Tools,
}

impl Category {
    /// Every member, in declaration order.
    pub const ALL: [Category; 6] = [
        Category::Unknown,
        Category::Cloths,
        Category::Food,
        Category::Housewares,
        Category::Automotive,
        Category::Tools,
    ];

    /// Returns the member name.
    pub const fn name(&self) -> &'static str {
        match self {
            Category::Unknown => "UNKNOWN",
            Category::Cloths => "CLOTHS",
            Category::Food => "FOOD",
            Category::Housewares => "HOUSEWARES",
            Category::Automotive => "AUTOMOTIVE",
            Category::Tools => "TOOLS",
        }
    }

    /// Returns all member names (for error messages).
    pub fn names() -> Vec<String> {
        Category::ALL.iter().map(|c| c.name().to_string()).collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = DataValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.name() == s)
            .ok_or_else(|| DataValidationError::InvalidCategory {
                value: s.to_string(),
                allowed: Category::names(),
            })
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog product.
///
/// `PartialEq` compares prices numerically, so `12.5` equals `12.50`.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Database-generated primary key; `None` until created.
    pub id: Option<i64>,

    /// Display name.
    pub name: String,

    /// Optional free-text description.
    pub description: Option<String>,

    /// Unit price.
    pub price: Decimal,

    /// Whether the product can currently be ordered.
    pub available: bool,

    /// Classification.
    pub category: Category,
}

impl Default for Product {
    fn default() -> Self {
        Product {
            id: None,
            name: String::new(),
            description: None,
            price: Decimal::ZERO,
            available: true,
            category: Category::Unknown,
        }
    }
}

impl Product {
    /// Creates an unsaved product.
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::{Category, Product};
    /// use rust_decimal::Decimal;
    ///
    /// let hat = Product::new("Fedora", "A red hat", Decimal::new(1250, 2), true, Category::Cloths);
    /// assert_eq!(hat.to_string(), "<Product Fedora id=[None]>");
    /// ```
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        available: bool,
        category: Category,
    ) -> Self {
        Product {
            id: None,
            name: name.into(),
            description: Some(description.into()),
            price,
            available,
            category,
        }
    }

    /// Checks field rules that the storage layer relies on.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_product_name(&self.name)?;
        validate_description(self.description.as_deref())?;
        validate_price(self.price)?;
        Ok(())
    }

    /// Serializes the product into a JSON object.
    ///
    /// ## Shape
    /// ```json
    /// {"id": 1, "name": "Fedora", "description": "A red hat",
    ///  "price": "12.50", "available": true, "category": "CLOTHS"}
    /// ```
    pub fn serialize(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "description": self.description,
            "price": self.price.to_string(),
            "available": self.available,
            "category": self.category.name(),
        })
    }

    /// Populates the product from a JSON object.
    ///
    /// ## Rules
    /// - `name`, `description`, `price`, `available`, `category` must all be present
    /// - `available` must be a JSON boolean; `"true"` is rejected
    /// - `category` must name a [`Category`] member exactly
    /// - `price` may be a number or a numeric string, never null
    /// - `id` is ignored; identity belongs to the database
    ///
    /// The record is left untouched when any rule fails.
    pub fn deserialize(&mut self, data: &Value) -> ValidationResult<&mut Self> {
        let fields = data.as_object().ok_or(DataValidationError::NotAnObject)?;

        let field = |key: &str| {
            fields
                .get(key)
                .ok_or_else(|| DataValidationError::missing(key))
        };

        let name = match field("name")? {
            Value::String(name) => name.clone(),
            other => {
                return Err(DataValidationError::invalid_type(
                    "name",
                    "string",
                    json_type_name(other),
                ))
            }
        };

        let description = match field("description")? {
            Value::String(text) => Some(text.clone()),
            Value::Null => None,
            other => {
                return Err(DataValidationError::invalid_type(
                    "description",
                    "string or null",
                    json_type_name(other),
                ))
            }
        };

        let price = price_from_json(field("price")?)?;

        let available = match field("available")? {
            Value::Bool(flag) => *flag,
            other => {
                return Err(DataValidationError::invalid_type(
                    "available",
                    "boolean",
                    json_type_name(other),
                ))
            }
        };

        let category = match field("category")? {
            Value::String(name) => name.parse::<Category>()?,
            other => {
                return Err(DataValidationError::invalid_type(
                    "category",
                    "string",
                    json_type_name(other),
                ))
            }
        };

        let candidate = Product {
            id: self.id,
            name,
            description,
            price,
            available,
            category,
        };
        candidate.validate()?;

        *self = candidate;
        Ok(self)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "<Product {} id=[{}]>", self.name, id),
            None => write!(f, "<Product {} id=[None]>", self.name),
        }
    }
}

/// Names the JSON type of a value, for error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
