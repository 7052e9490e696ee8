//! # Price Module
//!
//! Parsing and normalization of product prices.
//!
//! ## Two Representations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  IN MEMORY                          IN STORAGE                          │
//! │                                                                         │
//! │  Product.price: Decimal   ──────►   products.price_cents: INTEGER       │
//! │  12.5, 12.50, 12.499 …   to_cents   1250                                │
//! │                                                                         │
//! │  Decimal::new(1250, 2)   ◄──────    1250                                │
//! │  "12.50"                from_cents                                      │
//! │                                                                         │
//! │  The column behaves like NUMERIC(10,2): two fractional digits,          │
//! │  rounded half away from zero, |price| < 100,000,000.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every comparison against stored prices happens in cents, so `12.5`,
//! `"12.50"` and `12.50_f64` all select the same rows. Writes round to the
//! nearest cent; searches don't, so `12.499` selects nothing.
//!
//! ## Usage
//! ```rust
//! use catalog_core::price::{from_cents, to_cents, PriceQuery};
//! use rust_decimal::Decimal;
//!
//! assert_eq!(to_cents(Decimal::new(125, 1)).unwrap(), 1250);
//! assert_eq!(from_cents(1250).to_string(), "12.50");
//!
//! let by_text = PriceQuery::from(" \"12.50\" ");
//! assert_eq!(by_text.match_cents().unwrap(), Some(1250));
//! assert_eq!(PriceQuery::from("12.499").match_cents().unwrap(), None);
//! ```

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::{DataValidationError, ValidationResult};

/// Number of fractional digits kept in storage.
pub const PRICE_SCALE: u32 = 2;

/// Largest storable price in cents (99,999,999.99).
pub const MAX_PRICE_CENTS: i64 = 9_999_999_999;

/// Largest storable price.
pub fn max_price() -> Decimal {
    Decimal::new(MAX_PRICE_CENTS, PRICE_SCALE)
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses a numeric string into a price.
///
/// Surrounding spaces and double quotes are stripped, so a value copied out
/// of a query string (`"12.50"`) parses the same as `12.50`. Scientific
/// notation (`1.25e1`) is accepted.
pub fn parse_price(text: &str) -> ValidationResult<Decimal> {
    let cleaned = text.trim_matches(|c: char| c == ' ' || c == '"');

    if cleaned.is_empty() {
        return Err(DataValidationError::invalid_price("price is empty"));
    }

    Decimal::from_str(cleaned)
        .or_else(|_| Decimal::from_scientific(cleaned))
        .map_err(|_| DataValidationError::invalid_price(format!("'{}' is not numeric", text)))
}

/// Reads a price out of a JSON value.
///
/// Numbers and numeric strings are accepted; `null` and every other JSON
/// type are rejected.
pub fn price_from_json(value: &Value) -> ValidationResult<Decimal> {
    match value {
        Value::Number(number) => parse_price(&number.to_string()),
        Value::String(text) => parse_price(text),
        Value::Null => Err(DataValidationError::invalid_price("price is null")),
        other => Err(DataValidationError::invalid_price(format!(
            "expected a number or numeric string, found {}",
            crate::product::json_type_name(other)
        ))),
    }
}

// =============================================================================
// Cents Conversion
// =============================================================================

/// Normalizes a price to integer cents.
///
/// ## Rules
/// - Rounded to two fractional digits, half away from zero
/// - Must stay within ±[`MAX_PRICE_CENTS`]
///
/// ## Example
/// ```rust
/// use catalog_core::price::to_cents;
/// use rust_decimal::Decimal;
///
/// assert_eq!(to_cents(Decimal::new(12345, 3)).unwrap(), 1235); // 12.345
/// assert!(to_cents(Decimal::from(1_000_000_000)).is_err());
/// ```
pub fn to_cents(price: Decimal) -> ValidationResult<i64> {
    let rounded = price.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);

    if rounded.abs() > max_price() {
        return Err(DataValidationError::invalid_price(format!(
            "{} exceeds the maximum of {}",
            price,
            max_price()
        )));
    }

    (rounded * Decimal::ONE_HUNDRED)
        .to_i64()
        .ok_or_else(|| DataValidationError::invalid_price(format!("{} cannot be stored", price)))
}

/// Rebuilds a price from stored cents, always with two fractional digits.
#[inline]
pub fn from_cents(cents: i64) -> Decimal {
    Decimal::new(cents, PRICE_SCALE)
}

// =============================================================================
// Price Query
// =============================================================================

/// A price as handed to `find_by_price`.
///
/// Callers pass whatever they have: a `Decimal` from a product, a float from
/// a calculation, or the raw text of a query parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceQuery {
    /// An exact decimal amount.
    Amount(Decimal),
    /// A binary float; converted to the nearest short decimal.
    Float(f64),
    /// Numeric text, possibly quoted.
    Text(String),
}

impl PriceQuery {
    /// Resolves the query to a decimal amount.
    pub fn to_decimal(&self) -> ValidationResult<Decimal> {
        match self {
            PriceQuery::Amount(amount) => Ok(*amount),
            PriceQuery::Float(value) => Decimal::from_f64(*value).ok_or_else(|| {
                DataValidationError::invalid_price(format!("{} is not a finite price", value))
            }),
            PriceQuery::Text(text) => parse_price(text),
        }
    }

    /// Resolves the query to the stored cents it can match.
    ///
    /// ## Returns
    /// - `Ok(Some(cents))` when the amount is a whole number of cents in range
    /// - `Ok(None)` when no stored price can equal it (`12.499`, `1e9`)
    /// - `Err` when the text is not numeric or the float is not finite
    ///
    /// Decimals and text are compared exactly. Floats are rounded to the
    /// nearest cent first: `Decimal::from_f64` keeps the binary noise of the
    /// float, which would otherwise miss prices the caller meant.
    pub fn match_cents(&self) -> ValidationResult<Option<i64>> {
        let amount = match self {
            PriceQuery::Float(_) => self
                .to_decimal()?
                .round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero),
            _ => self.to_decimal()?,
        };

        Ok(exact_cents(amount))
    }
}

/// Cents for an amount that is storable without rounding.
fn exact_cents(amount: Decimal) -> Option<i64> {
    if amount.abs() > max_price() {
        return None;
    }

    let cents = amount * Decimal::ONE_HUNDRED;
    if !cents.fract().is_zero() {
        return None;
    }

    cents.to_i64()
}

impl fmt::Display for PriceQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceQuery::Amount(amount) => write!(f, "{}", amount),
            PriceQuery::Float(value) => write!(f, "{}", value),
            PriceQuery::Text(text) => write!(f, "{}", text),
        }
    }
}

impl From<Decimal> for PriceQuery {
    fn from(amount: Decimal) -> Self {
        PriceQuery::Amount(amount)
    }
}

impl From<i64> for PriceQuery {
    fn from(amount: i64) -> Self {
        PriceQuery::Amount(Decimal::from(amount))
    }
}

impl From<i32> for PriceQuery {
    fn from(amount: i32) -> Self {
        PriceQuery::Amount(Decimal::from(amount))
    }
}

impl From<f64> for PriceQuery {
    fn from(value: f64) -> Self {
        PriceQuery::Float(value)
    }
}

impl From<&str> for PriceQuery {
    fn from(text: &str) -> Self {
        PriceQuery::Text(text.to_string())
    }
}

impl From<String> for PriceQuery {
    fn from(text: String) -> Self {
        PriceQuery::Text(text)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
