//! # Sample Products
//!
//! Deterministic product generator for tests and database seeding.
//!
//! The same seed always yields the same product, so a failing test can be
//! replayed exactly. Prices land between 0.50 and 2000.00 with two
//! fractional digits; names repeat across seeds so name lookups return more
//! than one row on larger batches.

use crate::price::from_cents;
use crate::product::{Category, Product};

/// Name pool with a matching description for each entry.
const NAMES: &[(&str, &str)] = &[
    ("Hat", "A felt hat with a wide brim"),
    ("Pants", "Straight-leg cotton pants"),
    ("Shirt", "Long-sleeve button-down shirt"),
    ("Apple", "Crisp red apple"),
    ("Banana", "Ripe yellow banana"),
    ("Pots", "Set of stainless steel pots"),
    ("Towels", "Pack of bath towels"),
    ("Ford", "Ford replacement floor mats"),
    ("Chevy", "Chevy wiper blade kit"),
    ("Hammer", "16oz claw hammer"),
    ("Wrench", "Adjustable crescent wrench"),
];

/// Lowest generated price in cents.
const MIN_PRICE_CENTS: i64 = 50;

/// Width of the generated price band in cents.
const PRICE_SPAN_CENTS: i64 = 200_000 - MIN_PRICE_CENTS;

/// Builds unsaved sample products.
///
/// ## Example
/// ```rust
/// use catalog_core::factory::ProductFactory;
///
/// let batch = ProductFactory::build_batch(0, 5);
/// assert_eq!(batch.len(), 5);
/// assert!(batch.iter().all(|p| p.id.is_none()));
/// assert_eq!(ProductFactory::build(3), ProductFactory::build(3));
/// ```
pub struct ProductFactory;

impl ProductFactory {
    /// Builds the product for one seed.
    pub fn build(seed: usize) -> Product {
        let mixed = mix(seed);

        let (name, description) = NAMES[(mixed % NAMES.len() as u64) as usize];
        let cents = MIN_PRICE_CENTS + ((mixed >> 8) % PRICE_SPAN_CENTS as u64) as i64;
        let available = (mixed >> 24) & 1 == 0;
        let category = Category::ALL[((mixed >> 32) % Category::ALL.len() as u64) as usize];

        Product {
            id: None,
            name: name.to_string(),
            description: Some(description.to_string()),
            price: from_cents(cents),
            available,
            category,
        }
    }

    /// Builds `count` products from consecutive seeds starting at `start`.
    pub fn build_batch(start: usize, count: usize) -> Vec<Product> {
        (start..start + count).map(ProductFactory::build).collect()
    }
}

/// SplitMix64 finalizer: spreads consecutive seeds over the whole range.
fn mix(seed: usize) -> u64 {
    let mut z = (seed as u64).wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_build_is_deterministic() {
        assert_eq!(ProductFactory::build(11), ProductFactory::build(11));
    }

    #[test]
    fn test_built_products_are_valid() {
        for product in ProductFactory::build_batch(0, 200) {
            assert!(product.validate().is_ok(), "{} failed validation", product);
            assert!(product.id.is_none());
            assert!(product.price >= Decimal::new(50, 2));
            assert!(product.price <= Decimal::new(200_000, 2));
            assert_eq!(product.price.scale(), 2);
        }
    }

    #[test]
    fn test_batch_covers_every_category() {
        let batch = ProductFactory::build_batch(0, 200);
        for category in Category::ALL {
            assert!(batch.iter().any(|p| p.category == category), "missing {}", category);
        }
        assert!(batch.iter().any(|p| p.available));
        assert!(batch.iter().any(|p| !p.available));
    }
}
