//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    ProductRepository                                    │
//! │                                                                         │
//! │  WRITES (autocommit, one statement each)                               │
//! │  ├── create(&mut product)   INSERT, assigns product.id                 │
//! │  ├── update(&product)       UPDATE by id, id required                  │
//! │  ├── delete(&product)       DELETE by id, id required                  │
//! │  └── delete_all()           DELETE every row                           │
//! │                                                                         │
//! │  READS                                                                  │
//! │  ├── all() / count()                                                   │
//! │  ├── find(id)                                                          │
//! │  └── find_by_name / _availability / _price / _category                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Price Storage
//! Prices are written and compared as integer cents (see
//! [`catalog_core::price`]), so `find_by_price(12.5)`, `find_by_price("12.50")`
//! and `find_by_price(Decimal::new(1250, 2))` select the same rows.

use catalog_core::price::{from_cents, to_cents};
use catalog_core::{Category, DataValidationError, PriceQuery, Product};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};

/// Column list shared by every read.
const SELECT_PRODUCTS: &str =
    "SELECT id, name, description, price_cents, available, category FROM products";

/// One `products` row as stored.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    description: Option<String>,
    price_cents: i64,
    available: bool,
    category: Category,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: Some(row.id),
            name: row.name,
            description: row.description,
            price: from_cents(row.price_cents),
            available: row.available,
            category: row.category,
        }
    }
}

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
///
/// let mut hat = Product::new("Fedora", "A red hat", Decimal::new(1250, 2), true, Category::Cloths);
/// repo.create(&mut hat).await?;
///
/// let found = repo.find(hat.id.unwrap()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Inserts a new product and assigns its generated id.
    ///
    /// Any id already on the record is ignored: a new row is always created.
    /// The in-memory price is normalized to the stored two-digit value.
    ///
    /// ## Returns
    /// * `Ok(id)` - The generated id, also written to `product.id`
    /// * `Err(DbError::Validation)` - A field rule failed
    pub async fn create(&self, product: &mut Product) -> DbResult<i64> {
        debug!(name = %product.name, "Creating product");

        product.validate()?;
        let price_cents = to_cents(product.price)?;

        let result = sqlx::query(
            r#"
            INSERT INTO products (name, description, price_cents, available, category)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(product.name.as_str())
        .bind(product.description.as_deref())
        .bind(price_cents)
        .bind(product.available)
        .bind(product.category)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        product.id = Some(id);
        product.price = from_cents(price_cents);

        debug!(id, "Product created");
        Ok(id)
    }

    /// Persists the current field values of an existing product.
    ///
    /// ## Returns
    /// * `Ok(())` - Row rewritten
    /// * `Err(DbError::Validation)` - `product.id` is `None`, or a field rule failed
    /// * `Err(DbError::NotFound)` - No row has this id
    pub async fn update(&self, product: &Product) -> DbResult<()> {
        let id = product
            .id
            .ok_or_else(|| DataValidationError::missing_id("Update"))?;

        debug!(id, name = %product.name, "Updating product");

        product.validate()?;
        let price_cents = to_cents(product.price)?;

        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = ?2,
                description = ?3,
                price_cents = ?4,
                available = ?5,
                category = ?6
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(product.name.as_str())
        .bind(product.description.as_deref())
        .bind(price_cents)
        .bind(product.available)
        .bind(product.category)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Removes the product's row.
    ///
    /// ## Returns
    /// * `Ok(())` - Exactly one row removed
    /// * `Err(DbError::Validation)` - `product.id` is `None`
    /// * `Err(DbError::NotFound)` - No row has this id
    pub async fn delete(&self, product: &Product) -> DbResult<()> {
        let id = product
            .id
            .ok_or_else(|| DataValidationError::missing_id("Delete"))?;

        debug!(id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Removes every product. Returns the number of rows removed.
    pub async fn delete_all(&self) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM products")
            .execute(&self.pool)
            .await?;

        debug!(removed = result.rows_affected(), "Deleted all products");
        Ok(result.rows_affected())
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Returns every product, in id order.
    pub async fn all(&self) -> DbResult<Vec<Product>> {
        debug!("Listing all products");

        let rows = sqlx::query_as::<_, ProductRow>(&format!("{SELECT_PRODUCTS} ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Finds a product by id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn find(&self, id: i64) -> DbResult<Option<Product>> {
        debug!(id, "Finding product");

        let row = sqlx::query_as::<_, ProductRow>(&format!("{SELECT_PRODUCTS} WHERE id = ?1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Product::from))
    }

    /// Returns all products whose name matches exactly.
    pub async fn find_by_name(&self, name: &str) -> DbResult<Vec<Product>> {
        debug!(name = %name, "Finding products by name");

        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "{SELECT_PRODUCTS} WHERE name = ?1 ORDER BY id"
        ))
        .bind(name)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Returns all products with the given availability.
    pub async fn find_by_availability(&self, available: bool) -> DbResult<Vec<Product>> {
        debug!(available, "Finding products by availability");

        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "{SELECT_PRODUCTS} WHERE available = ?1 ORDER BY id"
        ))
        .bind(available)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Returns all products with the given price.
    ///
    /// ## Arguments
    /// * `price` - A `Decimal`, integer, float, or numeric string
    ///   (surrounding spaces and double quotes are ignored)
    ///
    /// The value is not rounded: `12.499` or anything past the storable range
    /// matches no product. Floats are the exception and are rounded to the
    /// nearest cent, see [`PriceQuery::match_cents`].
    ///
    /// ## Example
    /// ```rust,ignore
    /// let a = repo.find_by_price(Decimal::new(1250, 2)).await?;
    /// let b = repo.find_by_price("12.50").await?;
    /// assert_eq!(a, b);
    /// ```
    pub async fn find_by_price(&self, price: impl Into<PriceQuery>) -> DbResult<Vec<Product>> {
        let query = price.into();
        let Some(price_cents) = query.match_cents()? else {
            debug!(price = %query, "Price is not a storable amount, nothing to find");
            return Ok(Vec::new());
        };

        debug!(price = %query, price_cents, "Finding products by price");

        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "{SELECT_PRODUCTS} WHERE price_cents = ?1 ORDER BY id"
        ))
        .bind(price_cents)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Returns all products in the given category.
    pub async fn find_by_category(&self, category: Category) -> DbResult<Vec<Product>> {
        debug!(category = %category, "Finding products by category");

        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "{SELECT_PRODUCTS} WHERE category = ?1 ORDER BY id"
        ))
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Counts persisted products.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use catalog_core::factory::ProductFactory;
    use catalog_core::Decimal;

    async fn repo() -> ProductRepository {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.products()
    }

    /// Creates `count` factory products and returns them with ids assigned.
    async fn create_batch(repo: &ProductRepository, count: usize) -> Vec<Product> {
        let mut products = ProductFactory::build_batch(0, count);
        for product in products.iter_mut() {
            repo.create(product).await.unwrap();
        }
        products
    }

    fn assert_same_fields(found: &Product, expected: &Product) {
        assert_eq!(found.id, expected.id);
        assert_eq!(found.name, expected.name);
        assert_eq!(found.description, expected.description);
        assert_eq!(found.price, expected.price);
        assert_eq!(found.available, expected.available);
        assert_eq!(found.category, expected.category);
    }

    #[tokio::test]
    async fn test_add_a_product() {
        let repo = repo().await;
        assert!(repo.all().await.unwrap().is_empty());

        let mut product = ProductFactory::build(1);
        let id = repo.create(&mut product).await.unwrap();
        assert_eq!(product.id, Some(id));

        let products = repo.all().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_same_fields(&products[0], &product);
    }

    #[tokio::test]
    async fn test_create_fedora() {
        let repo = repo().await;
        let mut product = Product::new(
            "Fedora",
            "A red hat",
            Decimal::new(125, 1),
            true,
            Category::Cloths,
        );
        assert_eq!(product.to_string(), "<Product Fedora id=[None]>");

        let id = repo.create(&mut product).await.unwrap();
        assert_eq!(product.to_string(), format!("<Product Fedora id=[{}]>", id));

        let found = repo.find(id).await.unwrap().unwrap();
        assert_eq!(found.price.to_string(), "12.50");
        assert_eq!(found, product);
    }

    #[tokio::test]
    async fn test_create_ignores_existing_id() {
        let repo = repo().await;
        let mut first = ProductFactory::build(1);
        repo.create(&mut first).await.unwrap();

        let mut second = ProductFactory::build(2);
        second.id = first.id;
        repo.create(&mut second).await.unwrap();

        assert_ne!(second.id, first.id);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_product() {
        let repo = repo().await;
        let mut product = ProductFactory::build(1);
        product.name = "x".repeat(101);

        let err = repo.create(&mut product).await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(product.id, None);
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_normalizes_price() {
        let repo = repo().await;
        let mut product = ProductFactory::build(1);
        product.price = Decimal::new(12345, 3);

        let id = repo.create(&mut product).await.unwrap();
        assert_eq!(product.price, Decimal::new(1235, 2));

        let found = repo.find(id).await.unwrap().unwrap();
        assert_eq!(found.price, product.price);
    }

    #[tokio::test]
    async fn test_create_keeps_missing_description() {
        let repo = repo().await;
        let mut product = ProductFactory::build(1);
        product.description = None;

        let id = repo.create(&mut product).await.unwrap();
        let found = repo.find(id).await.unwrap().unwrap();
        assert_eq!(found.description, None);
    }

    #[tokio::test]
    async fn test_read_a_product() {
        let repo = repo().await;
        let mut product = ProductFactory::build(3);
        let id = repo.create(&mut product).await.unwrap();

        let found = repo.find(id).await.unwrap().unwrap();
        assert_same_fields(&found, &product);
    }

    #[tokio::test]
    async fn test_find_missing_product() {
        let repo = repo().await;
        assert!(repo.find(404).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_a_product() {
        let repo = repo().await;
        let mut product = ProductFactory::build(4);
        let id = repo.create(&mut product).await.unwrap();

        product.description = Some("Paul Atreides".to_string());
        product.available = !product.available;
        product.category = Category::Tools;
        repo.update(&product).await.unwrap();

        let found = repo.find(id).await.unwrap().unwrap();
        assert_same_fields(&found, &product);
        assert_eq!(found.description.as_deref(), Some("Paul Atreides"));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_a_product_without_id() {
        let repo = repo().await;
        let mut product = ProductFactory::build(5);
        repo.create(&mut product).await.unwrap();

        product.id = None;
        product.description = Some("Paul Atreides".to_string());
        let err = repo.update(&product).await.unwrap_err();

        assert!(matches!(
            err,
            DbError::Validation(DataValidationError::MissingId { .. })
        ));
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let repo = repo().await;
        let mut product = ProductFactory::build(5);
        product.id = Some(999);

        let err = repo.update(&product).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_a_product() {
        let repo = repo().await;
        let products = create_batch(&repo, 3).await;
        assert_eq!(repo.all().await.unwrap().len(), 3);

        repo.delete(&products[1]).await.unwrap();

        let remaining = repo.all().await.unwrap();
        assert_eq!(remaining.len(), 2);
        assert!(remaining.iter().all(|p| p.id != products[1].id));
        assert!(repo.find(products[1].id.unwrap()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_without_id_or_twice() {
        let repo = repo().await;
        let mut product = ProductFactory::build(6);

        assert!(repo.delete(&product).await.unwrap_err().is_validation());

        repo.create(&mut product).await.unwrap();
        repo.delete(&product).await.unwrap();
        assert!(matches!(
            repo.delete(&product).await.unwrap_err(),
            DbError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_delete_all() {
        let repo = repo().await;
        create_batch(&repo, 4).await;

        assert_eq!(repo.delete_all().await.unwrap(), 4);
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_list_all_products() {
        let repo = repo().await;
        assert_eq!(repo.all().await.unwrap().len(), 0);

        let created = create_batch(&repo, 5).await;

        let all = repo.all().await.unwrap();
        assert_eq!(all.len(), 5);
        assert_eq!(all, created);
    }

    #[tokio::test]
    async fn test_find_by_name() {
        let repo = repo().await;
        let products = create_batch(&repo, 20).await;
        let name = products[0].name.clone();
        let count = products.iter().filter(|p| p.name == name).count();

        let found = repo.find_by_name(&name).await.unwrap();
        assert_eq!(found.len(), count);
        assert!(found.iter().all(|p| p.name == name));
        assert!(repo.find_by_name("No Such Thing").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_availability() {
        let repo = repo().await;
        let products = create_batch(&repo, 10).await;
        let available = products[0].available;
        let count = products.iter().filter(|p| p.available == available).count();

        let found = repo.find_by_availability(available).await.unwrap();
        assert_eq!(found.len(), count);
        assert!(found.iter().all(|p| p.available == available));

        let others = repo.find_by_availability(!available).await.unwrap();
        assert_eq!(found.len() + others.len(), products.len());
    }

    #[tokio::test]
    async fn test_find_by_price() {
        let repo = repo().await;
        let mut products = create_batch(&repo, 5).await;
        let price = products[0].price;

        let mut twin = ProductFactory::build(100);
        twin.price = price;
        repo.create(&mut twin).await.unwrap();
        products.push(twin);

        let count = products.iter().filter(|p| p.price == price).count();
        let found = repo.find_by_price(price).await.unwrap();
        assert!(count >= 2);
        assert_eq!(found.len(), count);
        assert!(found.iter().all(|p| p.price == price));
    }

    #[tokio::test]
    async fn test_find_by_price_as_string() {
        let repo = repo().await;
        let products = create_batch(&repo, 5).await;
        let price = products[0].price;

        let by_number = repo.find_by_price(price).await.unwrap();
        let by_text = repo.find_by_price(price.to_string()).await.unwrap();
        let by_quoted = repo
            .find_by_price(format!(" \"{}\" ", price))
            .await
            .unwrap();

        assert!(!by_number.is_empty());
        assert_eq!(by_text, by_number);
        assert_eq!(by_quoted, by_number);
    }

    #[tokio::test]
    async fn test_find_by_price_does_not_round_the_query() {
        let repo = repo().await;
        let mut product = ProductFactory::build(1);
        product.price = Decimal::new(1250, 2);
        repo.create(&mut product).await.unwrap();

        assert!(repo.find_by_price("12.499").await.unwrap().is_empty());
        assert!(repo.find_by_price(Decimal::new(12495, 3)).await.unwrap().is_empty());
        assert_eq!(repo.find_by_price("12.500").await.unwrap(), vec![product]);
    }

    #[tokio::test]
    async fn test_find_by_price_out_of_range_is_empty() {
        let repo = repo().await;
        create_batch(&repo, 3).await;

        assert!(repo.find_by_price("1e9").await.unwrap().is_empty());
        assert!(repo.find_by_price(Decimal::MAX).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_price_as_float() {
        let repo = repo().await;
        let mut product = ProductFactory::build(1);
        product.price = Decimal::new(1250, 2);
        repo.create(&mut product).await.unwrap();

        let found = repo.find_by_price(12.5_f64).await.unwrap();
        assert_eq!(found, vec![product]);
    }

    #[tokio::test]
    async fn test_find_by_price_rejects_text() {
        let repo = repo().await;
        let err = repo.find_by_price("cheap").await.unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_find_by_category() {
        let repo = repo().await;
        let products = create_batch(&repo, 12).await;
        let category = products[0].category;
        let count = products.iter().filter(|p| p.category == category).count();

        let found = repo.find_by_category(category).await.unwrap();
        assert_eq!(found.len(), count);
        assert!(found.iter().all(|p| p.category == category));
    }

    #[tokio::test]
    async fn test_found_product_serializes_round_trip() {
        let repo = repo().await;
        let mut product = ProductFactory::build(9);
        let id = repo.create(&mut product).await.unwrap();

        let found = repo.find(id).await.unwrap().unwrap();
        let data = found.serialize();
        assert_eq!(data["id"], serde_json::json!(id));

        let mut restored = Product {
            id: Some(id),
            ..Product::default()
        };
        restored.deserialize(&data).unwrap();
        assert_eq!(restored, found);
    }
}
