//! # Seed Data Generator
//!
//! Populates the catalog database with sample products for development.
//!
//! ## Usage
//! ```bash
//! # Generate 100 products (default) into $DATABASE_URI
//! cargo run -p catalog-db --bin seed
//!
//! # Generate custom amount into a specific database, clearing it first
//! cargo run -p catalog-db --bin seed -- --count 500 --db sqlite://./dev.db --reset
//!
//! # Fail after 5 seconds if no connection can be acquired
//! cargo run -p catalog-db --bin seed -- --timeout 5
//! ```

use std::env;
use std::time::{Duration, Instant};

use catalog_core::factory::ProductFactory;
use catalog_core::Category;
use catalog_db::migrations::migration_status;
use catalog_db::{Database, DbConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let args: Vec<String> = env::args().collect();

    let mut count: usize = 100;
    let mut config = DbConfig::from_env();
    let mut reset = false;
    let mut timeout: Option<Duration> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse()?;
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    config = DbConfig::new(args[i + 1].clone());
                    i += 1;
                }
            }
            "--timeout" | "-t" => {
                if i + 1 < args.len() {
                    timeout = Some(Duration::from_secs(args[i + 1].parse()?));
                    i += 1;
                }
            }
            "--reset" | "-r" => reset = true,
            "--help" | "-h" => {
                println!("Product Catalog Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 100)");
                println!("  -d, --db <URL>     Database URL (default: $DATABASE_URI or sqlite://catalog.db)");
                println!("  -t, --timeout <S>  Connection acquire timeout in seconds (default: 30)");
                println!("  -r, --reset        Delete existing products first");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            other => warn!(argument = %other, "Ignoring unknown argument"),
        }
        i += 1;
    }

    if let Some(timeout) = timeout {
        config = config.connect_timeout(timeout);
    }

    info!(url = %config.database_url, count, "Seeding product catalog");

    let db = Database::new(config).await?;

    let (embedded, applied) = migration_status(db.pool()).await?;
    info!(embedded, applied, "Migration status");
    let products = db.products();

    if reset {
        let removed = products.delete_all().await?;
        info!(removed, "Cleared existing products");
    }

    let existing = products.count().await?;
    if existing > 0 {
        warn!(existing, "Database already has products, skipping seed (use --reset)");
        return Ok(());
    }

    let start = Instant::now();
    let mut generated = 0usize;

    for mut product in ProductFactory::build_batch(0, count) {
        if let Err(e) = products.create(&mut product).await {
            warn!(product = %product, error = %e, "Failed to insert product");
            continue;
        }

        generated += 1;
        if generated % 50 == 0 {
            info!(generated, "Progress");
        }
    }

    info!(generated, elapsed = ?start.elapsed(), "Products generated");

    for category in Category::ALL {
        let in_category = products.find_by_category(category).await?.len();
        info!(category = %category, products = in_category, "Category summary");
    }

    db.close().await;
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,catalog=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
