//! # Database Migrations
//!
//! The embedded schema for the product catalog.
//!
//! ## How Migrations Work
//! ```text
//! Database::new (run_migrations = true)
//!      │
//!      ▼
//! _sqlx_migrations exists?  ── no ──► create it
//!      │
//!      ▼
//! 0001_create_products.sql applied? ── no ──► apply + record checksum
//!      │
//!      ▼
//! ready
//! ```
//!
//! The catalog has a single table, so there is a single migration. Never edit
//! an applied file; add a new one instead.

use sqlx::SqlitePool;
use tracing::info;

use crate::error::DbResult;

/// Migrations from `crates/catalog-db/migrations`, embedded at compile time.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Runs all pending database migrations. Idempotent.
pub async fn run_migrations(pool: &SqlitePool) -> DbResult<()> {
    info!("Checking for pending migrations");

    MIGRATOR.run(pool).await?;

    info!("All migrations applied successfully");
    Ok(())
}

/// Returns `(embedded, applied)` migration counts, for diagnostics.
pub async fn migration_status(pool: &SqlitePool) -> DbResult<(usize, usize)> {
    let total = MIGRATOR.migrations.len();

    let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
        .fetch_one(pool)
        .await?;

    Ok((total, applied as usize))
}
