// src/db.rs

//! SQLite pool construction and idempotent schema migrations.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::errors::Result;
use crate::models::product::NewProduct;

/// Build the connection pool. WAL mode with a busy timeout keeps
/// concurrent request handling from tripping over SQLITE_BUSY.
pub async fn init_pool(database_url: &str) -> Result<SqlitePool> {
  let options = SqliteConnectOptions::from_str(database_url)?
    .create_if_missing(true)
    .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
    .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
    .foreign_keys(true)
    .busy_timeout(Duration::from_secs(30));

  let pool = SqlitePoolOptions::new()
    .max_connections(5)
    .acquire_timeout(Duration::from_secs(5))
    .connect_with(options)
    .await?;

  run_migrations(&pool).await?;

  tracing::info!(url = %database_url, "Database pool initialized.");

  Ok(pool)
}

/// CREATE TABLE IF NOT EXISTS, safe to run on every startup.
///
/// Timestamps are written from the application (RFC 3339 text) rather than
/// CURRENT_TIMESTAMP so they round-trip through chrono with sub-second
/// precision; list ordering depends on that.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
  sqlx::query(
    "CREATE TABLE IF NOT EXISTS products (
        id          INTEGER  PRIMARY KEY AUTOINCREMENT,
        name        TEXT     NOT NULL,
        description TEXT,
        price       REAL     NOT NULL CHECK(price >= 0),
        quantity    INTEGER  NOT NULL DEFAULT 0 CHECK(quantity >= 0),
        category    TEXT,
        created_at  DATETIME NOT NULL,
        updated_at  DATETIME NOT NULL
    )",
  )
  .execute(pool)
  .await?;

  sqlx::query("CREATE INDEX IF NOT EXISTS idx_products_name ON products(name)")
    .execute(pool)
    .await?;

  sqlx::query("CREATE INDEX IF NOT EXISTS idx_products_category ON products(category)")
    .execute(pool)
    .await?;

  sqlx::query("CREATE INDEX IF NOT EXISTS idx_products_created_at ON products(created_at)")
    .execute(pool)
    .await?;

  Ok(())
}

/// Insert a small starter catalog, but only into an empty table.
pub async fn seed_products(pool: &SqlitePool) -> Result<()> {
  let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
    .fetch_one(pool)
    .await?;

  if count > 0 {
    tracing::info!(existing = count, "Skipping seed; products table is not empty.");
    return Ok(());
  }

  let starter: Vec<NewProduct> = vec![
    NewProduct {
      name: "Claw Hammer".to_string(),
      description: Some("16oz curved claw hammer with fiberglass handle".to_string()),
      price: 12.50,
      quantity: 24,
      category: Some("Tools".to_string()),
    },
    NewProduct {
      name: "Wood Screws (100 pack)".to_string(),
      description: Some("Assorted #8 wood screws".to_string()),
      price: 6.75,
      quantity: 8,
      category: Some("Hardware".to_string()),
    },
    NewProduct {
      name: "Utility Knife".to_string(),
      description: None,
      price: 4.99,
      quantity: 40,
      category: Some("Tools".to_string()),
    },
  ];

  for product in starter {
    crate::services::product_store::create(pool, &product).await?;
  }

  tracing::info!("Seeded starter catalog.");
  Ok(())
}
