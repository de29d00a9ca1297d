// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use std::sync::Arc;

use once_cell::sync::Lazy;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use inventory_app::config::AppConfig;
use inventory_app::db;
use inventory_app::models::product::NewProduct;
use inventory_app::state::AppState;

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  let _ = tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_test_writer()
    .try_init();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

/// A fresh in-memory database per test. The pool is capped at one
/// connection so every query sees the same in-memory instance.
pub async fn memory_pool() -> SqlitePool {
  let pool = SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .expect("in-memory pool should connect");
  db::run_migrations(&pool).await.expect("migrations should run");
  pool
}

pub fn test_config() -> AppConfig {
  AppConfig {
    server_host: "127.0.0.1".to_string(),
    server_port: 0,
    database_url: "sqlite::memory:".to_string(),
    seed_db: false,
  }
}

pub async fn test_state() -> AppState {
  AppState {
    db_pool: memory_pool().await,
    config: Arc::new(test_config()),
  }
}

pub fn draft(name: &str, price: f64, quantity: i64, category: Option<&str>) -> NewProduct {
  NewProduct {
    name: name.to_string(),
    description: None,
    price,
    quantity,
    category: category.map(str::to_string),
  }
}
