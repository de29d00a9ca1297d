// src/services/product_store.rs

//! All SQL for the product resource lives here; HTTP handlers stay thin.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{debug, instrument};

use crate::errors::{AppError, Result};
use crate::models::product::{NewProduct, Product};

/// Sentinel the client sends when no category filter is selected.
pub const ALL_CATEGORIES: &str = "All Categories";

const PRODUCT_COLUMNS: &str = "id, name, description, price, quantity, category, created_at, updated_at";

/// List filter as it arrives from the query string. Empty strings and the
/// sentinel category are treated as "no filter".
#[derive(Debug, Default, Clone)]
pub struct ProductFilter {
  pub search: Option<String>,
  pub category: Option<String>,
}

impl ProductFilter {
  fn search_needle(&self) -> Option<String> {
    self
      .search
      .as_deref()
      .filter(|s| !s.is_empty())
      .map(|s| format!("%{}%", s.to_lowercase()))
  }

  fn category_filter(&self) -> Option<&str> {
    self
      .category
      .as_deref()
      .filter(|c| !c.is_empty() && *c != ALL_CATEGORIES)
  }
}

/// Name search is a case-insensitive substring match; category is an exact
/// match when one is selected. Newest products come first, with `id` as a
/// tiebreak for rows created within the same instant.
#[instrument(name = "product_store::list", skip(pool))]
pub async fn list(pool: &SqlitePool, filter: &ProductFilter) -> Result<Vec<Product>> {
  let needle = filter.search_needle();
  let category = filter.category_filter();

  let mut sql = format!("SELECT {} FROM products WHERE 1=1", PRODUCT_COLUMNS);
  if needle.is_some() {
    sql.push_str(" AND LOWER(name) LIKE ?");
  }
  if category.is_some() {
    sql.push_str(" AND category = ?");
  }
  sql.push_str(" ORDER BY created_at DESC, id DESC");

  let mut query = sqlx::query_as::<_, Product>(&sql);
  if let Some(needle) = &needle {
    query = query.bind(needle);
  }
  if let Some(category) = category {
    query = query.bind(category);
  }

  let products = query.fetch_all(pool).await?;
  debug!(count = products.len(), "Fetched products.");
  Ok(products)
}

/// Distinct non-null categories. There is no category table; the set is a
/// projection over products, so it shrinks on its own when the last product
/// of a category is deleted.
#[instrument(name = "product_store::list_categories", skip(pool))]
pub async fn list_categories(pool: &SqlitePool) -> Result<Vec<String>> {
  let categories =
    sqlx::query_scalar("SELECT DISTINCT category FROM products WHERE category IS NOT NULL ORDER BY category ASC")
      .fetch_all(pool)
      .await?;
  Ok(categories)
}

#[instrument(name = "product_store::get", skip(pool))]
pub async fn get(pool: &SqlitePool, id: i64) -> Result<Product> {
  let sql = format!("SELECT {} FROM products WHERE id = ?", PRODUCT_COLUMNS);
  sqlx::query_as::<_, Product>(&sql)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Product with ID {} not found.", id)))
}

/// Persist a validated product. Timestamps are assigned here so the store
/// is the single authority over `created_at`/`updated_at`.
#[instrument(name = "product_store::create", skip(pool, draft), fields(name = %draft.name))]
pub async fn create(pool: &SqlitePool, draft: &NewProduct) -> Result<Product> {
  let now = Utc::now();

  let result = sqlx::query(
    "INSERT INTO products (name, description, price, quantity, category, created_at, updated_at)
     VALUES (?, ?, ?, ?, ?, ?, ?)",
  )
  .bind(&draft.name)
  .bind(&draft.description)
  .bind(draft.price)
  .bind(draft.quantity)
  .bind(&draft.category)
  .bind(now)
  .bind(now)
  .execute(pool)
  .await?;

  let id = result.last_insert_rowid();
  debug!(id, "Created product.");
  get(pool, id).await
}

/// Full overwrite of the editable fields. The client always submits the
/// complete form, so there is no partial-update path.
#[instrument(name = "product_store::update", skip(pool, draft), fields(name = %draft.name))]
pub async fn update(pool: &SqlitePool, id: i64, draft: &NewProduct) -> Result<Product> {
  let result = sqlx::query(
    "UPDATE products
     SET name = ?, description = ?, price = ?, quantity = ?, category = ?, updated_at = ?
     WHERE id = ?",
  )
  .bind(&draft.name)
  .bind(&draft.description)
  .bind(draft.price)
  .bind(draft.quantity)
  .bind(&draft.category)
  .bind(Utc::now())
  .bind(id)
  .execute(pool)
  .await?;

  if result.rows_affected() == 0 {
    return Err(AppError::NotFound(format!("Product with ID {} not found.", id)));
  }

  get(pool, id).await
}

/// Hard delete. Deleting an id that is already gone is Not-Found, not a
/// silent success.
#[instrument(name = "product_store::delete", skip(pool))]
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<()> {
  let result = sqlx::query("DELETE FROM products WHERE id = ?")
    .bind(id)
    .execute(pool)
    .await?;

  if result.rows_affected() == 0 {
    return Err(AppError::NotFound(format!("Product with ID {} not found.", id)));
  }

  debug!(id, "Deleted product.");
  Ok(())
}
