// src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::models::product::ProductPayload;
use crate::services::product_store::{self, ProductFilter};
use crate::state::AppState;

#[derive(Deserialize, Debug)]
pub struct ListProductsQuery {
  pub search: Option<String>,
  pub category: Option<String>,
}

#[instrument(name = "handler::list_products", skip(app_state, query_params))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<ListProductsQuery>,
) -> Result<HttpResponse, AppError> {
  let query = query_params.into_inner();
  let filter = ProductFilter {
    search: query.search,
    category: query.category,
  };

  let products = product_store::list(&app_state.db_pool, &filter).await?;

  info!(count = products.len(), "Listed products.");
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::list_categories", skip(app_state))]
pub async fn list_categories_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let categories = product_store::list_categories(&app_state.db_pool).await?;
  Ok(HttpResponse::Ok().json(categories))
}

#[instrument(name = "handler::create_product", skip(app_state, payload))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<ProductPayload>,
) -> Result<HttpResponse, AppError> {
  let draft = payload.validate().map_err(AppError::Validation)?;

  let product = product_store::create(&app_state.db_pool, &draft).await?;

  info!(id = product.id, "Created product.");
  Ok(HttpResponse::Created().json(product))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  let product = product_store::get(&app_state.db_pool, product_id).await?;
  Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::update_product", skip(app_state, path, payload), fields(product_id = %path.as_ref()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  payload: web::Json<ProductPayload>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  let draft = payload.validate().map_err(AppError::Validation)?;

  let product = product_store::update(&app_state.db_pool, product_id, &draft).await?;

  info!(id = product.id, "Updated product.");
  Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::delete_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  product_store::delete(&app_state.db_pool, product_id).await.map_err(|e| {
    if matches!(e, AppError::NotFound(_)) {
      warn!(product_id, "Delete targeted a missing product.");
    }
    e
  })?;

  info!(product_id, "Deleted product.");
  Ok(HttpResponse::NoContent().finish())
}
