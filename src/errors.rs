// src/errors.rs

use std::collections::BTreeMap;
use std::fmt;

use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// Per-field validation messages, keyed by payload field name.
///
/// Collected during payload validation so a single rejected request can
/// report every failing field at once rather than the first one found.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn push(&mut self, field: &str, message: impl Into<String>) {
    self.0.entry(field.to_string()).or_default().push(message.into());
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn contains(&self, field: &str) -> bool {
    self.0.contains_key(field)
  }
}

impl fmt::Display for FieldErrors {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut first = true;
    for (field, messages) in &self.0 {
      for message in messages {
        if !first {
          write!(f, "; ")?;
        }
        write!(f, "{}: {}", field, message)?;
        first = false;
      }
    }
    Ok(())
  }
}

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(FieldErrors),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

// Allow anyhow::Error to be converted into AppError::Internal for convenience
// in functions that use `?` on anyhow::Result.
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    if err.is::<sqlx::Error>() {
      return AppError::Sqlx(err.downcast::<sqlx::Error>().unwrap());
    }
    AppError::Internal(err.to_string())
  }
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Validation(errors) => HttpResponse::UnprocessableEntity().json(json!({
        "message": "The given data was invalid.",
        "errors": errors,
      })),
      AppError::NotFound(m) => HttpResponse::NotFound().json(json!({"error": m})),
      AppError::Config(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "Configuration issue", "detail": m}))
      }
      AppError::Sqlx(_) => HttpResponse::InternalServerError().json(json!({"error": "Database operation failed"})),
      AppError::Internal(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "An internal error occurred", "detail": m}))
      }
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn field_errors_display_joins_fields_and_messages() {
    let mut errors = FieldErrors::new();
    errors.push("name", "name is required");
    errors.push("price", "price must be a number");
    errors.push("price", "price must not be negative");

    let rendered = errors.to_string();
    assert_eq!(
      rendered,
      "name: name is required; price: price must be a number; price: price must not be negative"
    );
  }

  #[test]
  fn validation_error_maps_to_unprocessable_entity() {
    let mut errors = FieldErrors::new();
    errors.push("quantity", "quantity must be an integer");

    let response = AppError::Validation(errors).error_response();
    assert_eq!(response.status(), actix_web::http::StatusCode::UNPROCESSABLE_ENTITY);
  }

  #[test]
  fn not_found_maps_to_404() {
    let response = AppError::NotFound("Product with ID 7 not found.".into()).error_response();
    assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
  }
}
