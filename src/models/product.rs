// src/models/product.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use crate::errors::FieldErrors;

/// A persisted product row. The only entity in the system.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
  pub id: i64,
  pub name: String,
  pub description: Option<String>,
  pub price: f64,
  pub quantity: i64,
  pub category: Option<String>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// Incoming create/update body, exactly as the client sent it.
///
/// Fields are whitelisted: anything outside this set is rejected at the
/// JSON layer. `price` and `quantity` stay untyped here because form
/// submissions deliver them as strings ("9.99"); `validate` settles the
/// type question and reports per-field errors.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductPayload {
  pub name: Option<String>,
  pub description: Option<String>,
  pub price: Option<Value>,
  pub quantity: Option<Value>,
  pub category: Option<String>,
}

/// A fully validated product body, ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
  pub name: String,
  pub description: Option<String>,
  pub price: f64,
  pub quantity: i64,
  pub category: Option<String>,
}

impl ProductPayload {
  /// Validate every field and either return a persistable `NewProduct`
  /// or the full set of field errors. Nothing is persisted on failure.
  pub fn validate(&self) -> Result<NewProduct, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = match &self.name {
      Some(n) if !n.trim().is_empty() => n.clone(),
      _ => {
        errors.push("name", "name is required");
        String::new()
      }
    };

    let price = match parse_number(self.price.as_ref()) {
      Parsed::Missing => {
        errors.push("price", "price is required");
        0.0
      }
      Parsed::Invalid => {
        errors.push("price", "price must be a number");
        0.0
      }
      Parsed::Value(p) if p < 0.0 => {
        errors.push("price", "price must not be negative");
        0.0
      }
      Parsed::Value(p) => p,
    };

    let quantity = match parse_integer(self.quantity.as_ref()) {
      Parsed::Missing => {
        errors.push("quantity", "quantity is required");
        0
      }
      Parsed::Invalid => {
        errors.push("quantity", "quantity must be an integer");
        0
      }
      Parsed::Value(q) if q < 0 => {
        errors.push("quantity", "quantity must not be negative");
        0
      }
      Parsed::Value(q) => q,
    };

    if !errors.is_empty() {
      return Err(errors);
    }

    Ok(NewProduct {
      name,
      description: normalize_optional(&self.description),
      price,
      quantity,
      category: normalize_optional(&self.category),
    })
  }
}

enum Parsed<T> {
  Missing,
  Invalid,
  Value(T),
}

/// Accepts a JSON number or a numeric string. NaN and infinities are
/// rejected; they would otherwise slip through string parsing.
fn parse_number(value: Option<&Value>) -> Parsed<f64> {
  match value {
    None | Some(Value::Null) => Parsed::Missing,
    Some(Value::Number(n)) => match n.as_f64() {
      Some(f) if f.is_finite() => Parsed::Value(f),
      _ => Parsed::Invalid,
    },
    Some(Value::String(s)) if s.trim().is_empty() => Parsed::Missing,
    Some(Value::String(s)) => match s.trim().parse::<f64>() {
      Ok(f) if f.is_finite() => Parsed::Value(f),
      _ => Parsed::Invalid,
    },
    Some(_) => Parsed::Invalid,
  }
}

/// Accepts a JSON integer or an integer string. A fractional number
/// (3.5, "3.5") is invalid, not truncated.
fn parse_integer(value: Option<&Value>) -> Parsed<i64> {
  match value {
    None | Some(Value::Null) => Parsed::Missing,
    Some(Value::Number(n)) => match n.as_i64() {
      Some(i) => Parsed::Value(i),
      None => Parsed::Invalid,
    },
    Some(Value::String(s)) if s.trim().is_empty() => Parsed::Missing,
    Some(Value::String(s)) => match s.trim().parse::<i64>() {
      Ok(i) => Parsed::Value(i),
      Err(_) => Parsed::Invalid,
    },
    Some(_) => Parsed::Invalid,
  }
}

/// Blank form inputs arrive as "" and mean "not set".
fn normalize_optional(value: &Option<String>) -> Option<String> {
  value.as_deref().map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}
