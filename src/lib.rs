// src/lib.rs

//! Product inventory application: a REST backend over a single SQLite
//! table plus an embedded single-page front-end served from the same
//! binary.
//!
//! Layout:
//!  - `config` / `state`: environment configuration and shared app state.
//!  - `db`: pool construction, migrations, optional seeding.
//!  - `models`: the `Product` entity and its validated write payload.
//!  - `services::product_store`: all SQL for the product resource.
//!  - `web`: actix-web routes, handlers, and the embedded UI assets.

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod web;

pub use crate::config::AppConfig;
pub use crate::errors::{AppError, FieldErrors, Result};
pub use crate::models::{NewProduct, Product, ProductPayload};
pub use crate::state::AppState;
