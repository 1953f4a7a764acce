// food_app/src/lib.rs

//! HTTP backend for the food-ordering app.
//!
//! Lists active products and keeps a single shared cart per user identity,
//! backed by PostgreSQL:
//!  - `GET /` reports liveness.
//!  - `GET /api/products` lists active products.
//!  - `GET /api/cart` returns the caller's cart with per-line and overall totals.
//!  - `POST /api/cart/add` merges a product line into the caller's cart.
//!
//! Handlers talk to the store only through the [`db::Store`] port, so the whole
//! HTTP surface runs against any implementation of it.

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod web;

pub use crate::config::AppConfig;
pub use crate::errors::{AppError, Result};
pub use crate::state::AppState;
