// food_app/src/models/product.rs

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// An active product as exposed by the catalogue listing.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Product {
  pub id: i32,
  pub name: String,
  pub description: Option<String>,
  #[serde(with = "rust_decimal::serde::float")]
  pub price: Decimal,
  pub image_url: Option<String>,
}
