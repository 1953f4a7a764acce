// food_app/src/models/cart.rs

use rust_decimal::Decimal;
use serde::Serialize;

use super::cart_item::CartLine;

/// The cart as returned to callers, with its total derived from the lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartView {
  #[serde(rename = "cartId")]
  pub cart_id: i32,
  pub items: Vec<CartLine>,
  #[serde(with = "rust_decimal::serde::float")]
  pub total: Decimal,
}

impl CartView {
  pub fn new(cart_id: i32, items: Vec<CartLine>) -> Self {
    // Sum the store-computed line totals so the two figures never disagree.
    let total = items.iter().map(|line| line.line_total).sum();
    Self { cart_id, items, total }
  }
}
