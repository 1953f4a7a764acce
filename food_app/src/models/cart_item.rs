// food_app/src/models/cart_item.rs

use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use crate::errors::{AppError, Result};

/// One cart row joined with its product, priced at read time.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct CartLine {
  pub id: i32,
  pub product_id: i32,
  pub name: String,
  #[serde(with = "rust_decimal::serde::float")]
  pub price: Decimal,
  pub image_url: Option<String>,
  pub quantity: i32,
  #[serde(with = "rust_decimal::serde::float")]
  pub line_total: Decimal,
}

/// Body of `POST /api/cart/add`.
///
/// `null`, `false` and `""` read as an absent field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
  #[serde(default, deserialize_with = "falsy_as_none")]
  pub product_id: Option<i32>,
  #[serde(default, deserialize_with = "falsy_as_none")]
  pub quantity: Option<i32>,
}

impl AddToCartRequest {
  /// Parses a raw request body.
  ///
  /// An empty body, `null` or an array carries no fields. Anything that is not
  /// JSON, or a field holding a non-integer value, is a malformed payload.
  pub fn from_json_body(body: &[u8]) -> Result<Self> {
    if body.iter().all(u8::is_ascii_whitespace) {
      return Ok(Self::default());
    }
    let malformed = |e: serde_json::Error| AppError::MalformedPayload(e.to_string());
    match serde_json::from_slice::<Value>(body).map_err(malformed)? {
      Value::Object(fields) => serde_json::from_value(Value::Object(fields)).map_err(malformed),
      Value::Null | Value::Array(_) => Ok(Self::default()),
      other => Err(AppError::MalformedPayload(format!("expected a JSON object, got {}", other))),
    }
  }

  /// Returns `(product_id, quantity)` when both are present and non-zero.
  ///
  /// Zero counts as absent for either field.
  pub fn validated(&self) -> Result<(i32, i32)> {
    match (self.product_id, self.quantity) {
      (Some(product_id), Some(quantity)) if product_id != 0 && quantity != 0 => Ok((product_id, quantity)),
      _ => Err(AppError::Validation("productId and quantity are required".to_string())),
    }
  }
}

fn falsy_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<i32>, D::Error>
where
  D: Deserializer<'de>,
{
  match Option::<Value>::deserialize(deserializer)? {
    None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(None),
    Some(Value::String(s)) if s.is_empty() => Ok(None),
    Some(Value::Number(n)) => match n.as_i64() {
      Some(v) => i32::try_from(v)
        .map(Some)
        .map_err(|_| D::Error::custom(format!("integer {} out of range", v))),
      None if n.as_f64() == Some(0.0) => Ok(None),
      None => Err(D::Error::custom(format!("expected an integer, got {}", n))),
    },
    Some(other) => Err(D::Error::custom(format!("expected an integer, got {}", other))),
  }
}
