// food_app/src/web/handlers/cart_handlers.rs

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpMessage, HttpRequest, HttpResponse};
use futures_util::future::LocalBoxFuture;
use serde_json::json;
use tracing::{debug, instrument};

use crate::errors::AppError;
use crate::models::AddToCartRequest;
use crate::services::cart_service;
use crate::state::AppState;

// Only JSON bodies are read; any other content type arrives with no fields,
// which the add-to-cart validation then rejects.
impl FromRequest for AddToCartRequest {
  type Error = AppError;
  type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
    let is_json = req.content_type().contains("json");
    let body = web::Bytes::from_request(req, payload);
    Box::pin(async move {
      let body = body.await.map_err(|e| AppError::MalformedPayload(e.to_string()))?;
      if !is_json {
        debug!(body_len = body.len(), "Ignoring non-JSON add-to-cart body.");
        return Ok(Self::default());
      }
      Self::from_json_body(&body)
    })
  }
}

#[instrument(name = "handler::get_cart", skip(app_state), fields(user_id = app_state.caller_user_id()))]
pub async fn get_cart_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let view = cart_service::view_cart(app_state.store.as_ref(), app_state.caller_user_id())
    .await
    .map_err(|e| e.with_public_message("Failed to fetch cart"))?;
  Ok(HttpResponse::Ok().json(view))
}

#[instrument(
    name = "handler::add_to_cart",
    skip(app_state, req_payload),
    fields(user_id = app_state.caller_user_id(), product_id = ?req_payload.product_id, quantity = ?req_payload.quantity)
)]
pub async fn add_to_cart_handler(
  app_state: web::Data<AppState>,
  req_payload: AddToCartRequest,
) -> Result<HttpResponse, AppError> {
  cart_service::add_to_cart(app_state.store.as_ref(), app_state.caller_user_id(), &req_payload)
    .await
    .map_err(|e| e.with_public_message("Failed to add to cart"))?;
  Ok(HttpResponse::Ok().json(json!({ "message": "Item added to cart" })))
}
