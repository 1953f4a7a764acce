// food_app/src/services/cart_service.rs

use tracing::{info, instrument};

use crate::db::Store;
use crate::errors::Result;
use crate::models::{AddToCartRequest, CartView};

/// Resolves the cart owned by `user_id`, creating it on first use.
#[instrument(name = "cart_service::resolve_cart", skip(store), err(Display))]
pub async fn resolve_cart(store: &dyn Store, user_id: i32) -> Result<i32> {
  Ok(store.get_or_create_cart(user_id).await?)
}

#[instrument(name = "cart_service::view_cart", skip(store), err(Display))]
pub async fn view_cart(store: &dyn Store, user_id: i32) -> Result<CartView> {
  let cart_id = resolve_cart(store, user_id).await?;
  let lines = store.cart_lines(cart_id).await?;
  let view = CartView::new(cart_id, lines);
  info!(cart_id, items = view.items.len(), total = %view.total, "Cart fetched.");
  Ok(view)
}

/// Validates the request, then merges the product line into the user's cart.
///
/// An invalid request is rejected before the store is touched.
#[instrument(name = "cart_service::add_to_cart", skip(store))]
pub async fn add_to_cart(store: &dyn Store, user_id: i32, request: &AddToCartRequest) -> Result<()> {
  let (product_id, quantity) = request.validated()?;
  let cart_id = resolve_cart(store, user_id).await?;
  store.add_item(cart_id, product_id, quantity).await?;
  info!(cart_id, product_id, quantity, "Item added to cart.");
  Ok(())
}
