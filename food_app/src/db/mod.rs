// food_app/src/db/mod.rs

//! Store access: the [`Store`] port used by handlers, and its PostgreSQL adapter.

pub mod connection;
pub mod pg_store;

pub use connection::{create_pool, verify_connection};
pub use pg_store::PgStore;

use async_trait::async_trait;

use crate::models::{CartLine, Product};

pub type StoreResult<T> = std::result::Result<T, sqlx::Error>;

/// Query/execute interface over products, carts and cart items.
///
/// Every call is one round trip; implementations hold no state between calls
/// other than their connection handle.
#[async_trait]
pub trait Store: Send + Sync {
  /// Checks a connection out of the pool and returns it.
  async fn ping(&self) -> StoreResult<()>;

  /// Active products in store-defined order.
  async fn list_active_products(&self) -> StoreResult<Vec<Product>>;

  /// Returns the id of the cart owned by `user_id`, creating it if absent.
  ///
  /// Repeated and concurrent calls for the same user yield the same id.
  async fn get_or_create_cart(&self, user_id: i32) -> StoreResult<i32>;

  /// Lines of `cart_id` joined with their products, `line_total` filled in.
  async fn cart_lines(&self, cart_id: i32) -> StoreResult<Vec<CartLine>>;

  /// Adds `quantity` of `product_id` to the cart, merging into an existing line.
  ///
  /// The product is not checked for existence.
  async fn add_item(&self, cart_id: i32, product_id: i32, quantity: i32) -> StoreResult<()>;
}
