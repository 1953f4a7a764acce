// food_app/src/db/pg_store.rs

use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::{Connection, PgConnection, PgPool, Postgres};
use std::time::Duration;
use tracing::{debug, instrument, warn};

use super::{Store, StoreResult};
use crate::config::AppConfig;
use crate::models::{CartLine, Product};

/// [`Store`] backed by a PostgreSQL pool.
///
/// Relies on the unique constraints on `carts(user_id)` and
/// `cart_items(cart_id, product_id)` from `schema.sql`.
#[derive(Clone)]
pub struct PgStore {
  pool: PgPool,
  connect_timeout: Duration,
  // Keep queueing after the pool deadline as long as the server answers.
  wait_for_busy_pool: bool,
}

impl PgStore {
  pub fn new(pool: PgPool, config: &AppConfig) -> Self {
    Self {
      pool,
      connect_timeout: config.db_connect_timeout,
      wait_for_busy_pool: config.db_acquire_timeout.is_none(),
    }
  }

  /// Checks a connection out of the pool.
  ///
  /// A pool deadline is only final when the server cannot be reached; if a
  /// fresh connection still opens, every slot is simply busy and the wait
  /// goes on.
  async fn acquire(&self) -> StoreResult<PoolConnection<Postgres>> {
    loop {
      match self.pool.acquire().await {
        Err(sqlx::Error::PoolTimedOut) if self.wait_for_busy_pool => {
          self.check_reachable().await?;
          debug!(pool_size = self.pool.size(), "All pooled connections busy, still waiting.");
        }
        other => return other,
      }
    }
  }

  async fn check_reachable(&self) -> StoreResult<()> {
    let options = self.pool.connect_options();
    let conn = tokio::time::timeout(self.connect_timeout, PgConnection::connect_with(&options))
      .await
      .map_err(|_| {
        warn!(timeout_secs = self.connect_timeout.as_secs(), "Timed out connecting to the database.");
        sqlx::Error::PoolTimedOut
      })??;
    conn.close().await
  }
}

#[async_trait]
impl Store for PgStore {
  #[instrument(name = "pg_store::ping", skip(self))]
  async fn ping(&self) -> StoreResult<()> {
    let _conn = self.acquire().await?;
    Ok(())
  }

  #[instrument(name = "pg_store::list_active_products", skip(self))]
  async fn list_active_products(&self) -> StoreResult<Vec<Product>> {
    let mut conn = self.acquire().await?;
    let products: Vec<Product> =
      sqlx::query_as("SELECT id, name, description, price, image_url FROM products WHERE is_active = TRUE")
        .fetch_all(&mut *conn)
        .await?;
    debug!("Fetched {} active products.", products.len());
    Ok(products)
  }

  #[instrument(name = "pg_store::get_or_create_cart", skip(self))]
  async fn get_or_create_cart(&self, user_id: i32) -> StoreResult<i32> {
    let mut conn = self.acquire().await?;
    // The no-op update makes RETURNING yield the existing row on conflict.
    let cart_id: i32 = sqlx::query_scalar(
      r#"
      INSERT INTO carts (user_id) VALUES ($1)
      ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id
      RETURNING id
      "#,
    )
    .bind(user_id)
    .fetch_one(&mut *conn)
    .await?;
    debug!(cart_id, "Resolved cart.");
    Ok(cart_id)
  }

  #[instrument(name = "pg_store::cart_lines", skip(self))]
  async fn cart_lines(&self, cart_id: i32) -> StoreResult<Vec<CartLine>> {
    let mut conn = self.acquire().await?;
    sqlx::query_as(
      r#"
      SELECT ci.id, ci.product_id, p.name, p.price, p.image_url, ci.quantity,
             (p.price * ci.quantity) AS line_total
      FROM cart_items ci
      JOIN products p ON p.id = ci.product_id
      WHERE ci.cart_id = $1
      "#,
    )
    .bind(cart_id)
    .fetch_all(&mut *conn)
    .await
  }

  #[instrument(name = "pg_store::add_item", skip(self))]
  async fn add_item(&self, cart_id: i32, product_id: i32, quantity: i32) -> StoreResult<()> {
    let mut conn = self.acquire().await?;
    sqlx::query(
      r#"
      INSERT INTO cart_items (cart_id, product_id, quantity) VALUES ($1, $2, $3)
      ON CONFLICT (cart_id, product_id) DO UPDATE SET quantity = cart_items.quantity + EXCLUDED.quantity
      "#,
    )
    .bind(cart_id)
    .bind(product_id)
    .bind(quantity)
    .execute(&mut *conn)
    .await?;
    Ok(())
  }
}
