// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use async_trait::async_trait;
use food_app::db::{Store, StoreResult};
use food_app::models::{CartLine, Product};
use food_app::{AppConfig, AppState};
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::{
  atomic::{AtomicBool, AtomicUsize, Ordering},
  Arc, Mutex,
};
use tracing::Level;

// --- In-memory Store ---

#[derive(Debug, Clone)]
struct StoredProduct {
  product: Product,
  is_active: bool,
}

#[derive(Debug, Clone)]
struct StoredItem {
  id: i32,
  cart_id: i32,
  product_id: i32,
  quantity: i32,
}

#[derive(Debug, Default)]
struct Tables {
  products: Vec<StoredProduct>,
  carts: Vec<(i32, i32)>, // (id, user_id)
  items: Vec<StoredItem>,
  next_cart_id: i32,
  next_item_id: i32,
}

/// Store double with the same observable semantics as the PostgreSQL adapter,
/// including the foreign key from cart items to products.
#[derive(Default)]
pub struct MemoryStore {
  tables: Mutex<Tables>,
  calls: AtomicUsize,
  failing: AtomicBool,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_product(self, id: i32, name: &str, price: &str, is_active: bool) -> Self {
    self.tables.lock().unwrap().products.push(StoredProduct {
      product: Product {
        id,
        name: name.to_string(),
        description: Some(format!("{} description", name)),
        price: dec(price),
        image_url: Some(format!("/images/{}.png", id)),
      },
      is_active,
    });
    self
  }

  /// Makes every subsequent call fail as if the database were unreachable.
  pub fn fail_all(&self) {
    self.failing.store(true, Ordering::SeqCst);
  }

  pub fn call_count(&self) -> usize {
    self.calls.load(Ordering::SeqCst)
  }

  pub fn cart_count(&self) -> usize {
    self.tables.lock().unwrap().carts.len()
  }

  pub fn item_count(&self) -> usize {
    self.tables.lock().unwrap().items.len()
  }

  fn enter(&self) -> StoreResult<()> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    if self.failing.load(Ordering::SeqCst) {
      return Err(sqlx::Error::PoolTimedOut);
    }
    Ok(())
  }
}

#[async_trait]
impl Store for MemoryStore {
  async fn ping(&self) -> StoreResult<()> {
    self.enter()
  }

  async fn list_active_products(&self) -> StoreResult<Vec<Product>> {
    self.enter()?;
    let tables = self.tables.lock().unwrap();
    Ok(
      tables
        .products
        .iter()
        .filter(|p| p.is_active)
        .map(|p| p.product.clone())
        .collect(),
    )
  }

  async fn get_or_create_cart(&self, user_id: i32) -> StoreResult<i32> {
    self.enter()?;
    let mut tables = self.tables.lock().unwrap();
    if let Some((id, _)) = tables.carts.iter().find(|(_, owner)| *owner == user_id) {
      return Ok(*id);
    }
    tables.next_cart_id += 1;
    let id = tables.next_cart_id;
    tables.carts.push((id, user_id));
    Ok(id)
  }

  async fn cart_lines(&self, cart_id: i32) -> StoreResult<Vec<CartLine>> {
    self.enter()?;
    let tables = self.tables.lock().unwrap();
    Ok(
      tables
        .items
        .iter()
        .filter(|item| item.cart_id == cart_id)
        .filter_map(|item| {
          let product = &tables.products.iter().find(|p| p.product.id == item.product_id)?.product;
          Some(CartLine {
            id: item.id,
            product_id: item.product_id,
            name: product.name.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
            quantity: item.quantity,
            line_total: product.price * Decimal::from(item.quantity),
          })
        })
        .collect(),
    )
  }

  async fn add_item(&self, cart_id: i32, product_id: i32, quantity: i32) -> StoreResult<()> {
    self.enter()?;
    let mut tables = self.tables.lock().unwrap();
    if !tables.products.iter().any(|p| p.product.id == product_id) {
      return Err(sqlx::Error::Protocol(format!(
        "insert or update on table \"cart_items\" violates foreign key constraint (product_id)=({})",
        product_id
      )));
    }
    if let Some(item) = tables
      .items
      .iter_mut()
      .find(|item| item.cart_id == cart_id && item.product_id == product_id)
    {
      // Mirrors PostgreSQL's "integer out of range" on the upsert.
      item.quantity = item
        .quantity
        .checked_add(quantity)
        .ok_or_else(|| sqlx::Error::Protocol("integer out of range".to_string()))?;
      return Ok(());
    }
    tables.next_item_id += 1;
    let id = tables.next_item_id;
    tables.items.push(StoredItem {
      id,
      cart_id,
      product_id,
      quantity,
    });
    Ok(())
  }
}

// --- Builders ---

pub fn dec(value: &str) -> Decimal {
  Decimal::from_str(value).unwrap()
}

/// Pizza (9.99) and Salad (4.50) are active, Soup (3.25) is not.
pub fn seeded_store() -> Arc<MemoryStore> {
  Arc::new(
    MemoryStore::new()
      .with_product(1, "Pizza", "9.99", true)
      .with_product(2, "Salad", "4.50", true)
      .with_product(3, "Soup", "3.25", false),
  )
}

pub fn app_state(store: Arc<MemoryStore>) -> AppState {
  AppState::new(store, Arc::new(AppConfig::default()))
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
