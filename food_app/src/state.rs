// food_app/src/state.rs
use crate::config::AppConfig;
use crate::db::Store;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub store: Arc<dyn Store>,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  pub fn new(store: Arc<dyn Store>, config: Arc<AppConfig>) -> Self {
    Self { store, config }
  }

  /// Identity used for cart resolution on every request.
  pub fn caller_user_id(&self) -> i32 {
    self.config.default_user_id
  }
}
