// food_app/src/db/connection.rs

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use std::str::FromStr;
use tracing::{debug, info, instrument};

use crate::config::AppConfig;
use crate::db::Store;
use crate::errors::{AppError, Result};

/// Builds the bounded pool without opening any connection yet.
///
/// Connections are established on first use, so the listener can be bound
/// before the store has been reached.
///
/// The pool's own acquire deadline is the configured acquire timeout or, when
/// that is unset, the connect timeout. sqlx retries a refused connection until
/// that deadline, so it must stay short; [`PgStore`](crate::db::PgStore) keeps
/// waiting past it while the server is still reachable.
pub fn create_pool(config: &AppConfig) -> Result<PgPool> {
  let connect_options = PgConnectOptions::from_str(&config.database_url)
    .map_err(|e| AppError::Config(format!("Invalid DATABASE_URL: {}", e)))?
    .options([("statement_timeout", config.db_statement_timeout.as_millis().to_string())]);

  let acquire_timeout = config.db_acquire_timeout.unwrap_or(config.db_connect_timeout);
  let pool_options = PgPoolOptions::new()
    .max_connections(config.db_max_connections)
    .acquire_timeout(acquire_timeout);

  debug!(
    max_connections = config.db_max_connections,
    acquire_timeout_secs = acquire_timeout.as_secs(),
    "Creating database pool."
  );
  Ok(pool_options.connect_lazy_with(connect_options))
}

#[instrument(name = "db::verify_connection", skip(store), err(Display))]
pub async fn verify_connection(store: &dyn Store) -> Result<()> {
  store.ping().await?;
  info!("Database connected successfully");
  Ok(())
}
