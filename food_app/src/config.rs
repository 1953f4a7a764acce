// food_app/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,
  pub db_max_connections: u32,
  // None means callers queue for a pooled connection without a deadline.
  pub db_acquire_timeout: Option<Duration>,
  // Bounds every attempt to open a new connection.
  pub db_connect_timeout: Duration,
  // Server-side limit applied to each statement.
  pub db_statement_timeout: Duration,
  // Identity used to resolve the cart until callers carry their own.
  pub default_user_id: i32,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      server_host: "0.0.0.0".to_string(),
      server_port: 4000,
      database_url: "postgres://root@localhost:5432/food_app".to_string(),
      db_max_connections: 10,
      db_acquire_timeout: None,
      db_connect_timeout: Duration::from_secs(10),
      db_statement_timeout: Duration::from_secs(30),
      default_user_id: 1,
    }
  }
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the configuration from an arbitrary variable source.
  ///
  /// Unset variables fall back to [`AppConfig::default`]; set but unparsable
  /// ones are reported as [`AppError::Config`].
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let defaults = Self::default();

    let server_host = lookup("SERVER_HOST").unwrap_or(defaults.server_host);
    let server_port = parse_or(&lookup, "SERVER_PORT", defaults.server_port)?;
    let database_url = lookup("DATABASE_URL").unwrap_or(defaults.database_url);
    let db_max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", defaults.db_max_connections)?;
    if db_max_connections == 0 {
      return Err(AppError::Config("DB_MAX_CONNECTIONS must be at least 1".to_string()));
    }
    let db_acquire_timeout = match lookup("DB_ACQUIRE_TIMEOUT_SECS") {
      Some(raw) => Some(Duration::from_secs(parse_value("DB_ACQUIRE_TIMEOUT_SECS", &raw)?)),
      None => defaults.db_acquire_timeout,
    };
    let db_connect_timeout = parse_secs_or(&lookup, "DB_CONNECT_TIMEOUT_SECS", defaults.db_connect_timeout)?;
    let db_statement_timeout = parse_secs_or(&lookup, "DB_STATEMENT_TIMEOUT_SECS", defaults.db_statement_timeout)?;
    let default_user_id = parse_or(&lookup, "DEFAULT_USER_ID", defaults.default_user_id)?;

    tracing::info!("Application configuration loaded successfully.");
    // Avoid logging the database URL, it may carry credentials.
    tracing::debug!(
      server_host = %server_host,
      server_port,
      db_max_connections,
      db_connect_timeout_secs = db_connect_timeout.as_secs(),
      default_user_id,
      "Loaded config details"
    );

    Ok(Self {
      server_host,
      server_port,
      database_url,
      db_max_connections,
      db_acquire_timeout,
      db_connect_timeout,
      db_statement_timeout,
      default_user_id,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}

fn parse_or<F, T>(lookup: &F, var_name: &str, default: T) -> Result<T>
where
  F: Fn(&str) -> Option<String>,
  T: FromStr,
  T::Err: std::fmt::Display,
{
  match lookup(var_name) {
    Some(raw) => parse_value(var_name, &raw),
    None => Ok(default),
  }
}

// Zero would disable the timeout, so it is rejected.
fn parse_secs_or<F>(lookup: &F, var_name: &str, default: Duration) -> Result<Duration>
where
  F: Fn(&str) -> Option<String>,
{
  let secs: u64 = parse_or(lookup, var_name, default.as_secs())?;
  if secs == 0 {
    return Err(AppError::Config(format!("{} must be at least 1", var_name)));
  }
  Ok(Duration::from_secs(secs))
}

fn parse_value<T>(var_name: &str, raw: &str) -> Result<T>
where
  T: FromStr,
  T::Err: std::fmt::Display,
{
  raw
    .trim()
    .parse::<T>()
    .map_err(|e| AppError::Config(format!("Invalid {} value '{}': {}", var_name, raw, e)))
}
