// food_app/src/main.rs

use actix_cors::Cors;
use actix_web::{web as actix_data, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use food_app::db::{create_pool, verify_connection, PgStore};
use food_app::web::configure_app_routes;
use food_app::{AppConfig, AppState};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // RUST_LOG overrides the default `info` level
  let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  info!("Starting food app server...");

  let app_config = Arc::new(AppConfig::from_env().context("Failed to load application configuration")?);

  // The pool connects lazily; reachability is checked once the listener is bound.
  let db_pool = create_pool(&app_config).context("Failed to create database pool")?;
  let store = Arc::new(PgStore::new(db_pool.clone(), &app_config));

  let app_state = AppState::new(store.clone(), app_config.clone());

  let server_address = app_config.bind_address();
  info!("Attempting to bind server to {}...", server_address);

  let server = HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone()))
      .wrap(Cors::permissive())
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(configure_app_routes)
  })
  .bind(&server_address)
  .with_context(|| format!("Failed to bind {}", server_address))?
  .run();

  info!("Server running on {}", server_address);

  actix_web::rt::spawn(async move {
    if let Err(e) = verify_connection(&*store).await {
      error!(error = %e, "Database connection failed");
      std::process::exit(1);
    }
  });

  server.await.context("HTTP server terminated with an error")?;

  info!("Server stopped, closing database pool.");
  db_pool.close().await;
  Ok(())
}
