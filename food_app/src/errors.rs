// food_app/src/errors.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  // Body could not be parsed into the expected request shape.
  #[error("Malformed Payload: {0}")]
  MalformedPayload(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  // A store failure paired with the fixed message the caller is allowed to see.
  #[error("{message}: {source}")]
  Store {
    message: &'static str,
    #[source]
    source: sqlx::Error,
  },
}

impl AppError {
  /// Attaches the public message for a store failure.
  ///
  /// Non-store errors pass through untouched, so validation failures keep
  /// their own message and status.
  pub fn with_public_message(self, message: &'static str) -> Self {
    match self {
      AppError::Sqlx(source) => AppError::Store { message, source },
      other => other,
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) | AppError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
      AppError::Config(_) | AppError::Sqlx(_) | AppError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    match self {
      AppError::Validation(_) | AppError::MalformedPayload(_) => {
        tracing::warn!(application_error = %self, "Rejecting request");
      }
      _ => tracing::error!(application_error = %self, "Responding with error"),
    }

    let body = match self {
      AppError::Validation(m) => json!({ "error": m }),
      AppError::MalformedPayload(_) => json!({ "error": "Invalid JSON payload" }),
      AppError::Store { message, .. } => json!({ "error": message }),
      AppError::Config(_) | AppError::Sqlx(_) => json!({ "error": "Internal server error" }),
    };
    HttpResponse::build(self.status_code()).json(body)
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
