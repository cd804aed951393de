//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Error bodies are plain text. The status code is decided here and nowhere
//! else.

use axum::{
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::payload::ValidationError;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("not found: {0}")]
  NotFound(String),

  #[error("conflict: {0}")]
  Conflict(String),

  #[error("internal error: {0}")]
  Internal(String),
}

impl From<ValidationError> for ApiError {
  fn from(err: ValidationError) -> Self { Self::BadRequest(err.to_string()) }
}

impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    tracing::debug!(%rejection, "rejected request body");
    Self::BadRequest("invalid payload format".to_owned())
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
      ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
      ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg).into_response(),
      ApiError::Internal(msg) => {
        (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response()
      }
    }
  }
}
