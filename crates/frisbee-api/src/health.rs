//! `GET /v1/health/`: liveness of the API and its store.

use axum::{extract::State, http::StatusCode};
use frisbee_core::store::Store;
use tracing::Instrument as _;

use crate::AppState;

pub async fn check<S: Store>(
  State(state): State<AppState<S>>,
) -> (StatusCode, String) {
  match state.store.ping().instrument(state.span.clone()).await {
    Ok(()) => (StatusCode::OK, "healthy".to_owned()),
    Err(e) => {
      tracing::warn!(parent: &state.span, error = %e, "health check failed");
      (StatusCode::INTERNAL_SERVER_ERROR, format!("unhealthy: {e}"))
    }
  }
}
