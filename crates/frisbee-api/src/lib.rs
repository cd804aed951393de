//! JSON REST API for the Ultimate Frisbee registry.
//!
//! Exposes an axum [`Router`] backed by any store implementing the
//! `frisbee_core::store` ports. TLS and transport concerns are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let state = AppState::new(Arc::new(store), tracing::info_span!("api"));
//! axum::serve(listener, frisbee_api::router(state, Duration::from_secs(30)))
//! ```

pub mod error;
pub mod health;
pub mod payload;
pub mod people;
pub mod teams;

use std::{sync::Arc, time::Duration};

use axum::{Router, http::StatusCode, routing::get};
use frisbee_core::store::{MembershipStore, PersonStore, TeamStore};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::Span;

pub use error::ApiError;

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
///
/// `span` is the parent of every event the handlers and the layers below
/// them emit; the caller decides where it attaches.
#[derive(Clone)]
pub struct AppState<S> {
  pub store: Arc<S>,
  pub span:  Span,
}

impl<S> AppState<S> {
  pub fn new(store: Arc<S>, span: Span) -> Self { Self { store, span } }

  /// Log `message` as a request failure and turn it into a 500.
  pub(crate) fn internal(&self, message: String) -> ApiError {
    tracing::error!(parent: &self.span, %message, "request failed");
    ApiError::Internal(message)
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the v1 API router. Requests still running after `request_timeout`
/// are answered with `408 Request Timeout`.
pub fn router<S>(state: AppState<S>, request_timeout: Duration) -> Router
where
  S: TeamStore + PersonStore + MembershipStore + Clone + 'static,
{
  Router::new()
    .route("/v1/health/", get(health::check::<S>))
    // Teams
    .route("/v1/teams/", get(teams::list::<S>).post(teams::create::<S>))
    .route(
      "/v1/teams/{name}/",
      get(teams::get_one::<S>).put(teams::update::<S>),
    )
    .route(
      "/v1/teams/{name}/game-captains/",
      get(teams::game_captains::<S>),
    )
    // People
    .route("/v1/people/", get(people::list::<S>).post(people::create::<S>))
    .route(
      "/v1/people/{user_name}/",
      get(people::get_one::<S>).put(people::update::<S>),
    )
    .layer(TimeoutLayer::with_status_code(
      StatusCode::REQUEST_TIMEOUT,
      request_timeout,
    ))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}
