//! Route definition for the service probe.

use axum::routing::get;
use axum::Router;

use crate::handlers::health;
use crate::state::AppState;

/// `GET /health`, mounted beside the resource routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health::health))
}
