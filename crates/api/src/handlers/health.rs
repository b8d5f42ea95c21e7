//! Handler for `GET /health`.

use axum::extract::State;
use axum::Json;
use linkasa_db::models::catalog::CatalogStats;
use linkasa_db::repositories::CatalogRepo;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `"ok"` when the database answered, `"degraded"` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    /// `"up"` or `"down"`.
    pub database: &'static str,
    /// Lifetime of newly issued access tokens.
    pub token_lifetime_secs: i64,
    /// Row counts; absent when the database is down.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<CatalogStats>,
}

/// GET /health
///
/// Always answers 200 so load balancers can tell a degraded service from a
/// dead one. The catalog query doubles as the database probe.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let catalog = match CatalogRepo::stats(&state.pool).await {
        Ok(stats) => Some(stats),
        Err(e) => {
            tracing::warn!(error = %e, "Health probe could not reach the database");
            None
        }
    };

    let (status, database) = if catalog.is_some() {
        ("ok", "up")
    } else {
        ("degraded", "down")
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        database,
        token_lifetime_secs: state.config.jwt.access_token_expiry_secs,
        catalog,
    })
}
