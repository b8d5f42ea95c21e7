//! Route definitions for the `/accounts` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::account;
use crate::state::AppState;

/// Routes mounted at `/accounts`. All require a bearer token.
///
/// ```text
/// GET    /       -> list
/// GET    /{id}   -> get_by_id
/// PATCH  /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(account::list)).route(
        "/{id}",
        get(account::get_by_id)
            .patch(account::update)
            .delete(account::delete),
    )
}
