pub mod account;
pub mod assignment;
pub mod auth;
pub mod course;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree (mounted at the root, no version prefix).
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                          login (public)
/// /auth/register                       register (public)
///
/// /accounts                            list (requires auth)
/// /accounts/{id}                       get, update, delete (requires auth)
///
/// /courses                             list, create
/// /courses/{id}                        get, update, delete
///
/// /assignments                         list, create
/// /assignments/{id}                    get, update, delete
/// /assignments/course/{course_id}      list by course
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/accounts", account::router())
        .nest("/courses", course::router())
        .nest("/assignments", assignment::router())
}
