//! Handlers for the `/accounts` resource.
//!
//! Every handler requires a valid bearer token via [`AuthUser`].

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use linkasa_core::error::CoreError;
use linkasa_core::types::DbId;
use linkasa_db::models::account::{AccountResponse, Role, UpdateAccount};
use linkasa_db::repositories::AccountRepo;
use serde::Deserialize;
use validator::Validate;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::json::ValidatedJson;
use crate::middleware::path::ApiPath;
use crate::state::AppState;

/// Request body for `PATCH /accounts/{id}`. All fields are optional.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAccountRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: Option<String>,
    pub role: Option<Role>,
}

/// GET /accounts
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<AccountResponse>>> {
    let accounts = AccountRepo::list(&state.pool).await?;
    Ok(Json(accounts.into_iter().map(Into::into).collect()))
}

/// GET /accounts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<AccountResponse>> {
    let account = AccountRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(not_found(id))?;
    Ok(Json(account.into()))
}

/// PATCH /accounts/{id}
///
/// A new password is hashed before it reaches the store.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateAccountRequest>,
) -> AppResult<Json<AccountResponse>> {
    let password_hash = input
        .password
        .as_deref()
        .map(hash_password)
        .transpose()
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let update = UpdateAccount {
        name: input.name,
        email: input.email,
        password_hash,
        role: input.role,
    };

    let account = AccountRepo::update(&state.pool, id, &update)
        .await?
        .ok_or(not_found(id))?;

    tracing::info!(account_id = id, updated_by = user.account_id, "Account updated");
    Ok(Json(account.into()))
}

/// DELETE /accounts/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    if AccountRepo::delete(&state.pool, id).await? {
        tracing::info!(account_id = id, deleted_by = user.account_id, "Account deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Account",
        id,
    })
}
