//! Handlers for the `/auth` resource (login, register).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use linkasa_db::models::account::{AccountResponse, Role};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::flow;
use crate::error::AppResult;
use crate::middleware::json::ValidatedJson;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "email must not be empty"))]
    pub email: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
    pub role: Role,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct AccessTokenResponse {
    pub access_token: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /auth/login
///
/// Authenticate with email + password. Returns a short-lived access token.
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> AppResult<Json<AccessTokenResponse>> {
    let access_token =
        flow::sign_in(&state.pool, &state.config.jwt, &input.email, &input.password).await?;
    Ok(Json(AccessTokenResponse { access_token }))
}

/// POST /auth/register
///
/// Create an account. The response never includes the password.
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AccountResponse>)> {
    let account = flow::sign_up(
        &state.pool,
        input.name,
        input.email,
        &input.password,
        input.role,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(account.into())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_rejects_unknown_role() {
        let parsed: Result<RegisterRequest, _> = serde_json::from_value(serde_json::json!({
            "name": "Ann",
            "email": "a@x.com",
            "password": "pw1",
            "role": "admin",
        }));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_register_request_validation() {
        let request = RegisterRequest {
            name: String::new(),
            email: "not-an-email".to_string(),
            password: String::new(),
            role: Role::Student,
        };
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }
}
