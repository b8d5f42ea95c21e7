//! Sign-up and sign-in.
//!
//! Neither operation keeps any session state: sign-up writes an account row,
//! sign-in reads one and hands back a short-lived token.

use linkasa_core::error::CoreError;
use linkasa_db::models::account::{Account, CreateAccount, Role};
use linkasa_db::repositories::AccountRepo;
use linkasa_db::DbPool;

use crate::auth::jwt::{generate_access_token, JwtConfig};
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};

/// Message returned for every failed sign-in, whatever the cause.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Register a new account.
///
/// The password is hashed before it is stored. Emails are not checked for
/// duplicates, so registering twice with one email creates two accounts.
pub async fn sign_up(
    pool: &DbPool,
    name: String,
    email: String,
    password: &str,
    role: Role,
) -> AppResult<Account> {
    let password_hash = hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let account = AccountRepo::create(
        pool,
        &CreateAccount {
            name,
            email,
            password_hash,
            role,
        },
    )
    .await?;

    tracing::info!(account_id = account.id, role = role.as_str(), "Account registered");
    Ok(account)
}

/// Exchange an email and password for a signed access token.
///
/// An unknown email and a wrong password fail identically with 401.
pub async fn sign_in(
    pool: &DbPool,
    jwt: &JwtConfig,
    email: &str,
    password: &str,
) -> AppResult<String> {
    let Some(account) = AccountRepo::find_by_email(pool, email).await? else {
        tracing::warn!("Sign-in rejected: unknown email");
        return Err(invalid_credentials());
    };

    let password_valid = verify_password(password, &account.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        tracing::warn!(account_id = account.id, "Sign-in rejected: wrong password");
        return Err(invalid_credentials());
    }

    let token = generate_access_token(account.id, &account.name, jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(account_id = account.id, "Access token issued");
    Ok(token)
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into()))
}
