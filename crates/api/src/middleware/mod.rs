//! Request extractors shared by handlers.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated account from a JWT Bearer token.
//! - [`json::ValidatedJson`] -- Deserializes a JSON body and runs its `validator` rules.
//! - [`path::ApiPath`] -- Parses path parameters, rejecting with a JSON error body.

pub mod auth;
pub mod json;
pub mod path;
