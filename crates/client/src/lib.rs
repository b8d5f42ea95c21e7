//! Client for the LinKasa API.
//!
//! Mirrors what the browser front-end does: it signs in, keeps the issued
//! token in a local store, reads the subject out of that token without
//! verifying it, and uses it to fetch the signed-in account's profile.
//!
//! - [`api::ApiClient`] -- typed HTTP calls, one per endpoint.
//! - [`token`] -- token persistence and local claim decoding.
//! - [`session::Session`] -- login state and the logout-on-failure policy.

pub mod api;
pub mod error;
pub mod models;
pub mod session;
pub mod token;

pub use api::ApiClient;
pub use error::ClientError;
pub use session::Session;
