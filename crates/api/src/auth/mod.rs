//! Authentication primitives and the sign-up / sign-in flow.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- JWT access-token generation and validation.
//! - [`flow`] -- Account registration and credential exchange.

pub mod flow;
pub mod jwt;
pub mod password;
