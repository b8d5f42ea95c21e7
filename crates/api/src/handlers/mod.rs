//! Request handlers, one module per resource.
//!
//! Handlers delegate to the repositories in `linkasa_db` (or to
//! [`crate::auth::flow`]) and map errors via [`crate::error::AppError`].

pub mod account;
pub mod assignment;
pub mod auth;
pub mod course;
pub mod health;
