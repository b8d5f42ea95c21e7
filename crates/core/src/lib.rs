//! Domain primitives shared by the storage layer, the HTTP API and the client.

pub mod error;
pub mod types;
