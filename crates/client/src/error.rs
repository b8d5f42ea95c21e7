/// Errors surfaced by the client library.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, body decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// The server's `error` message, or the raw body if it had none.
        message: String,
    },

    /// The stored token could not be decoded.
    #[error("Malformed token: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Reading or writing the token store failed.
    #[error("Token storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// No token is stored.
    #[error("Not logged in")]
    NotAuthenticated,

    /// The profile could not be loaded with the stored token, which has
    /// been discarded.
    #[error("Session expired, please log in again: {0}")]
    SessionExpired(String),
}
