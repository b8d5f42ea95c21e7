//! Sign-in state for a single user of the client.

use crate::api::ApiClient;
use crate::error::ClientError;
use crate::models::{Account, Registration};
use crate::token::{decode_claims, TokenClaims, TokenStore, TOKEN_KEY};

/// Couples an [`ApiClient`] with the store holding the access token.
///
/// "Logged in" means a token is stored; nothing checks whether it is still
/// valid until the profile is fetched.
pub struct Session<S> {
    api: ApiClient,
    store: S,
}

impl<S: TokenStore> Session<S> {
    pub fn new(api: ApiClient, store: S) -> Self {
        Self { api, store }
    }

    /// Whether a token is stored.
    pub fn is_authenticated(&self) -> Result<bool, ClientError> {
        Ok(self.store.get(TOKEN_KEY)?.is_some())
    }

    /// The API client, but only while a token is stored.
    pub fn guarded(&self) -> Result<&ApiClient, ClientError> {
        if self.is_authenticated()? {
            Ok(&self.api)
        } else {
            Err(ClientError::NotAuthenticated)
        }
    }

    /// Sign in and store the issued token.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ClientError> {
        let token = self.api.login(email, password).await?;
        self.store.set(TOKEN_KEY, &token)?;
        tracing::info!("Logged in");
        Ok(())
    }

    pub async fn register(&self, registration: &Registration) -> Result<Account, ClientError> {
        self.api.register(registration).await
    }

    pub fn logout(&self) -> Result<(), ClientError> {
        self.store.remove(TOKEN_KEY)
    }

    /// The stored bearer token, for the account endpoints.
    pub fn token(&self) -> Result<String, ClientError> {
        self.store.get(TOKEN_KEY)?.ok_or(ClientError::NotAuthenticated)
    }

    /// Claims of the stored token, decoded locally.
    pub fn claims(&self) -> Result<TokenClaims, ClientError> {
        decode_claims(&self.token()?)
    }

    /// Load the signed-in account.
    ///
    /// Any failure, including a network error, discards the stored token and
    /// returns [`ClientError::SessionExpired`].
    pub async fn profile(&self) -> Result<Account, ClientError> {
        let token = self.token()?;

        match self.fetch_profile(&token).await {
            Ok(account) => Ok(account),
            Err(e) => {
                tracing::warn!(error = %e, "Profile fetch failed, discarding stored token");
                self.store.remove(TOKEN_KEY)?;
                Err(ClientError::SessionExpired(e.to_string()))
            }
        }
    }

    async fn fetch_profile(&self, token: &str) -> Result<Account, ClientError> {
        let claims = decode_claims(token)?;
        self.api.account(claims.sub, token).await
    }
}
