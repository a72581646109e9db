/*
[INPUT]:  API key and secret key strings
[OUTPUT]: Immutable credentials with a redacted secret
[POS]:    Auth layer - key material held by the client
[UPDATE]: When credential validation or storage changes
*/

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Rejected credential material
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("API key must not be empty")]
    EmptyApiKey,

    #[error("secret key must not be empty")]
    EmptySecretKey,
}

/// Binance API key pair.
///
/// The API key travels in the `X-MBX-APIKEY` header of every request. The
/// secret key is only ever used as HMAC key material and is never sent or
/// printed.
pub struct ApiCredentials {
    api_key: String,
    secret_key: SecretString,
}

impl ApiCredentials {
    /// Create credentials, rejecting empty key material
    pub fn new(
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Result<Self, CredentialsError> {
        let api_key = api_key.into();
        let secret_key = secret_key.into();

        if api_key.is_empty() {
            return Err(CredentialsError::EmptyApiKey);
        }
        if secret_key.is_empty() {
            return Err(CredentialsError::EmptySecretKey);
        }

        Ok(Self {
            api_key,
            secret_key: SecretString::from(secret_key),
        })
    }

    /// API key, safe to log
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Secret key for signing only
    pub(crate) fn expose_secret(&self) -> &str {
        self.secret_key.expose_secret()
    }
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_key", &self.api_key)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}
