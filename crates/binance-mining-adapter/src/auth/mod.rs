/*
[INPUT]:  API key pair supplied by the caller
[OUTPUT]: Redacted credentials and HMAC-SHA256 signatures
[POS]:    Auth layer - key material and signing primitive
[UPDATE]: When credential handling or the signing algorithm changes
*/

pub mod credentials;
pub mod signer;

pub use credentials::{ApiCredentials, CredentialsError};
pub use signer::HmacSigner;
