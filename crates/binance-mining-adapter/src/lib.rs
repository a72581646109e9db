/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Binance mining adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{ApiCredentials, CredentialsError, HmacSigner};

// Re-export commonly used types from http
pub use http::{
    ApiErrorKind,
    BinanceClient,
    BinanceError,
    ClientBuildError,
    ClientConfig,
    DecodeError,
    HttpTransport,
    MockTransport,
    PayloadSigner,
    Result,
    SecurityTier,
    Transport,
    TransportError,
    TransportResponse,
};

// Re-export all types
pub use types::*;
