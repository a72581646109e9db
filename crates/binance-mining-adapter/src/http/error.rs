/*
[INPUT]:  Error sources (transport, HTTP status, body decoding, client setup)
[OUTPUT]: Structured error types collapsing to a single public kind
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Public classification of a failed call.
///
/// Every call failure maps to `InvalidResponse`; the `BinanceError` variant
/// carries the diagnostic detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    InvalidResponse,
}

/// Body could not be decoded into the expected type
#[derive(Error, Debug)]
#[error("failed to decode response body: {source}")]
pub struct DecodeError {
    #[from]
    source: serde_json::Error,
}

/// Request never produced an HTTP response
#[derive(Error, Debug)]
pub enum TransportError {
    /// reqwest failed to send or read the request
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Transport has nothing to answer with
    #[error("transport unavailable: {0}")]
    Unavailable(String),
}

/// Main error type for Binance calls
#[derive(Error, Debug)]
pub enum BinanceError {
    /// Network-level failure, no response received
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Exchange rejected or failed the request (403, 500)
    #[error("request rejected with HTTP status {status}")]
    Status { status: u16 },

    /// Response arrived without a body
    #[error("response body missing")]
    EmptyBody,

    /// Body is not the expected document
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Body is a Binance error object instead of the expected document
    #[error("API error (code {code}): {message}")]
    Api { code: i32, message: String },
}

impl BinanceError {
    /// Public error kind; always `InvalidResponse` for call failures
    pub fn kind(&self) -> ApiErrorKind {
        ApiErrorKind::InvalidResponse
    }

    /// HTTP status, when the failure came from a rejected request
    pub fn status(&self) -> Option<u16> {
        match self {
            BinanceError::Status { status } => Some(*status),
            _ => None,
        }
    }
}

/// Failure while building a client
#[derive(Error, Debug)]
pub enum ClientBuildError {
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid base URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias for Binance calls
pub type Result<T> = std::result::Result<T, BinanceError>;
