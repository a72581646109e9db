/*
[INPUT]:  Credentials, client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod mining;
pub mod public;
pub mod signature;
pub mod transport;

pub use error::{ApiErrorKind, BinanceError, ClientBuildError, DecodeError, Result, TransportError};
pub use signature::{PayloadSigner, SecurityTier};
pub use transport::{HttpTransport, MockTransport, RecordedRequest, Transport, TransportResponse};

pub use client::{API_KEY_HEADER, BASE_URL, BinanceClient, ClientConfig, decode};
