/*
[INPUT]:  Credentials, client configuration, transport
[OUTPUT]: Signed GET calls decoded into typed results
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing call classification
*/

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::auth::ApiCredentials;
use crate::http::error::{BinanceError, ClientBuildError, DecodeError, Result, TransportError};
use crate::http::signature::{PayloadSigner, SecurityTier};
use crate::http::transport::{HttpTransport, Transport};
use crate::types::{ApiErrorBody, QueryParams};

/// Production REST endpoint
pub const BASE_URL: &str = "https://api.binance.com";

/// Header carrying the API key on every request
pub const API_KEY_HEADER: &str = "X-MBX-APIKEY";

const BODY_PREVIEW_MAX_BYTES: usize = 256;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Main HTTP client for the Binance REST API.
///
/// Holds only immutable state, so calls can run concurrently from shared
/// references.
pub struct BinanceClient {
    transport: Arc<dyn Transport>,
    base_url: Url,
    credentials: ApiCredentials,
}

impl BinanceClient {
    /// Create a client for the production endpoint with default configuration
    pub fn new(credentials: ApiCredentials) -> std::result::Result<Self, ClientBuildError> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a client for the production endpoint with custom configuration
    pub fn with_config(
        credentials: ApiCredentials,
        config: ClientConfig,
    ) -> std::result::Result<Self, ClientBuildError> {
        Self::with_config_and_base_url(credentials, config, BASE_URL)
    }

    /// Create a client against another base URL (mirrors, mock servers)
    pub fn with_config_and_base_url(
        credentials: ApiCredentials,
        config: ClientConfig,
        base_url: &str,
    ) -> std::result::Result<Self, ClientBuildError> {
        let transport = HttpTransport::new(&config)?;
        Self::with_transport(credentials, base_url, Arc::new(transport))
    }

    /// Create a client on top of a custom transport
    pub fn with_transport(
        credentials: ApiCredentials,
        base_url: &str,
        transport: Arc<dyn Transport>,
    ) -> std::result::Result<Self, ClientBuildError> {
        Ok(Self {
            transport,
            base_url: Url::parse(base_url.trim_end_matches('/'))?,
            credentials,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Tier for USER_DATA endpoints, signed with the held secret
    pub(crate) fn user_data_tier(&self) -> SecurityTier<'_> {
        SecurityTier::UserData(self.credentials.expose_secret())
    }

    /// Build the full request URL for `path` and an already signed payload
    fn request_url(&self, path: &str, payload: &str) -> std::result::Result<Url, url::ParseError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        if payload.is_empty() {
            Url::parse(&format!("{base}{path}"))
        } else {
            Url::parse(&format!("{base}{path}?{payload}"))
        }
    }

    /// Sign, send and decode a GET call
    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &QueryParams,
        tier: SecurityTier<'_>,
    ) -> Result<T> {
        let payload = PayloadSigner::build(&params.to_query_string(), &tier);
        let url = self.request_url(path, &payload).map_err(|err| {
            BinanceError::Transport(TransportError::Unavailable(format!(
                "invalid request URL: {err}"
            )))
        })?;
        let headers = [(API_KEY_HEADER, self.credentials.api_key().to_string())];

        debug!(path, tier = tier.name(), "dispatching request");

        let response = self.transport.get(&url, &headers).await.map_err(|err| {
            warn!(path, error = %err, "transport failure");
            BinanceError::from(err)
        })?;

        if matches!(response.status, 403 | 500) {
            warn!(path, status = response.status, "request rejected");
            return Err(BinanceError::Status {
                status: response.status,
            });
        }

        let Some(body) = response.body else {
            warn!(path, status = response.status, "response body missing");
            return Err(BinanceError::EmptyBody);
        };

        decode::<T>(&body).map_err(|err| {
            warn!(
                path,
                status = response.status,
                error = %err,
                body = %body_preview(&body),
                "failed to decode response"
            );
            match serde_json::from_slice::<ApiErrorBody>(&body) {
                Ok(api_error) if api_error.code < 0 => BinanceError::Api {
                    code: api_error.code,
                    message: api_error.msg,
                },
                _ => BinanceError::Decode(err),
            }
        })
    }
}

impl std::fmt::Debug for BinanceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinanceClient")
            .field("base_url", &self.base_url.as_str())
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

/// Decode a response body into `T`
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> std::result::Result<T, DecodeError> {
    Ok(serde_json::from_slice(bytes)?)
}

fn body_preview(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    if text.len() <= BODY_PREVIEW_MAX_BYTES {
        return text.into_owned();
    }

    let mut end = BODY_PREVIEW_MAX_BYTES;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::HmacSigner;
    use crate::http::error::ApiErrorKind;
    use crate::http::transport::{MockTransport, TransportResponse};
    use crate::types::SymbolPriceTicker;
    use rstest::rstest;

    fn client_with(transport: Arc<MockTransport>) -> BinanceClient {
        let credentials = ApiCredentials::new("K", "S").expect("credentials");
        BinanceClient::with_transport(credentials, BASE_URL, transport).expect("client init")
    }

    fn ticker_params() -> QueryParams {
        [("symbol", "BTCUSDT")].into_iter().collect()
    }

    #[tokio::test]
    async fn test_call_decodes_success() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(r#"{"symbol":"BTCUSDT","price":"50000.12"}"#);
        let client = client_with(transport.clone());

        let ticker: SymbolPriceTicker = client
            .call("/api/v3/ticker/price", &ticker_params(), SecurityTier::None)
            .await
            .expect("ticker");

        assert_eq!(ticker.price, 50000.12);
        let requests = transport.requests();
        assert_eq!(
            requests[0].url.as_str(),
            "https://api.binance.com/api/v3/ticker/price?symbol=BTCUSDT"
        );
    }

    #[tokio::test]
    async fn test_api_key_header_sent_for_every_tier() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json("{}").push_json("{}").push_json("{}");
        let client = client_with(transport.clone());
        let params = QueryParams::new();

        for tier in [
            SecurityTier::None,
            SecurityTier::MarketData,
            client.user_data_tier(),
        ] {
            let _: serde_json::Value = client.call("/api/v3/ping", &params, tier).await.expect("call");
        }

        for request in transport.requests() {
            assert_eq!(request.header(API_KEY_HEADER), Some("K"));
        }
    }

    #[tokio::test]
    async fn test_signed_call_signs_transmitted_query() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(r#"{"code":0,"msg":"","data":{"workerDatas":[]}}"#);
        let client = client_with(transport.clone());
        let params: QueryParams = [("algo", "ethash"), ("userName", "trocopasso")]
            .into_iter()
            .collect();

        let _: serde_json::Value = client
            .call("/sapi/v1/mining/worker/list", &params, client.user_data_tier())
            .await
            .expect("call");

        let request = &transport.requests()[0];
        let query = request.url.query().expect("query");
        let (signed_base, signature) = query.rsplit_once("&signature=").expect("signature");
        assert!(signed_base.starts_with("algo=ethash&userName=trocopasso&timestamp="));
        assert_eq!(signature, HmacSigner::sign("S", signed_base));
    }

    #[rstest]
    #[case(403)]
    #[case(500)]
    #[tokio::test]
    async fn test_rejected_status_is_invalid_response(#[case] status: u16) {
        let transport = Arc::new(MockTransport::new());
        transport.push_response(TransportResponse::new(
            status,
            r#"{"symbol":"BTCUSDT","price":"1.0"}"#,
        ));
        let client = client_with(transport);

        let err = client
            .call::<SymbolPriceTicker>("/api/v3/ticker/price", &ticker_params(), SecurityTier::None)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ApiErrorKind::InvalidResponse);
        assert_eq!(err.status(), Some(status));
    }

    #[tokio::test]
    async fn test_transport_failure_is_invalid_response() {
        let transport = Arc::new(MockTransport::new());
        transport.push_failure("connection refused");
        let client = client_with(transport);

        let err = client
            .call::<SymbolPriceTicker>("/api/v3/ticker/price", &ticker_params(), SecurityTier::None)
            .await
            .unwrap_err();

        assert!(matches!(err, BinanceError::Transport(_)));
        assert_eq!(err.kind(), ApiErrorKind::InvalidResponse);
    }

    #[tokio::test]
    async fn test_missing_body_is_invalid_response() {
        let transport = Arc::new(MockTransport::new());
        transport.push_response(TransportResponse::empty(200));
        let client = client_with(transport);

        let err = client
            .call::<SymbolPriceTicker>("/api/v3/ticker/price", &ticker_params(), SecurityTier::None)
            .await
            .unwrap_err();

        assert!(matches!(err, BinanceError::EmptyBody));
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json("<html>gateway</html>");
        let client = client_with(transport);

        let err = client
            .call::<SymbolPriceTicker>("/api/v3/ticker/price", &ticker_params(), SecurityTier::None)
            .await
            .unwrap_err();

        assert!(matches!(err, BinanceError::Decode(_)));
    }

    #[tokio::test]
    async fn test_binance_error_body_is_reported() {
        let transport = Arc::new(MockTransport::new());
        transport.push_response(TransportResponse::new(
            400,
            r#"{"code":-1121,"msg":"Invalid symbol."}"#,
        ));
        let client = client_with(transport);

        let err = client
            .call::<SymbolPriceTicker>("/api/v3/ticker/price", &ticker_params(), SecurityTier::None)
            .await
            .unwrap_err();

        match err {
            BinanceError::Api { code, message } => {
                assert_eq!(code, -1121);
                assert_eq!(message, "Invalid symbol.");
            }
            other => panic!("expected Api error variant, got {other:?}"),
        }
    }

    #[test]
    fn test_body_preview_truncates_on_char_boundary() {
        let body = "é".repeat(200);
        let preview = body_preview(body.as_bytes());
        assert!(preview.ends_with("..."));
        assert!(preview.len() <= BODY_PREVIEW_MAX_BYTES + 3);
    }

    #[test]
    fn test_debug_hides_secret() {
        let client = client_with(Arc::new(MockTransport::new()));
        let debug_str = format!("{client:?}");
        assert!(debug_str.contains("[REDACTED]"));
        assert!(!debug_str.contains("\"S\""));
    }
}
