/*
[INPUT]:  Fully built request URL and headers
[OUTPUT]: HTTP status and raw body, or a transport failure
[POS]:    HTTP layer - pluggable transport behind the client
[UPDATE]: When adding transports or changing request plumbing
*/

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use url::Url;

use crate::http::client::ClientConfig;
use crate::http::error::{ClientBuildError, TransportError};

/// Raw HTTP outcome handed to the decoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Option<Vec<u8>>,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: Some(body.into()),
        }
    }

    /// Response without a body
    pub fn empty(status: u16) -> Self {
        Self { status, body: None }
    }
}

/// Sends GET requests on behalf of the client.
///
/// Timeouts, pooling and TLS belong to the implementation; the client only
/// sees a status and a body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(
        &self,
        url: &Url,
        headers: &[(&'static str, String)],
    ) -> Result<TransportResponse, TransportError>;
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http_client: Client,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientBuildError> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self { http_client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(
        &self,
        url: &Url,
        headers: &[(&'static str, String)],
    ) -> Result<TransportResponse, TransportError> {
        let mut header_map = HeaderMap::with_capacity(headers.len());
        for (name, value) in headers {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|err| {
                TransportError::Unavailable(format!("invalid header name {name}: {err}"))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|err| {
                TransportError::Unavailable(format!("invalid value for header {name}: {err}"))
            })?;
            header_map.insert(header_name, header_value);
        }

        let response = self
            .http_client
            .get(url.clone())
            .headers(header_map)
            .send()
            .await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;

        let body = if bytes.is_empty() {
            None
        } else {
            Some(bytes.to_vec())
        };

        Ok(TransportResponse { status, body })
    }
}

/// Request seen by `MockTransport`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: Url,
    pub headers: Vec<(&'static str, String)>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Decoded query parameters in wire order
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.url
            .query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect()
    }
}

type QueuedReply = Result<TransportResponse, String>;

/// Canned transport for tests and offline use.
///
/// Replies are served in the order they were queued; every request is
/// recorded.
#[derive(Debug, Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<QueuedReply>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an HTTP response
    pub fn push_response(&self, response: TransportResponse) -> &Self {
        self.lock_replies().push_back(Ok(response));
        self
    }

    /// Queue a 200 response with a JSON body
    pub fn push_json(&self, body: &str) -> &Self {
        self.push_response(TransportResponse::new(200, body))
    }

    /// Queue a transport failure
    pub fn push_failure(&self, message: impl Into<String>) -> &Self {
        self.lock_replies().push_back(Err(message.into()));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn lock_replies(&self) -> MutexGuard<'_, VecDeque<QueuedReply>> {
        self.replies
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(
        &self,
        url: &Url,
        headers: &[(&'static str, String)],
    ) -> Result<TransportResponse, TransportError> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(RecordedRequest {
                url: url.clone(),
                headers: headers.to_vec(),
            });

        match self.lock_replies().pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(TransportError::Unavailable(message)),
            None => Err(TransportError::Unavailable(
                "no response queued".to_string(),
            )),
        }
    }
}
