//! The transport contract the executor drives.
//!
//! A [`Transport`] owns everything wire-related (connections, TLS, codecs,
//! timeouts) and is handed one [`TransportRequest`] per execution. It
//! answers with a status code and body text, or fails with whatever error
//! its stack produces; the executor wraps that source into
//! [`Error::Transport`](crate::Error::Transport).

use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
use serde::Serialize;

use crate::error::BoxError;

/// The outgoing request as the transport sees it.
///
/// This is also the surface a request customizer adjusts: headers and body
/// may be edited freely before dispatch; method and path come from the
/// request description.
#[derive(Debug)]
pub struct TransportRequest {
    /// HTTP method of the request.
    pub method: Method,
    /// Full request path: base path plus resource path, both normalized.
    pub path: String,
    /// Request headers.
    pub headers: HeaderMap,
    /// Optional request body.
    pub body: Option<Bytes>,
}

impl TransportRequest {
    /// Assemble a bare request for `method` against `path`.
    pub fn new(method: Method, path: String) -> Self {
        Self {
            method,
            path,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Insert a header, replacing any previous value under the same name.
    pub fn header(&mut self, name: HeaderName, value: HeaderValue) -> &mut Self {
        self.headers.insert(name, value);
        self
    }

    /// Set the raw request body.
    pub fn body(&mut self, body: impl Into<Bytes>) -> &mut Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize `value` as the JSON request body and tag the content type.
    pub fn json_body<B: Serialize>(&mut self, value: &B) -> serde_json::Result<&mut Self> {
        let encoded = serde_json::to_vec(value)?;
        self.headers.insert(
            http::header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        self.body = Some(Bytes::from(encoded));
        Ok(self)
    }
}

/// What the transport answered: a status code plus the body as text.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// The observed status code.
    pub status: StatusCode,
    /// The unparsed response body.
    pub body: String,
}

impl TransportResponse {
    /// Build a response from a status and body text.
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// External collaborator performing the actual call.
///
/// Both calling conventions share one contract; only the suspension differs.
/// Implementations must be shareable across chains (`Send + Sync`) — the
/// per-request state all lives in the request description, never here.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform the call, blocking until the response is available.
    fn send(&self, request: TransportRequest) -> Result<TransportResponse, BoxError>;

    /// Perform the call without blocking; the single suspension point of an
    /// asynchronous execution.
    async fn send_async(&self, request: TransportRequest) -> Result<TransportResponse, BoxError>;
}
