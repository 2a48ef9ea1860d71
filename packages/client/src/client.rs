//! The executor: a cheap-to-clone client handle that drives the transport.
//!
//! `Client` owns the default base path and the shared [`Transport`]; each
//! dispatch consumes one completed request description, applies its
//! customizer, performs the call and gates the answered status against the
//! expected set. Resolution of the typed result happens in the builder's
//! terminal methods, which hold the statically-typed decode state.

use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::request::{normalize_path, RequestData};
use crate::transport::{Transport, TransportRequest, TransportResponse};

/// Handle pairing a [`Transport`] with the client-level configuration the
/// core needs: the default base path applied when a chain sets no override.
///
/// Cloning is cheap (the transport is shared); concurrent requests each use
/// their own chain against the same client.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
    base_path: String,
}

impl Client {
    /// Create a client with no default base prefix.
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Arc::new(transport),
            base_path: String::new(),
        }
    }

    /// Set the default base path, normalized like any other path fragment.
    #[must_use]
    pub fn with_base_path(mut self, base_path: &str) -> Self {
        let trimmed = base_path.trim();
        self.base_path = if trimmed.is_empty() {
            String::new()
        } else {
            normalize_path(trimmed)
        };
        self
    }

    /// The default base path (empty means "no prefix").
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Execute a completed description, blocking until the transport
    /// answers. Returns the response once its status passed the gate.
    pub fn dispatch(&self, mut data: RequestData) -> Result<TransportResponse> {
        let request = self.assemble(&mut data);
        tracing::debug!(
            operation = data.operation(),
            method = %request.method,
            path = %request.path,
            "dispatching request"
        );
        let response = self
            .transport
            .send(request)
            .map_err(|source| Error::Transport {
                operation: data.operation().to_owned(),
                source,
            })?;
        gate_status(&data, response)
    }

    /// Execute a completed description without blocking. Same contract as
    /// [`Client::dispatch`]; the transport call is the only suspension.
    pub async fn dispatch_async(&self, mut data: RequestData) -> Result<TransportResponse> {
        let request = self.assemble(&mut data);
        tracing::debug!(
            operation = data.operation(),
            method = %request.method,
            path = %request.path,
            "dispatching request"
        );
        let response = self
            .transport
            .send_async(request)
            .await
            .map_err(|source| Error::Transport {
                operation: data.operation().to_owned(),
                source,
            })?;
        gate_status(&data, response)
    }

    /// Build the outgoing request and apply the customizer once, if present.
    fn assemble(&self, data: &mut RequestData) -> TransportRequest {
        let mut request = TransportRequest::new(data.method(), data.full_path(&self.base_path));
        if let Some(customizer) = data.take_customizer() {
            customizer(&mut request);
        }
        request
    }
}

fn gate_status(data: &RequestData, response: TransportResponse) -> Result<TransportResponse> {
    if data.allows(response.status) {
        return Ok(response);
    }
    tracing::warn!(
        operation = data.operation(),
        status = %response.status,
        "response status not in the expected set"
    );
    Err(Error::UnexpectedStatus {
        operation: data.operation().to_owned(),
        status: response.status,
        expected: data.expected_statuses().to_vec(),
    })
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_path", &self.base_path)
            .finish_non_exhaustive()
    }
}
