//! Core `RequestBuilder` structures and phase scaffolding
//!
//! Contains the builder struct, the phase marker types it is parameterized
//! over, and the conversion trait that lets expectation methods take one
//! status code or many.

use std::fmt;

use hashbrown::HashMap;
use http::StatusCode;
use serde::de::DeserializeOwned;

use stagecoach_client::{Client, RequestData};

/// Decode step a typed terminal method applies to the response body.
pub(crate) type DecodeFn<T> = Box<dyn FnOnce(&str) -> serde_json::Result<T> + Send>;

/// Phase marker: nothing supplied yet; naming the operation is the only
/// legal move.
#[derive(Debug, Clone, Copy)]
pub struct Empty;

/// Phase marker: the operation label is stored; a verb and resource path
/// come next.
#[derive(Debug, Clone, Copy)]
pub struct WithOperation;

/// Phase marker: verb and resource path are stored. A base-path override
/// is still possible, and every expectation method is already available.
#[derive(Debug, Clone, Copy)]
pub struct WithMethod;

/// Phase marker: a base-path override was supplied; only the expectation
/// methods remain.
#[derive(Debug, Clone, Copy)]
pub struct WithUrl;

/// Phase marker: explicit expected status codes are recorded; the request
/// can now take a content shape or execute untyped.
#[derive(Debug, Clone, Copy)]
pub struct WithExpectedStatus;

/// Content phase state — stores actual response handling, not just a
/// marker: the decode step producing a `T` from the body, and the
/// alternate values substituted when specific statuses are observed.
pub struct WithContent<T: 'static> {
    pub(crate) decode: DecodeFn<T>,
    pub(crate) alternates: HashMap<StatusCode, T>,
}

impl WithContent<String> {
    /// Raw mode: the body is exposed as unparsed text.
    pub(crate) fn raw() -> Self {
        Self {
            decode: Box::new(|body| Ok(body.to_owned())),
            alternates: HashMap::new(),
        }
    }
}

impl<T: 'static> WithContent<T> {
    /// Typed mode: deserialize the body as `T`.
    pub(crate) fn typed() -> Self
    where
        T: DeserializeOwned,
    {
        Self {
            decode: Box::new(|body| serde_json::from_str(body)),
            alternates: HashMap::new(),
        }
    }

    /// Mapped mode: deserialize the body as `Resp`, then project the value
    /// through `getter` before it is exposed.
    pub(crate) fn mapped<Resp, F>(getter: F) -> Self
    where
        Resp: DeserializeOwned + 'static,
        F: FnOnce(Resp) -> T + Send + 'static,
    {
        Self {
            decode: Box::new(move |body| serde_json::from_str::<Resp>(body).map(getter)),
            alternates: HashMap::new(),
        }
    }
}

impl<T: 'static> fmt::Debug for WithContent<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WithContent")
            .field("alternates", &self.alternates.len())
            .finish_non_exhaustive()
    }
}

/// Staged request builder
///
/// Type parameter `S` is the current phase; each transition returns a view
/// over the **same** request description in the next phase, so earlier
/// facts are never copied or re-validated, and operations that are illegal
/// for the current phase do not compile.
pub struct RequestBuilder<S = Empty> {
    /// Client handle the finished description is executed against.
    pub(crate) client: Client,
    /// Request description being accumulated.
    pub(crate) data: RequestData,
    /// Phase state — carries real data in the content phase.
    pub(crate) state: S,
    /// Debug logging enabled flag.
    pub(crate) debug_enabled: bool,
}

impl RequestBuilder<Empty> {
    /// Start describing a new request against a shared client instance.
    #[must_use]
    pub fn new(client: &Client) -> Self {
        Self {
            client: client.clone(),
            data: RequestData::new(),
            state: Empty,
            debug_enabled: false,
        }
    }
}

impl<S> RequestBuilder<S> {
    /// Enable debug logging for this request; the terminal methods then
    /// report dispatch and resolution through the `log` facade.
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }

    /// The description accumulated so far.
    pub fn description(&self) -> &RequestData {
        &self.data
    }

    /// Move the shared description into the next phase's view.
    pub(crate) fn advance<Next>(self, state: Next) -> RequestBuilder<Next> {
        RequestBuilder {
            client: self.client,
            data: self.data,
            state,
            debug_enabled: self.debug_enabled,
        }
    }
}

impl<S> fmt::Debug for RequestBuilder<S>
where
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestBuilder")
            .field("data", &self.data)
            .field("state", &self.state)
            .field("debug_enabled", &self.debug_enabled)
            .finish_non_exhaustive()
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::WithMethod {}
    impl Sealed for super::WithUrl {}
}

/// Phases whose request line is complete: verb and resource path are set,
/// with or without a base-path override. The expectation methods hang off
/// this trait. Sealed; implemented by [`WithMethod`] and [`WithUrl`] only.
pub trait UrlComplete: sealed::Sealed {}

impl UrlComplete for WithMethod {}
impl UrlComplete for WithUrl {}

/// Conversion accepted by the expectation and alternate-binding methods:
/// one status code or any ordinary collection of them.
pub trait IntoStatusCodes {
    /// The codes, in the order they were given.
    fn into_status_codes(self) -> Vec<StatusCode>;
}

impl IntoStatusCodes for StatusCode {
    fn into_status_codes(self) -> Vec<StatusCode> {
        vec![self]
    }
}

impl<const N: usize> IntoStatusCodes for [StatusCode; N] {
    fn into_status_codes(self) -> Vec<StatusCode> {
        self.to_vec()
    }
}

impl IntoStatusCodes for &[StatusCode] {
    fn into_status_codes(self) -> Vec<StatusCode> {
        self.to_vec()
    }
}

impl IntoStatusCodes for Vec<StatusCode> {
    fn into_status_codes(self) -> Vec<StatusCode> {
        self
    }
}
