//! Phase transitions
//!
//! Each method here is legal in exactly one phase (or one sealed group of
//! phases) and advances the shared description to the next one. Arguments
//! are validated on entry; nothing is re-checked later.

use http::{Method, StatusCode};
use serde::de::DeserializeOwned;

use stagecoach_client::{guard, normalize_path, Result, TransportRequest};

use crate::builder::core::{
    Empty, IntoStatusCodes, RequestBuilder, UrlComplete, WithContent, WithExpectedStatus,
    WithMethod, WithOperation, WithUrl,
};

impl RequestBuilder<Empty> {
    /// Name the operation this request performs. The label shows up in
    /// logs and in every error raised on the request's behalf.
    ///
    /// Fails with [`Error::Configuration`](stagecoach_client::Error) when
    /// `operation` is empty.
    pub fn to(mut self, operation: &str) -> Result<RequestBuilder<WithOperation>> {
        guard::not_empty(operation, "operation")?;

        self.data.set_operation(operation);
        Ok(self.advance(WithOperation))
    }
}

impl RequestBuilder<WithOperation> {
    /// Describe a GET of `resource_path`.
    pub fn get(self, resource_path: &str) -> Result<RequestBuilder<WithMethod>> {
        self.method_and_path(Method::GET, resource_path)
    }

    /// Describe a POST to `resource_path`.
    pub fn post(self, resource_path: &str) -> Result<RequestBuilder<WithMethod>> {
        self.method_and_path(Method::POST, resource_path)
    }

    /// Describe a PUT to `resource_path`.
    pub fn put(self, resource_path: &str) -> Result<RequestBuilder<WithMethod>> {
        self.method_and_path(Method::PUT, resource_path)
    }

    /// Describe a DELETE of `resource_path`.
    pub fn delete(self, resource_path: &str) -> Result<RequestBuilder<WithMethod>> {
        self.method_and_path(Method::DELETE, resource_path)
    }

    fn method_and_path(
        mut self,
        method: Method,
        resource_path: &str,
    ) -> Result<RequestBuilder<WithMethod>> {
        guard::not_empty(resource_path, "resource_path")?;

        self.data
            .set_method_and_path(method, normalize_path(resource_path));
        Ok(self.advance(WithMethod))
    }
}

impl RequestBuilder<WithMethod> {
    /// Attach a callback that adjusts the outgoing transport request
    /// (headers, body) right before it is sent. Applied once by the
    /// executor; a later call replaces an earlier one.
    #[must_use]
    pub fn customize<F>(mut self, customizer: F) -> Self
    where
        F: FnOnce(&mut TransportRequest) + Send + 'static,
    {
        self.data.set_customizer(Box::new(customizer));
        self
    }

    /// Override the client's default base path for this request only.
    ///
    /// The input must be non-empty; input that trims down to nothing
    /// stores the explicit empty override ("root, no prefix"), which is
    /// distinct from not calling `using_base` at all.
    pub fn using_base(mut self, base_path: &str) -> Result<RequestBuilder<WithUrl>> {
        guard::not_empty(base_path, "base_path")?;

        let trimmed = base_path.trim();
        let base = if trimmed.is_empty() {
            String::new()
        } else {
            normalize_path(trimmed)
        };
        self.data.set_base_path(base);
        Ok(self.advance(WithUrl))
    }
}

impl<S: UrlComplete> RequestBuilder<S> {
    /// Declare the status codes treated as success, for requests whose
    /// body carries no meaning. Accepts one code or a collection; an empty
    /// collection is a configuration error.
    pub fn expecting(
        mut self,
        codes: impl IntoStatusCodes,
    ) -> Result<RequestBuilder<WithExpectedStatus>> {
        let codes = codes.into_status_codes();
        guard::not_empty_codes(&codes, "expected status codes")?;

        for code in codes {
            self.data.push_expected(code);
        }
        Ok(self.advance(WithExpectedStatus))
    }

    /// Expect a JSON body deserializable as `T` on 200 OK.
    ///
    /// Skipping the explicit status phase makes OK the success signal;
    /// alternates registered later widen the accepted set.
    #[must_use]
    pub fn expecting_content<T>(mut self) -> RequestBuilder<WithContent<T>>
    where
        T: DeserializeOwned + 'static,
    {
        self.data.push_expected(StatusCode::OK);
        self.advance(WithContent::typed())
    }

    /// Expect a JSON body deserializable as `Resp` on 200 OK, projected
    /// through `getter` before the result is exposed.
    #[must_use]
    pub fn expecting_mapped<Resp, T, F>(mut self, getter: F) -> RequestBuilder<WithContent<T>>
    where
        Resp: DeserializeOwned + 'static,
        T: 'static,
        F: FnOnce(Resp) -> T + Send + 'static,
    {
        self.data.push_expected(StatusCode::OK);
        self.advance(WithContent::mapped(getter))
    }
}

impl RequestBuilder<WithExpectedStatus> {
    /// Expose the response body as unparsed text.
    #[must_use]
    pub fn with_raw_content(self) -> RequestBuilder<WithContent<String>> {
        self.advance(WithContent::raw())
    }

    /// Expect a JSON body deserializable as `T` on the statuses already
    /// declared.
    #[must_use]
    pub fn with_content<T>(self) -> RequestBuilder<WithContent<T>>
    where
        T: DeserializeOwned + 'static,
    {
        self.advance(WithContent::typed())
    }

    /// Expect a JSON body deserializable as `Resp` on the statuses already
    /// declared, projected through `getter`.
    #[must_use]
    pub fn with_content_mapped<Resp, T, F>(self, getter: F) -> RequestBuilder<WithContent<T>>
    where
        Resp: DeserializeOwned + 'static,
        T: 'static,
        F: FnOnce(Resp) -> T + Send + 'static,
    {
        self.advance(WithContent::mapped(getter))
    }
}
