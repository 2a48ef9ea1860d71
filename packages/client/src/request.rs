//! The request description accumulated by a builder chain.
//!
//! This is the CANONICAL record of every fact about one in-flight request
//! build: pure data, no behavior beyond normalization and read access. One
//! instance is created per chain, mutated only by the phase that currently
//! holds it, and consumed by the executor.

use std::fmt;

use http::{Method, StatusCode};

use crate::transport::TransportRequest;

/// Side-effecting callback adjusting the outgoing transport request before
/// it is sent. Applied once, if present, by the executor.
pub type Customizer = Box<dyn FnOnce(&mut TransportRequest) + Send>;

/// Normalize a path fragment: strip exactly the surrounding `/` characters,
/// then prepend a single `/`. Idempotent.
pub fn normalize_path(path: &str) -> String {
    format!("/{}", path.trim_matches('/'))
}

/// Mutable record accumulating one request description.
///
/// Field values are meaningful once the builder phase responsible for them
/// has run; the staged construction order guarantees the executor never
/// observes a partially-described request.
#[derive(Default)]
pub struct RequestData {
    operation: String,
    method: Option<Method>,
    resource_path: String,
    base_path: Option<String>,
    customizer: Option<Customizer>,
    expected_statuses: Vec<StatusCode>,
}

impl RequestData {
    /// Create an empty description, ready for the first phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Human-readable label for the request.
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// The HTTP method, once the verb phase has run.
    pub fn method(&self) -> Method {
        self.method.clone().unwrap_or_default()
    }

    /// The normalized resource path (`/`-prefixed, no trailing `/`).
    pub fn resource_path(&self) -> &str {
        &self.resource_path
    }

    /// The base-path override. `None` means "use the client default";
    /// `Some("")` is the explicit empty override meaning "no base prefix".
    pub fn base_path(&self) -> Option<&str> {
        self.base_path.as_deref()
    }

    /// Status codes considered successful, in registration order.
    ///
    /// Membership is the only check that matters; literal duplicates are
    /// representable and their multiplicity is unspecified.
    pub fn expected_statuses(&self) -> &[StatusCode] {
        &self.expected_statuses
    }

    /// Whether `status` is a recognized success signal for this request.
    pub fn allows(&self, status: StatusCode) -> bool {
        self.expected_statuses.contains(&status)
    }

    /// The full request path: base override (or `default_base` when unset)
    /// followed by the resource path.
    pub fn full_path(&self, default_base: &str) -> String {
        let base = self.base_path.as_deref().unwrap_or(default_base);
        format!("{base}{}", self.resource_path)
    }

    /// Store the operation label. Set exactly once by the first phase.
    pub fn set_operation(&mut self, operation: &str) {
        self.operation = operation.to_owned();
    }

    /// Store the method together with the already-normalized resource path.
    pub fn set_method_and_path(&mut self, method: Method, resource_path: String) {
        self.method = Some(method);
        self.resource_path = resource_path;
    }

    /// Store the base-path override (already normalized, possibly empty).
    pub fn set_base_path(&mut self, base_path: String) {
        self.base_path = Some(base_path);
    }

    /// Store the request customizer, replacing any earlier one.
    pub fn set_customizer(&mut self, customizer: Customizer) {
        self.customizer = Some(customizer);
    }

    /// Append a status code to the expected set.
    pub fn push_expected(&mut self, status: StatusCode) {
        self.expected_statuses.push(status);
    }

    /// Take the customizer out for its single application.
    pub fn take_customizer(&mut self) -> Option<Customizer> {
        self.customizer.take()
    }
}

impl fmt::Debug for RequestData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestData")
            .field("operation", &self.operation)
            .field("method", &self.method)
            .field("resource_path", &self.resource_path)
            .field("base_path", &self.base_path)
            .field("customizer", &self.customizer.is_some())
            .field("expected_statuses", &self.expected_statuses)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_strips_surrounding_slashes() {
        assert_eq!(normalize_path("a/b"), "/a/b");
        assert_eq!(normalize_path("/a/b/"), "/a/b");
        assert_eq!(normalize_path("///a/b///"), "/a/b");
        assert_eq!(normalize_path("///"), "/");
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = normalize_path("/a/");
        assert_eq!(normalize_path(&once), once);
    }

    #[test]
    fn full_path_prefers_the_override() {
        let mut data = RequestData::new();
        data.set_method_and_path(Method::GET, normalize_path("users/42"));
        assert_eq!(data.full_path("/api"), "/api/users/42");

        data.set_base_path("/v2".to_owned());
        assert_eq!(data.full_path("/api"), "/v2/users/42");
    }

    #[test]
    fn empty_override_means_no_prefix() {
        let mut data = RequestData::new();
        data.set_method_and_path(Method::DELETE, normalize_path("sessions"));
        data.set_base_path(String::new());
        assert_eq!(data.full_path("/api"), "/sessions");
        assert_eq!(data.base_path(), Some(""));
    }

    #[test]
    fn expected_statuses_accumulate_and_gate_by_membership() {
        let mut data = RequestData::new();
        data.push_expected(StatusCode::OK);
        data.push_expected(StatusCode::NOT_FOUND);
        assert!(data.allows(StatusCode::OK));
        assert!(data.allows(StatusCode::NOT_FOUND));
        assert!(!data.allows(StatusCode::BAD_GATEWAY));
    }
}
