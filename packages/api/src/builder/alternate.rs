//! Alternate-result binding
//!
//! `or(value)` detours out of the content phase into a short-lived binder;
//! `if_status` (or its sugars) registers the value for one or more status
//! codes and funnels back to the same content phase. Binding a code both
//! whitelists it as a success signal and tells the terminal methods to
//! substitute the value instead of touching the body.

use http::StatusCode;

use stagecoach_client::{guard, Result};

use crate::builder::core::{IntoStatusCodes, RequestBuilder, WithContent};

impl<T: 'static> RequestBuilder<WithContent<T>> {
    /// Pre-register `alternate` as the result for statuses named by the
    /// returned binder. Does not itself change the description.
    #[must_use]
    pub fn or(self, alternate: T) -> AlternateResult<T> {
        AlternateResult {
            request: self,
            value: alternate,
        }
    }

    /// Shorthand: a 404 answer yields `T::default()` instead of an error.
    #[must_use]
    pub fn or_default_if_not_found(self) -> Self
    where
        T: Default + Clone,
    {
        self.or(T::default()).if_not_found()
    }
}

/// Short-lived side branch of the content phase, holding the substitute
/// value until the statuses it answers for are named.
#[derive(Debug)]
pub struct AlternateResult<T: 'static> {
    request: RequestBuilder<WithContent<T>>,
    value: T,
}

impl<T: 'static> AlternateResult<T> {
    /// Substitute the value when any of `codes` is observed. Each code is
    /// appended to the expected set (the alternate is *also* a recognized
    /// success signal) and mapped to the value; re-binding an
    /// already-mapped code overwrites it, last write wins. An empty
    /// collection is a configuration error.
    pub fn if_status(
        self,
        codes: impl IntoStatusCodes,
    ) -> Result<RequestBuilder<WithContent<T>>>
    where
        T: Clone,
    {
        let codes = codes.into_status_codes();
        guard::not_empty_codes(&codes, "alternate status codes")?;

        Ok(self.bind_all(codes))
    }

    /// Shorthand for binding 404 Not Found.
    #[must_use]
    pub fn if_not_found(self) -> RequestBuilder<WithContent<T>>
    where
        T: Clone,
    {
        self.bind_all(vec![StatusCode::NOT_FOUND])
    }

    /// Shorthand for binding 204 No Content.
    #[must_use]
    pub fn if_no_content(self) -> RequestBuilder<WithContent<T>>
    where
        T: Clone,
    {
        self.bind_all(vec![StatusCode::NO_CONTENT])
    }

    fn bind_all(mut self, codes: Vec<StatusCode>) -> RequestBuilder<WithContent<T>>
    where
        T: Clone,
    {
        for code in codes {
            self.request.data.push_expected(code);
            self.request.state.alternates.insert(code, self.value.clone());
        }
        self.request
    }
}
