//! Error taxonomy shared by the builder and the executor.
//!
//! Every failure propagates to the original caller through `Result`; nothing
//! is caught or downgraded inside the builder or the executor, and the async
//! calling convention carries the same error values as the sync one.

use http::StatusCode;

/// A `Result` alias where the `Err` case is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error source produced by [`Transport`](crate::Transport)
/// implementations and carried inside [`Error::Transport`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors surfaced while describing or executing a request.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required builder argument was missing or empty.
    ///
    /// Raised synchronously at construction time, before anything reaches
    /// the transport.
    #[error("invalid request configuration: {reason}")]
    Configuration {
        /// What was wrong, naming the offending parameter.
        reason: String,
    },

    /// The response status was neither expected nor mapped to an alternate
    /// result. Never retried.
    #[error("\"{operation}\" answered {status}, expected one of {expected:?}")]
    UnexpectedStatus {
        /// Operation label of the failed request.
        operation: String,
        /// The status the transport observed.
        status: StatusCode,
        /// The statuses the request was built to accept.
        expected: Vec<StatusCode>,
    },

    /// The response body could not be produced as the expected shape.
    #[error("could not decode the \"{operation}\" response body")]
    Decode {
        /// Operation label of the failed request.
        operation: String,
        /// The underlying deserialization failure.
        #[source]
        source: serde_json::Error,
    },

    /// The transport collaborator itself failed before a status code and
    /// body were available.
    #[error("transport failure while executing \"{operation}\"")]
    Transport {
        /// Operation label of the failed request.
        operation: String,
        /// The underlying transport failure.
        #[source]
        source: BoxError,
    },
}

impl Error {
    /// Build a [`Error::Configuration`] from a reason string.
    pub fn configuration(reason: impl Into<String>) -> Self {
        Error::Configuration {
            reason: reason.into(),
        }
    }
}
