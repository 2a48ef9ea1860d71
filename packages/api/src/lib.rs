//! # Stagecoach
//!
//! Staged request-description builder with a fluent, type-enforced phase
//! order: name the operation, pick the verb and path, optionally override
//! the base path, declare the expected statuses and response shape, bind
//! alternate results, then execute — synchronously or asynchronously —
//! against a pluggable transport.
//!
//! ```no_run
//! use stagecoach::{request, Client};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Default, Clone)]
//! struct User {
//!     id: u64,
//!     name: String,
//! }
//!
//! # fn run(client: &Client) -> stagecoach::Result<()> {
//! let user = request(client)
//!     .to("GetUser")?
//!     .get("users/42")?
//!     .expecting_content::<User>()
//!     .or_default_if_not_found()
//!     .execute()?;
//! println!("user {} is {}", user.id, user.name);
//! # Ok(())
//! # }
//! ```
//!
//! Phases are distinct types over one shared request description, so an
//! out-of-order call is a compile error, not a runtime surprise. The
//! transport behind [`Client`] is an external collaborator implementing
//! [`Transport`]; nothing in this crate opens a connection.

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

// Re-export all public API components
pub use builder::*;

// Re-export the plumbing types callers interact with
pub use stagecoach_client::{
    BoxError, Client, Customizer, Error, RequestData, Result, Transport, TransportRequest,
    TransportResponse,
};

// Re-export the HTTP vocabulary the API is spoken in
pub use http::{Method, StatusCode};

/// Begin a staged request chain against `client`.
///
/// Shorthand for [`RequestBuilder::new`].
#[must_use]
pub fn request(client: &Client) -> RequestBuilder<Empty> {
    RequestBuilder::new(client)
}
