//! # Stagecoach client internals
//!
//! Request description, executor and transport contract backing the
//! `stagecoach` fluent API. The public crate re-exports everything callers
//! need from here; this package carries the plumbing:
//!
//! - **Request description** — [`RequestData`], the single mutable record
//!   one builder chain accumulates
//! - **Executor** — [`Client`], which assembles the outgoing request,
//!   applies the customizer, drives the [`Transport`] and gates the
//!   answered status against the expected set
//! - **Transport contract** — [`Transport`], [`TransportRequest`],
//!   [`TransportResponse`]: the boundary behind which connections, TLS and
//!   codecs live
//! - **Error taxonomy** — [`Error`] with configuration, unexpected-status,
//!   decode and transport variants, plus the crate [`Result`] alias
//! - **Guards** — [`guard`], the empty-argument checks applied at phase
//!   transitions

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod client;
pub mod error;
pub mod guard;
pub mod request;
pub mod transport;

pub use client::Client;
pub use error::{BoxError, Error, Result};
pub use request::{normalize_path, Customizer, RequestData};
pub use transport::{Transport, TransportRequest, TransportResponse};
