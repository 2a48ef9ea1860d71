//! Staged builder modules
//!
//! The fluent API for describing and executing HTTP requests: phase
//! scaffolding, transitions, alternate-result binding and the terminal
//! execution methods.

pub mod alternate;
pub mod core;
pub mod methods;
pub mod phases;

pub use alternate::AlternateResult;
pub use core::*;
