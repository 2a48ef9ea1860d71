//! Argument guards applied at every phase transition that accepts
//! caller-supplied input.

use http::StatusCode;

use crate::error::{Error, Result};

/// Rejects an empty string argument with a configuration error naming the
/// offending parameter.
pub fn not_empty(value: &str, name: &'static str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::configuration(format!("{name} must not be empty")));
    }
    Ok(())
}

/// Rejects an empty status-code collection.
pub fn not_empty_codes(codes: &[StatusCode], name: &'static str) -> Result<()> {
    if codes.is_empty() {
        return Err(Error::configuration(format!(
            "{name} must contain at least one status code"
        )));
    }
    Ok(())
}
