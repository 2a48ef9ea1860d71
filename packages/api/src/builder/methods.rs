//! Terminal methods
//!
//! `execute` / `execute_async` consume the builder, hand the finished
//! description to the client and resolve the outcome: a registered
//! alternate for the answered status wins, otherwise the captured decode
//! step runs against the body. Both calling conventions share the exact
//! same resolution; only the suspension differs.

use stagecoach_client::{Error, Result, TransportResponse};

use crate::builder::core::{RequestBuilder, WithContent, WithExpectedStatus};

impl RequestBuilder<WithExpectedStatus> {
    /// Execute a request whose body carries no meaning, blocking until the
    /// transport answers. The status gate still applies; the body is
    /// discarded.
    pub fn execute(self) -> Result<()> {
        let RequestBuilder {
            client,
            data,
            debug_enabled,
            ..
        } = self;
        if debug_enabled {
            log::debug!(
                "{}: {} {}",
                data.operation(),
                data.method(),
                data.resource_path()
            );
        }
        client.dispatch(data)?;
        Ok(())
    }

    /// Non-blocking form of [`execute`](Self::execute); same contract.
    pub async fn execute_async(self) -> Result<()> {
        let RequestBuilder {
            client,
            data,
            debug_enabled,
            ..
        } = self;
        if debug_enabled {
            log::debug!(
                "{}: {} {}",
                data.operation(),
                data.method(),
                data.resource_path()
            );
        }
        client.dispatch_async(data).await?;
        Ok(())
    }
}

impl<T: 'static> RequestBuilder<WithContent<T>> {
    /// Execute the request, blocking until the transport answers, and
    /// resolve the typed result.
    pub fn execute(self) -> Result<T> {
        let RequestBuilder {
            client,
            data,
            state,
            debug_enabled,
        } = self;
        let operation = data.operation().to_owned();
        if debug_enabled {
            log::debug!("{operation}: {} {}", data.method(), data.resource_path());
        }
        let response = client.dispatch(data)?;
        resolve(operation, state, response, debug_enabled)
    }

    /// Non-blocking form of [`execute`](Self::execute). The transport call
    /// is the single suspension point; results and errors are identical to
    /// the blocking form.
    pub async fn execute_async(self) -> Result<T> {
        let RequestBuilder {
            client,
            data,
            state,
            debug_enabled,
        } = self;
        let operation = data.operation().to_owned();
        if debug_enabled {
            log::debug!("{operation}: {} {}", data.method(), data.resource_path());
        }
        let response = client.dispatch_async(data).await?;
        resolve(operation, state, response, debug_enabled)
    }
}

/// Steps taken after the status gate: alternate substitution first, then
/// the captured decode step. An alternate match never touches the body.
fn resolve<T: 'static>(
    operation: String,
    mut state: WithContent<T>,
    response: TransportResponse,
    debug_enabled: bool,
) -> Result<T> {
    if let Some(value) = state.alternates.remove(&response.status) {
        if debug_enabled {
            log::debug!("{operation}: substituting alternate result for {}", response.status);
        }
        return Ok(value);
    }
    (state.decode)(&response.body).map_err(|source| Error::Decode { operation, source })
}
