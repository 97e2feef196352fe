//! Configuration for the gRPC authenticator transport.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{GrpcAuthenticatorError, Result};

/// Default request timeout (30 seconds).
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connection timeout (5 seconds).
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for [`GrpcAuthenticator`](crate::GrpcAuthenticator).
///
/// A fresh channel is dialed per authentication attempt, so the connect
/// timeout bounds every attempt's setup and the request timeout bounds
/// each RPC on the channel. This transport implements no retries — a
/// failed attempt surfaces immediately as a typed error, and a consumed
/// challenge could not be replayed anyway.
///
/// # Example
///
/// ```
/// use ferrite_console_authn_grpc::GrpcAuthenticatorConfig;
///
/// let config = GrpcAuthenticatorConfig::builder()
///     .endpoint("http://localhost:50051")
///     .build()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GrpcAuthenticatorConfig {
    /// Authenticator endpoint URL.
    pub(crate) endpoint: String,

    /// Per-RPC timeout.
    #[serde(with = "humantime_serde", default = "default_request_timeout")]
    pub(crate) request_timeout: Duration,

    /// Channel connection timeout.
    #[serde(with = "humantime_serde", default = "default_connect_timeout")]
    pub(crate) connect_timeout: Duration,
}

fn default_request_timeout() -> Duration {
    DEFAULT_REQUEST_TIMEOUT
}

fn default_connect_timeout() -> Duration {
    DEFAULT_CONNECT_TIMEOUT
}

#[bon::bon]
impl GrpcAuthenticatorConfig {
    /// Creates a new configuration, validating all required fields.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Authenticator endpoint URL (e.g. `http://host:50051`).
    ///
    /// # Optional Fields
    ///
    /// * `request_timeout` - Per-RPC timeout (default: 30 seconds).
    /// * `connect_timeout` - Connection timeout (default: 5 seconds).
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is empty.
    #[builder]
    pub fn new(
        #[builder(into)] endpoint: String,
        #[builder(default = DEFAULT_REQUEST_TIMEOUT)] request_timeout: Duration,
        #[builder(default = DEFAULT_CONNECT_TIMEOUT)] connect_timeout: Duration,
    ) -> Result<Self> {
        if endpoint.is_empty() {
            return Err(GrpcAuthenticatorError::Config("endpoint is required".into()));
        }
        Ok(Self { endpoint, request_timeout, connect_timeout })
    }

    /// Returns the configured endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the per-RPC timeout.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Returns the connection timeout.
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }
}
