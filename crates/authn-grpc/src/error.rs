//! Error types for the gRPC authenticator transport.
//!
//! This module provides transport-local errors and the mapping from
//! `tonic` failures onto the core
//! [`AuthError`](ferrite_console_authn::AuthError) taxonomy. The mapping
//! is designed to keep "server unreachable" and "wrong key" apart: only
//! an explicit authentication verdict ever becomes
//! `AuthenticationFailed`.

use ferrite_console_authn::AuthError;
use thiserror::Error;
use tonic::Code;

/// Result type alias for transport-local operations.
pub type Result<T> = std::result::Result<T, GrpcAuthenticatorError>;

/// Errors specific to the gRPC authenticator transport.
#[derive(Debug, Error)]
pub enum GrpcAuthenticatorError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The endpoint could not be parsed as a URI.
    #[error("Invalid endpoint '{endpoint}': {message}")]
    InvalidEndpoint {
        /// The offending endpoint string.
        endpoint: String,
        /// Description of the parse failure.
        message: String,
    },
}

impl From<GrpcAuthenticatorError> for AuthError {
    fn from(err: GrpcAuthenticatorError) -> Self {
        match err {
            GrpcAuthenticatorError::Config(message) => {
                AuthError::transport(format!("Config: {message}"))
            },
            GrpcAuthenticatorError::InvalidEndpoint { endpoint, message } => {
                AuthError::transport(format!("Invalid endpoint '{endpoint}': {message}"))
            },
        }
    }
}

/// Converts a gRPC status into a core authentication error.
///
/// Status errors on the verify RPCs are channel-level failures in the
/// normal contract — the authenticator reports its verdict in-band via
/// `VerifyResponse.authenticated`. The exceptions are `UNAUTHENTICATED`
/// and `PERMISSION_DENIED`, which are explicit rejections even when a
/// server chooses to signal them as statuses.
pub(crate) fn status_to_auth_error(status: tonic::Status) -> AuthError {
    match status.code() {
        Code::Unauthenticated | Code::PermissionDenied => AuthError::AuthenticationFailed,
        Code::Unavailable => {
            AuthError::transport_with_source("authenticator unavailable", status)
        },
        Code::DeadlineExceeded => {
            AuthError::transport_with_source("authenticator call timed out", status)
        },
        code => AuthError::transport_with_source(format!("gRPC error ({code:?})"), status),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthenticated_status_is_a_rejection() {
        let err = status_to_auth_error(tonic::Status::unauthenticated("bad signature"));
        assert!(matches!(err, AuthError::AuthenticationFailed));
    }

    #[test]
    fn test_permission_denied_status_is_a_rejection() {
        let err = status_to_auth_error(tonic::Status::permission_denied("no access"));
        assert!(matches!(err, AuthError::AuthenticationFailed));
    }

    #[test]
    fn test_unavailable_status_is_transport() {
        let err = status_to_auth_error(tonic::Status::unavailable("connection refused"));
        assert!(matches!(err, AuthError::Transport { .. }));
    }

    #[test]
    fn test_deadline_exceeded_status_is_transport() {
        let err = status_to_auth_error(tonic::Status::deadline_exceeded("too slow"));
        assert!(matches!(err, AuthError::Transport { .. }));
    }

    #[test]
    fn test_unknown_status_is_transport() {
        let err = status_to_auth_error(tonic::Status::internal("boom"));
        assert!(matches!(err, AuthError::Transport { .. }));
    }

    #[test]
    fn test_status_source_preserved() {
        use std::error::Error;

        let err = status_to_auth_error(tonic::Status::unavailable("connection refused"));
        let source = err.source().expect("source chain must be preserved");
        assert!(source.to_string().contains("connection refused"));
    }

    #[test]
    fn test_config_error_maps_to_transport() {
        let err: AuthError = GrpcAuthenticatorError::Config("endpoint is required".into()).into();
        assert!(matches!(err, AuthError::Transport { .. }));
        assert!(err.to_string().contains("endpoint is required"));
    }

    #[test]
    fn test_invalid_endpoint_display() {
        let err = GrpcAuthenticatorError::InvalidEndpoint {
            endpoint: "not a uri".into(),
            message: "invalid scheme".into(),
        };
        assert_eq!(err.to_string(), "Invalid endpoint 'not a uri': invalid scheme");
    }
}
