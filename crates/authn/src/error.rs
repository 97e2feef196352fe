//! Authentication error types.
//!
//! This module defines the error taxonomy for a single authentication
//! attempt. Every failure is terminal for its attempt — nothing in this
//! crate retries internally — and every variant is distinguishable so
//! callers can tell "server unreachable" apart from "wrong key".

use std::sync::Arc;

use thiserror::Error;

/// A boxed error type for source chain tracking.
pub type BoxError = Arc<dyn std::error::Error + Send + Sync>;

/// Result type alias for authentication operations.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Errors that can occur during authentication and session handling.
///
/// Errors preserve their source chain via the `#[source]` attribute,
/// enabling debugging tools to display the full error context.
///
/// # Non-exhaustive
///
/// This enum is marked `#[non_exhaustive]` — new variants may be added in
/// future minor releases without a semver-breaking change. Downstream match
/// expressions must include a wildcard arm (`_ =>`).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthError {
    /// The authenticator was unreachable or errored before a challenge
    /// was issued.
    #[error("Challenge unavailable: {message}")]
    ChallengeUnavailable {
        /// Description of the failure.
        message: String,
        /// The underlying error, if any.
        #[source]
        source: Option<BoxError>,
    },

    /// The supplied private key could not be parsed as a supported
    /// asymmetric key format, or is unusable for signing.
    #[error("Unsupported key format: {message}")]
    UnsupportedKeyFormat {
        /// Description of what made the key unusable.
        message: String,
    },

    /// A signature envelope did not conform to the length-prefixed wire
    /// structure, or declared lengths past the end of the buffer.
    #[error("Malformed signature envelope: {message}")]
    MalformedSignatureEnvelope {
        /// Description of the framing violation.
        message: String,
    },

    /// The authenticator explicitly rejected the attempt.
    ///
    /// This is a verification verdict, never a connectivity problem —
    /// transport failures surface as [`AuthError::Transport`] or
    /// [`AuthError::ChallengeUnavailable`] instead.
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// Channel-level failure while talking to the authenticator.
    #[error("Transport error: {message}")]
    Transport {
        /// Description of the transport failure.
        message: String,
        /// The underlying error, if any.
        #[source]
        source: Option<BoxError>,
    },

    /// No session is present.
    ///
    /// This is the only variant the presentation layer translates into a
    /// redirect to the login entry point; everything else surfaces as an
    /// explicit rejection message.
    #[error("Unauthorized")]
    Unauthorized,
}

impl AuthError {
    /// Creates a new `ChallengeUnavailable` error with the given message.
    #[must_use]
    pub fn challenge_unavailable(message: impl Into<String>) -> Self {
        Self::ChallengeUnavailable { message: message.into(), source: None }
    }

    /// Creates a new `ChallengeUnavailable` error with a message and source error.
    #[must_use]
    pub fn challenge_unavailable_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ChallengeUnavailable { message: message.into(), source: Some(Arc::new(source)) }
    }

    /// Creates a new `UnsupportedKeyFormat` error with the given message.
    #[must_use]
    pub fn unsupported_key_format(message: impl Into<String>) -> Self {
        Self::UnsupportedKeyFormat { message: message.into() }
    }

    /// Creates a new `MalformedSignatureEnvelope` error with the given message.
    #[must_use]
    pub fn malformed_envelope(message: impl Into<String>) -> Self {
        Self::MalformedSignatureEnvelope { message: message.into() }
    }

    /// Creates a new `Transport` error with the given message.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport { message: message.into(), source: None }
    }

    /// Creates a new `Transport` error with a message and source error.
    #[must_use]
    pub fn transport_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Transport { message: message.into(), source: Some(Arc::new(source)) }
    }

    /// Whether the presentation layer should react to this error by
    /// redirecting to the login entry point rather than rendering it.
    ///
    /// Only [`AuthError::Unauthorized`] qualifies; every other variant is
    /// shown to the caller attempting to log in.
    #[must_use]
    pub fn requires_login_redirect(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AuthError::challenge_unavailable("connection refused");
        assert_eq!(err.to_string(), "Challenge unavailable: connection refused");

        let err = AuthError::unsupported_key_format("not a PEM document");
        assert_eq!(err.to_string(), "Unsupported key format: not a PEM document");

        let err = AuthError::malformed_envelope("truncated blob");
        assert_eq!(err.to_string(), "Malformed signature envelope: truncated blob");

        let err = AuthError::AuthenticationFailed;
        assert_eq!(err.to_string(), "Authentication failed");

        let err = AuthError::Unauthorized;
        assert_eq!(err.to_string(), "Unauthorized");
    }

    #[test]
    fn test_source_chain_preserved() {
        use std::error::Error;

        let io_err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = AuthError::transport_with_source("dial failed", io_err);

        let source = err.source().expect("source chain must be preserved");
        assert_eq!(source.to_string(), "refused");
    }

    #[test]
    fn test_only_unauthorized_redirects() {
        assert!(AuthError::Unauthorized.requires_login_redirect());
        assert!(!AuthError::AuthenticationFailed.requires_login_redirect());
        assert!(!AuthError::transport("down").requires_login_redirect());
        assert!(!AuthError::challenge_unavailable("down").requires_login_redirect());
        assert!(!AuthError::unsupported_key_format("bad").requires_login_redirect());
        assert!(!AuthError::malformed_envelope("bad").requires_login_redirect());
    }
}
