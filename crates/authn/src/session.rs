//! Session tokens and outbound call metadata.
//!
//! A successful authentication yields an opaque bearer token. This module
//! converts that token into the metadata attached to every subsequent
//! authenticated remote call, and converts its absence into the
//! [`AuthError::Unauthorized`] failure the presentation layer turns into
//! a login redirect.
//!
//! An interactive client session moves `Anonymous → Authenticating →
//! Authenticated(token)` on login, and back to `Anonymous` only when a
//! downstream call reports `Unauthorized` because the cookie is gone or
//! the token no longer verifies. The client never evaluates token expiry
//! itself — lifetime and revocation belong to the authenticator.

use crate::error::{AuthError, Result};

/// Name of the cookie carrying the bearer token between page requests.
pub const SESSION_COOKIE: &str = "session";

/// Metadata key carrying the bearer token on outbound calls.
pub const AUTHORIZATION_KEY: &str = "authorization";

/// An opaque bearer token issued by the authenticator.
///
/// The token is a credential: `Debug` redacts it, and nothing in this
/// crate writes it anywhere except the call metadata built from it. Use
/// [`SessionToken::expose`] at the single point where the raw value is
/// needed (setting the session cookie).
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wraps a token string received from the authenticator.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token value.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}

/// Ordered key/value string pairs attached to an authenticated remote call.
///
/// Always contains at least the `authorization` entry in the form
/// `Bearer <token>`. `Debug` prints keys only — the values embed the
/// bearer token.
#[derive(Clone, PartialEq, Eq)]
pub struct CallMetadata(Vec<(String, String)>);

impl CallMetadata {
    /// Builds the minimal metadata for a bearer token:
    /// `[("authorization", "Bearer <token>")]`.
    ///
    /// The token is formatted, not cached — this type holds its own copy
    /// and never mutates the token it was built from.
    #[must_use]
    pub fn bearer(token: &SessionToken) -> Self {
        Self(vec![(AUTHORIZATION_KEY.to_owned(), format!("Bearer {}", token.expose()))])
    }

    /// Iterates the pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for CallMetadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keys: Vec<&str> = self.0.iter().map(|(name, _)| name.as_str()).collect();
        f.debug_tuple("CallMetadata").field(&keys).finish()
    }
}

/// Converts a session cookie value into call metadata.
///
/// # Errors
///
/// Returns [`AuthError::Unauthorized`] if the cookie is absent or empty.
/// This is the one failure the presentation layer answers with a redirect
/// to the login entry point instead of an error page.
pub fn from_cookie(session_cookie: Option<&str>) -> Result<CallMetadata> {
    match session_cookie {
        Some(value) if !value.is_empty() => Ok(to_bearer_metadata(&SessionToken::new(value))),
        _ => Err(AuthError::Unauthorized),
    }
}

/// Formats a token into bearer call metadata.
#[must_use]
pub fn to_bearer_metadata(token: &SessionToken) -> CallMetadata {
    CallMetadata::bearer(token)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_metadata_shape() {
        let token = SessionToken::new("tok-123");
        let metadata = to_bearer_metadata(&token);
        let pairs: Vec<(&str, &str)> = metadata.iter().collect();
        assert_eq!(pairs, vec![("authorization", "Bearer tok-123")]);
    }

    #[test]
    fn test_from_cookie_present() {
        let metadata = from_cookie(Some("tok-456")).unwrap();
        assert_eq!(metadata.len(), 1);
        let (name, value) = metadata.iter().next().unwrap();
        assert_eq!(name, AUTHORIZATION_KEY);
        assert_eq!(value, "Bearer tok-456");
    }

    #[test]
    fn test_from_cookie_absent_is_unauthorized() {
        let err = from_cookie(None).unwrap_err();
        assert!(matches!(err, AuthError::Unauthorized));
        assert!(err.requires_login_redirect());
    }

    #[test]
    fn test_from_cookie_empty_is_unauthorized() {
        let err = from_cookie(Some("")).unwrap_err();
        assert!(matches!(err, AuthError::Unauthorized));
    }

    #[test]
    fn test_token_debug_redacted() {
        let token = SessionToken::new("super-secret");
        assert_eq!(format!("{token:?}"), "SessionToken(<redacted>)");
    }

    #[test]
    fn test_metadata_debug_omits_values() {
        let metadata = CallMetadata::bearer(&SessionToken::new("super-secret"));
        let debug = format!("{metadata:?}");
        assert!(debug.contains("authorization"));
        assert!(!debug.contains("super-secret"));
    }
}
