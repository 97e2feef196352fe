//! Attaching session metadata to outbound gRPC calls.
//!
//! Every authenticated call to the repository-hosting service carries the
//! bearer token as request metadata. This module converts the core
//! [`CallMetadata`] pairs into `tonic` metadata so any service stub can
//! attach a session with one call.

use ferrite_console_authn::{AuthError, CallMetadata, Result, SessionToken};
use tonic::metadata::{MetadataKey, MetadataValue};

/// Applies call metadata to a request, in order.
///
/// # Errors
///
/// Returns [`AuthError::Transport`] if a pair is not representable as
/// ASCII gRPC metadata — tokens are opaque strings, but the wire format
/// is not obligated to accept arbitrary bytes.
pub fn apply_call_metadata<T>(
    request: &mut tonic::Request<T>,
    metadata: &CallMetadata,
) -> Result<()> {
    for (name, value) in metadata.iter() {
        let key = MetadataKey::from_bytes(name.as_bytes()).map_err(|err| {
            AuthError::transport_with_source(format!("invalid metadata key '{name}'"), err)
        })?;
        let value = MetadataValue::try_from(value).map_err(|err| {
            AuthError::transport_with_source(
                format!("metadata value for '{name}' is not valid ASCII"),
                err,
            )
        })?;
        request.metadata_mut().insert(key, value);
    }
    Ok(())
}

/// Builds a request for `message` carrying the bearer token for `token`.
///
/// # Errors
///
/// Returns [`AuthError::Transport`] if the token is not representable as
/// ASCII gRPC metadata.
pub fn authenticated_request<T>(message: T, token: &SessionToken) -> Result<tonic::Request<T>> {
    let mut request = tonic::Request::new(message);
    apply_call_metadata(&mut request, &CallMetadata::bearer(token))?;
    Ok(request)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_metadata_applied() {
        let token = SessionToken::new("tok-123");
        let request = authenticated_request((), &token).unwrap();

        let value = request.metadata().get("authorization").expect("authorization entry");
        assert_eq!(value.to_str().unwrap(), "Bearer tok-123");
    }

    #[test]
    fn test_apply_preserves_existing_request_message() {
        let token = SessionToken::new("tok-123");
        let request = authenticated_request("payload", &token).unwrap();
        assert_eq!(*request.get_ref(), "payload");
    }

    #[test]
    fn test_non_ascii_token_rejected() {
        let token = SessionToken::new("tok-\u{2603}");
        let err = authenticated_request((), &token).unwrap_err();
        assert!(matches!(err, AuthError::Transport { .. }));
    }
}
