//! Transport-level tests that need no running authenticator.
//!
//! These exercise the failure half of the scoped-channel contract: a dead
//! or nonsensical endpoint must surface as the right taxonomy kind, and
//! must do so before any challenge could have been issued.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use ferrite_console_authn::{
    AuthError, AuthenticationClient, RemoteAuthenticator, testutil::generate_ed25519_openssh_key,
};
use ferrite_console_authn_grpc::{GrpcAuthenticator, GrpcAuthenticatorConfig};

fn authenticator(endpoint: &str) -> GrpcAuthenticator {
    let config = GrpcAuthenticatorConfig::builder()
        .endpoint(endpoint)
        .connect_timeout(std::time::Duration::from_millis(500))
        .build()
        .expect("valid config");
    GrpcAuthenticator::new(config)
}

#[tokio::test]
async fn test_connect_to_dead_endpoint_is_transport_error() {
    // Port 1 on loopback is reserved and refuses connections immediately.
    let err = authenticator("http://127.0.0.1:1").connect().await.unwrap_err();
    assert!(matches!(err, AuthError::Transport { .. }));
}

#[tokio::test]
async fn test_malformed_endpoint_is_transport_error() {
    let err = authenticator("not an endpoint").connect().await.unwrap_err();
    assert!(matches!(err, AuthError::Transport { .. }));
}

#[tokio::test]
async fn test_key_attempt_against_dead_endpoint_is_challenge_unavailable() {
    // The failure happens before any challenge is issued, so the core
    // client reports it as ChallengeUnavailable, not a bare transport
    // error — and never as a rejection.
    let client = AuthenticationClient::new(authenticator("http://127.0.0.1:1"));
    let key = generate_ed25519_openssh_key();

    let err = client.authenticate_with_key("alice", &key).await.unwrap_err();
    assert!(matches!(err, AuthError::ChallengeUnavailable { .. }));
}

#[tokio::test]
async fn test_unique_key_attempt_against_dead_endpoint_is_transport() {
    let client = AuthenticationClient::new(authenticator("http://127.0.0.1:1"));

    let err = client.authenticate_with_unique_key("some-key").await.unwrap_err();
    assert!(matches!(err, AuthError::Transport { .. }));
}
