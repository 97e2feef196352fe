//! # Ferrite Console Authentication
//!
//! Challenge-response authentication core for the Ferrite console — the
//! web front end that proxies repository-hosting operations to a remote
//! service over gRPC.
//!
//! This crate provides:
//! - **Authentication client**: the challenge/sign/verify exchange
//!   against a remote authenticator, plus the single-round-trip shared
//!   unique-key path
//! - **Signature codec**: strict, bounds-checked unwrapping of SSH-style
//!   signature envelopes
//! - **Key handling**: OpenSSH and PKCS#1/PKCS#8 private key parsing and
//!   SSH-convention signing (`rsa-sha2-256`, `ssh-ed25519`)
//! - **Session context**: bearer tokens, call metadata, and the
//!   `Unauthorized` signal the presentation layer redirects on
//!
//! The remote authenticator itself (key storage, challenge generation,
//! token issuance) is an external collaborator reached through the
//! [`RemoteAuthenticator`] trait; the gRPC implementation lives in
//! `ferrite-console-authn-grpc`.
//!
//! ## Example
//!
//! ```no_run
//! use ferrite_console_authn::{AuthenticationClient, RemoteAuthenticator, SessionToken};
//!
//! async fn login<A: RemoteAuthenticator>(
//!     authenticator: A,
//!     username: &str,
//!     uploaded_key: &[u8],
//! ) -> Result<SessionToken, Box<dyn std::error::Error>> {
//!     let client = AuthenticationClient::new(authenticator);
//!     let token = client.authenticate_with_key(username, uploaded_key).await?;
//!     // Attach session::to_bearer_metadata(&token) to every later call.
//!     Ok(token)
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// Challenge/sign/verify orchestration and the authenticator contract.
pub mod client;
/// Signature envelope codec.
pub mod envelope;
/// Authentication error types.
pub mod error;
/// Private key parsing and SSH-convention signing.
pub mod key;
/// Session tokens and outbound call metadata.
pub mod session;

mod wire;

/// Shared test utilities (stub authenticator, key generation).
#[cfg(feature = "testutil")]
pub mod testutil;

// Re-export key types for convenience
pub use client::{
    AuthenticationClient, AuthenticatorChannel, Challenge, RemoteAuthenticator, VerifyOutcome,
};
pub use error::{AuthError, BoxError, Result};
pub use key::{PrivateKey, SignatureAlgorithm};
pub use session::{CallMetadata, SESSION_COOKIE, SessionToken};
