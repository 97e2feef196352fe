//! Challenge-response authentication against a remote authenticator.
//!
//! [`AuthenticationClient`] owns the challenge/sign/verify exchange. It
//! depends on the narrow [`RemoteAuthenticator`] capability interface and
//! is handed a concrete backend by composition — production supplies a
//! gRPC implementation, tests supply an in-memory stub.
//!
//! # Channel lifecycle
//!
//! Each attempt acquires one channel, uses it for exactly the calls that
//! attempt needs, and releases it when the channel is dropped — on every
//! exit path, success or failure. Concurrent attempts share nothing;
//! single-use enforcement of a challenge is the authenticator's job.

use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use sha2::{Digest, Sha256};

use crate::{
    envelope,
    error::{AuthError, Result},
    key::PrivateKey,
    session::SessionToken,
};

/// A single-use challenge issued by the authenticator.
///
/// The client never interprets the contents — it only hashes and signs
/// them. `Debug` prints the length, not the bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct Challenge(Vec<u8>);

impl Challenge {
    /// Wraps challenge bytes received from the authenticator.
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// The opaque challenge bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for Challenge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Challenge").field(&format_args!("{} bytes", self.0.len())).finish()
    }
}

/// The authenticator's verdict on a verification call.
///
/// `Debug` redacts the token.
#[derive(Clone, PartialEq, Eq)]
pub struct VerifyOutcome {
    /// Whether the authenticator accepted the attempt.
    pub authenticated: bool,
    /// The bearer token, meaningful only when `authenticated` is true.
    pub token: String,
}

impl std::fmt::Debug for VerifyOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerifyOutcome")
            .field("authenticated", &self.authenticated)
            .finish_non_exhaustive()
    }
}

/// Factory for per-attempt channels to the remote authenticator.
///
/// Implementations are supplied by composition (a gRPC transport in
/// production, [`crate::testutil::StubAuthenticator`] in tests). Each
/// [`connect`](Self::connect) yields a channel dedicated to one attempt;
/// dropping the channel releases it.
#[async_trait]
pub trait RemoteAuthenticator: Send + Sync {
    /// The per-attempt channel type.
    type Channel: AuthenticatorChannel + Send;

    /// Opens a channel for one authentication attempt.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Transport`] if the authenticator cannot be
    /// reached.
    async fn connect(&self) -> Result<Self::Channel>;
}

/// One attempt's view of the remote authenticator contract.
///
/// The three operations mirror the remote service: challenge issuance,
/// signature verification, and shared-key verification. All failures are
/// terminal for the attempt; nothing here retries — replaying a consumed
/// challenge would legitimately fail anyway.
#[async_trait]
pub trait AuthenticatorChannel: Send {
    /// Requests a single-use challenge bound to `username`.
    async fn request_challenge(&mut self, username: &str) -> Result<Challenge>;

    /// Submits a base64-encoded raw signature for verification.
    async fn verify_signature(
        &mut self,
        username: &str,
        signature: &str,
    ) -> Result<VerifyOutcome>;

    /// Submits the shared unique key for verification.
    async fn verify_unique_key(&mut self, unique_key: &str) -> Result<VerifyOutcome>;
}

/// Client for the challenge/sign/verify exchange.
///
/// Stateless between attempts; a single instance may serve concurrent
/// logins.
#[derive(Debug)]
pub struct AuthenticationClient<A> {
    authenticator: A,
}

impl<A: RemoteAuthenticator> AuthenticationClient<A> {
    /// Creates a client over the given authenticator backend.
    #[must_use]
    pub fn new(authenticator: A) -> Self {
        Self { authenticator }
    }

    /// Returns the underlying authenticator backend.
    #[must_use]
    pub fn authenticator(&self) -> &A {
        &self.authenticator
    }

    /// Authenticates `username` by signing a server-issued challenge with
    /// the supplied private key.
    ///
    /// The key is parsed, used for exactly this attempt, and dropped. The
    /// signature envelope produced by signing is unwrapped to its raw
    /// blob, base64 encoded, and submitted for verification.
    ///
    /// # Errors
    ///
    /// - [`AuthError::UnsupportedKeyFormat`] — the key cannot be parsed.
    /// - [`AuthError::ChallengeUnavailable`] — the authenticator was
    ///   unreachable or errored before a challenge was issued.
    /// - [`AuthError::MalformedSignatureEnvelope`] — the signature
    ///   envelope did not unwrap cleanly.
    /// - [`AuthError::AuthenticationFailed`] — verification explicitly
    ///   rejected the attempt.
    /// - [`AuthError::Transport`] — channel failure after the challenge
    ///   phase.
    #[tracing::instrument(skip(self, private_key))]
    pub async fn authenticate_with_key(
        &self,
        username: &str,
        private_key: &[u8],
    ) -> Result<SessionToken> {
        if username.is_empty() {
            tracing::debug!("rejecting attempt with empty username");
            return Err(AuthError::AuthenticationFailed);
        }
        let key = PrivateKey::from_bytes(private_key)?;
        tracing::debug!(algorithm = %key.algorithm(), "starting key authentication attempt");

        let mut channel = self.authenticator.connect().await.map_err(before_challenge)?;
        let challenge = channel.request_challenge(username).await.map_err(before_challenge)?;

        let digest = Sha256::digest(challenge.as_bytes());
        let signature_envelope = key.sign(&digest)?;
        let raw_signature = envelope::unwrap(&signature_envelope)?;
        let signature_b64 = STANDARD.encode(raw_signature);

        let outcome = channel.verify_signature(username, &signature_b64).await?;
        finish_attempt(outcome)
        // `channel` drops here on every path, releasing the connection.
    }

    /// Authenticates with the shared unique key in a single round trip.
    ///
    /// Never touches key parsing or the signature codec.
    ///
    /// # Errors
    ///
    /// - [`AuthError::AuthenticationFailed`] — the key was rejected.
    /// - [`AuthError::Transport`] — the authenticator was unreachable or
    ///   the call failed at the channel level.
    #[tracing::instrument(skip(self, unique_key))]
    pub async fn authenticate_with_unique_key(&self, unique_key: &str) -> Result<SessionToken> {
        if unique_key.is_empty() {
            tracing::debug!("rejecting attempt with empty unique key");
            return Err(AuthError::AuthenticationFailed);
        }
        tracing::debug!("starting unique-key authentication attempt");

        let mut channel = self.authenticator.connect().await?;
        let outcome = channel.verify_unique_key(unique_key).await?;
        finish_attempt(outcome)
    }
}

/// Maps transport failures that happen before a challenge has been issued
/// onto [`AuthError::ChallengeUnavailable`]; everything else passes
/// through unchanged.
fn before_challenge(err: AuthError) -> AuthError {
    match err {
        AuthError::Transport { message, source } => {
            AuthError::ChallengeUnavailable { message, source }
        },
        other => other,
    }
}

fn finish_attempt(outcome: VerifyOutcome) -> Result<SessionToken> {
    if outcome.authenticated && !outcome.token.is_empty() {
        tracing::info!("authentication succeeded");
        Ok(SessionToken::new(outcome.token))
    } else {
        tracing::info!("authentication rejected");
        Err(AuthError::AuthenticationFailed)
    }
}
