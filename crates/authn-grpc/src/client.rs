//! gRPC implementation of the remote authenticator contract.
//!
//! [`GrpcAuthenticator`] dials a fresh channel for every authentication
//! attempt and hands it out as a [`GrpcChannel`]. The channel is released
//! when the value drops — the core client holds it for exactly one
//! attempt, so acquisition stays scoped to the attempt on every exit
//! path, mirroring the context-manager discipline of the service it
//! talks to.

use async_trait::async_trait;
use ferrite_console_authn::{
    AuthError, AuthenticatorChannel, Challenge, RemoteAuthenticator, Result, VerifyOutcome,
};
use tonic::transport::{Channel, Endpoint};

use crate::{
    config::GrpcAuthenticatorConfig,
    error::status_to_auth_error,
    pb,
    pb::authentication_client::AuthenticationClient as PbAuthenticationClient,
};

/// gRPC-backed [`RemoteAuthenticator`].
///
/// Holds only configuration; all connection state is per-attempt.
#[derive(Debug, Clone)]
pub struct GrpcAuthenticator {
    config: GrpcAuthenticatorConfig,
}

impl GrpcAuthenticator {
    /// Creates an authenticator backend from the given configuration.
    #[must_use]
    pub fn new(config: GrpcAuthenticatorConfig) -> Self {
        Self { config }
    }

    /// Returns the transport configuration.
    #[must_use]
    pub fn config(&self) -> &GrpcAuthenticatorConfig {
        &self.config
    }
}

#[async_trait]
impl RemoteAuthenticator for GrpcAuthenticator {
    type Channel = GrpcChannel;

    #[tracing::instrument(skip(self), fields(endpoint = %self.config.endpoint()))]
    async fn connect(&self) -> Result<GrpcChannel> {
        let endpoint = Endpoint::from_shared(self.config.endpoint().to_owned())
            .map_err(|err| {
                AuthError::transport_with_source(
                    format!("invalid endpoint '{}'", self.config.endpoint()),
                    err,
                )
            })?
            .connect_timeout(self.config.connect_timeout())
            .timeout(self.config.request_timeout());

        let channel = endpoint.connect().await.map_err(|err| {
            AuthError::transport_with_source("failed to connect to authenticator", err)
        })?;
        tracing::debug!("authenticator channel established");
        Ok(GrpcChannel { client: PbAuthenticationClient::new(channel) })
    }
}

/// One attempt's channel to the remote authenticator.
///
/// Dropping the value tears the connection down.
#[derive(Debug)]
pub struct GrpcChannel {
    client: PbAuthenticationClient<Channel>,
}

#[async_trait]
impl AuthenticatorChannel for GrpcChannel {
    #[tracing::instrument(skip(self))]
    async fn request_challenge(&mut self, username: &str) -> Result<Challenge> {
        let request = pb::RequestChallengeRequest { username: username.to_owned() };
        let response =
            self.client.request_challenge(request).await.map_err(status_to_auth_error)?;
        let challenge = response.into_inner().challenge;
        if challenge.is_empty() {
            return Err(AuthError::challenge_unavailable(
                "authenticator returned an empty challenge",
            ));
        }
        Ok(Challenge::new(challenge))
    }

    #[tracing::instrument(skip(self, signature))]
    async fn verify_signature(
        &mut self,
        username: &str,
        signature: &str,
    ) -> Result<VerifyOutcome> {
        let request = pb::VerifySignatureRequest {
            username: username.to_owned(),
            signature: signature.to_owned(),
        };
        let response =
            self.client.verify_signature(request).await.map_err(status_to_auth_error)?;
        let inner = response.into_inner();
        Ok(VerifyOutcome { authenticated: inner.authenticated, token: inner.token })
    }

    #[tracing::instrument(skip(self, unique_key))]
    async fn verify_unique_key(&mut self, unique_key: &str) -> Result<VerifyOutcome> {
        let request = pb::VerifyUniqueKeyRequest { unique_key: unique_key.to_owned() };
        let response =
            self.client.verify_unique_key(request).await.map_err(status_to_auth_error)?;
        let inner = response.into_inner();
        Ok(VerifyOutcome { authenticated: inner.authenticated, token: inner.token })
    }
}
