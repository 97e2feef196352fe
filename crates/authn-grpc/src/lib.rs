//! # Ferrite Console Authentication — gRPC transport
//!
//! tonic-backed implementation of the
//! [`RemoteAuthenticator`](ferrite_console_authn::RemoteAuthenticator)
//! contract from `ferrite-console-authn`, plus helpers for attaching
//! session metadata to any other authenticated service call.
//!
//! A fresh channel is dialed per authentication attempt and released when
//! the attempt ends, whichever way it ends. There are no retries at this
//! layer: challenges are single-use, so the caller decides whether a new
//! attempt is worth making.
//!
//! ## Example
//!
//! ```no_run
//! use ferrite_console_authn::AuthenticationClient;
//! use ferrite_console_authn_grpc::{GrpcAuthenticator, GrpcAuthenticatorConfig};
//!
//! # async fn example(uploaded_key: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
//! let config = GrpcAuthenticatorConfig::builder()
//!     .endpoint("http://localhost:50051")
//!     .build()?;
//! let client = AuthenticationClient::new(GrpcAuthenticator::new(config));
//!
//! let token = client.authenticate_with_key("alice", uploaded_key).await?;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// gRPC implementation of the authenticator contract.
pub mod client;
/// Transport configuration.
pub mod config;
/// Transport error types and status mapping.
pub mod error;
/// Session metadata for outbound calls.
pub mod metadata;
/// Wire types for `console.v1.Authentication`.
pub mod pb;

// Re-export key types for convenience
pub use client::{GrpcAuthenticator, GrpcChannel};
pub use config::GrpcAuthenticatorConfig;
pub use error::GrpcAuthenticatorError;
pub use metadata::{apply_call_metadata, authenticated_request};
