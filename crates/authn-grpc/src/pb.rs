//! Wire types and client stub for `console.v1.Authentication`.
//!
//! Hand-maintained mirror of the prost/tonic output for
//! `proto/console/v1/authentication.proto`, checked in instead of being
//! generated at build time so the crate builds without `protoc`. Keep in
//! sync with the schema when the contract changes.

#![allow(missing_docs)]

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RequestChallengeRequest {
    #[prost(string, tag = "1")]
    pub username: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Challenge {
    /// Opaque single-use challenge bytes.
    #[prost(bytes = "vec", tag = "1")]
    pub challenge: ::prost::alloc::vec::Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VerifySignatureRequest {
    #[prost(string, tag = "1")]
    pub username: ::prost::alloc::string::String,
    /// Raw signature blob (envelope removed), base64 encoded.
    #[prost(string, tag = "2")]
    pub signature: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VerifyUniqueKeyRequest {
    #[prost(string, tag = "1")]
    pub unique_key: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VerifyResponse {
    #[prost(bool, tag = "1")]
    pub authenticated: bool,
    /// Bearer token; set only when `authenticated` is true.
    #[prost(string, tag = "2")]
    pub token: ::prost::alloc::string::String,
}

/// Client implementations for the `console.v1.Authentication` service.
pub mod authentication_client {
    #![allow(unused_variables, dead_code, clippy::wildcard_imports, clippy::let_unit_value)]

    use tonic::codegen::{http::Uri, *};

    #[derive(Debug, Clone)]
    pub struct AuthenticationClient<T> {
        inner: tonic::client::Grpc<T>,
    }

    impl AuthenticationClient<tonic::transport::Channel> {
        /// Attempt to create a new client by connecting to a given endpoint.
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }

    impl<T> AuthenticationClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + std::marker::Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + std::marker::Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }

        pub fn with_origin(inner: T, origin: Uri) -> Self {
            let inner = tonic::client::Grpc::with_origin(inner, origin);
            Self { inner }
        }

        pub async fn request_challenge(
            &mut self,
            request: impl tonic::IntoRequest<super::RequestChallengeRequest>,
        ) -> std::result::Result<tonic::Response<super::Challenge>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/console.v1.Authentication/RequestChallenge",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("console.v1.Authentication", "RequestChallenge"));
            self.inner.unary(req, path, codec).await
        }

        pub async fn verify_signature(
            &mut self,
            request: impl tonic::IntoRequest<super::VerifySignatureRequest>,
        ) -> std::result::Result<tonic::Response<super::VerifyResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/console.v1.Authentication/VerifySignature",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("console.v1.Authentication", "VerifySignature"));
            self.inner.unary(req, path, codec).await
        }

        pub async fn verify_unique_key(
            &mut self,
            request: impl tonic::IntoRequest<super::VerifyUniqueKeyRequest>,
        ) -> std::result::Result<tonic::Response<super::VerifyResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/console.v1.Authentication/VerifyUniqueKey",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("console.v1.Authentication", "VerifyUniqueKey"));
            self.inner.unary(req, path, codec).await
        }
    }
}
