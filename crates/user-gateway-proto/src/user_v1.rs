//! Messages and unary client for `user.v1.UserService`.
//!
//! Field numbers follow the backend's proto3 schema. Message-typed fields
//! are `Option` per proto3 presence rules; string fields default to empty.

use http::uri::PathAndQuery;
use tonic::client::Grpc;
use tonic::transport::Channel;
use tonic::{Request, Response, Status};
use tonic_prost::ProstCodec;

/// A user record as the backend returns it.
#[derive(Clone, PartialEq, prost::Message)]
pub struct User {
    /// Backend-assigned identifier.
    #[prost(string, tag = "1")]
    pub id: String,
    /// Contact address.
    #[prost(string, tag = "2")]
    pub email: String,
    /// Display name.
    #[prost(string, tag = "3")]
    pub name: String,
}

/// Request for `UserService.GetUser`.
#[derive(Clone, PartialEq, prost::Message)]
pub struct GetUserRequest {
    /// Identifier of the user to fetch.
    #[prost(string, tag = "1")]
    pub id: String,
}

/// Reply to [`GetUserRequest`].
#[derive(Clone, PartialEq, prost::Message)]
pub struct GetUserResponse {
    /// The requested user. Absent only in malformed replies.
    #[prost(message, optional, tag = "1")]
    pub user: Option<User>,
}

/// Request for `UserService.CreateUser`.
#[derive(Clone, PartialEq, prost::Message)]
pub struct CreateUserRequest {
    /// Contact address for the new user.
    #[prost(string, tag = "1")]
    pub email: String,
    /// Display name for the new user.
    #[prost(string, tag = "2")]
    pub name: String,
}

/// Reply to [`CreateUserRequest`].
#[derive(Clone, PartialEq, prost::Message)]
pub struct CreateUserResponse {
    /// The created user. Absent only in malformed replies.
    #[prost(message, optional, tag = "1")]
    pub user: Option<User>,
}

const GET_USER_PATH: &str = "/user.v1.UserService/GetUser";
const CREATE_USER_PATH: &str = "/user.v1.UserService/CreateUser";

/// Unary client for `user.v1.UserService`.
///
/// Cloning is cheap: the underlying [`Channel`] multiplexes concurrent calls
/// over one connection, so callers clone a client per request instead of
/// locking a shared one.
#[derive(Debug, Clone)]
pub struct UserServiceClient {
    inner: Grpc<Channel>,
}

impl UserServiceClient {
    /// Wrap an established channel.
    #[must_use]
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: Grpc::new(channel),
        }
    }

    /// Fetch a user by identifier.
    ///
    /// # Errors
    ///
    /// Returns the backend's [`Status`] on call failure, or
    /// `Status::unavailable` when the channel cannot accept the call.
    pub async fn get_user(
        &mut self,
        request: Request<GetUserRequest>,
    ) -> Result<Response<GetUserResponse>, Status> {
        self.ready().await?;
        let codec = ProstCodec::default();
        let path = PathAndQuery::from_static(GET_USER_PATH);
        self.inner.unary(request, path, codec).await
    }

    /// Create a user from an address and a display name.
    ///
    /// # Errors
    ///
    /// Returns the backend's [`Status`] on call failure, or
    /// `Status::unavailable` when the channel cannot accept the call.
    pub async fn create_user(
        &mut self,
        request: Request<CreateUserRequest>,
    ) -> Result<Response<CreateUserResponse>, Status> {
        self.ready().await?;
        let codec = ProstCodec::default();
        let path = PathAndQuery::from_static(CREATE_USER_PATH);
        self.inner.unary(request, path, codec).await
    }

    async fn ready(&mut self) -> Result<(), Status> {
        self.inner
            .ready()
            .await
            .map_err(|e| Status::unavailable(format!("backend channel not ready: {e}")))
    }
}
