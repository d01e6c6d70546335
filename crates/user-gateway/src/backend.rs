//! Backend call interface and the tonic-based production implementation.

use std::time::Duration;

use async_trait::async_trait;
use tonic::transport::Channel;
use user_gateway_proto::user_v1::{
    CreateUserRequest, GetUserRequest, User, UserServiceClient,
};

/// Upper bound applied to every backend data call.
///
/// Handlers enforce it locally via `tokio::time::timeout`;
/// [`GrpcUserBackend`] additionally puts it on the wire (`grpc-timeout`) so
/// the backend can abort its side of an expired call.
pub const CALL_TIMEOUT: Duration = Duration::from_secs(2);

/// The gateway's view of the user service.
///
/// Injected into the router as `Arc<dyn UserBackend>` so tests can substitute
/// a double; see the integration tests for one with call counters. All
/// methods take `&self` — implementations must tolerate many in-flight calls
/// at once.
#[async_trait]
pub trait UserBackend: Send + Sync {
    /// Fetch a user by identifier.
    async fn get_user(&self, id: String) -> Result<User, tonic::Status>;

    /// Create a user from an address and a display name.
    async fn create_user(&self, email: String, name: String) -> Result<User, tonic::Status>;
}

/// Production [`UserBackend`] over a shared gRPC channel.
///
/// Holds one [`UserServiceClient`] and clones it per call; the clones all
/// multiplex over the same connection, so no call ever waits on a lock.
#[derive(Debug, Clone)]
pub struct GrpcUserBackend {
    client: UserServiceClient,
}

impl GrpcUserBackend {
    /// Wrap an established channel.
    #[must_use]
    pub fn new(channel: Channel) -> Self {
        Self {
            client: UserServiceClient::new(channel),
        }
    }

    fn request_with_deadline<T>(message: T) -> tonic::Request<T> {
        let mut request = tonic::Request::new(message);
        request.set_timeout(CALL_TIMEOUT);
        request
    }
}

#[async_trait]
impl UserBackend for GrpcUserBackend {
    async fn get_user(&self, id: String) -> Result<User, tonic::Status> {
        let mut client = self.client.clone();
        let request = Self::request_with_deadline(GetUserRequest { id });
        let response = client.get_user(request).await?;
        response.into_inner().user.ok_or_else(missing_user)
    }

    async fn create_user(&self, email: String, name: String) -> Result<User, tonic::Status> {
        let mut client = self.client.clone();
        let request = Self::request_with_deadline(CreateUserRequest { email, name });
        let response = client.create_user(request).await?;
        response.into_inner().user.ok_or_else(missing_user)
    }
}

/// A reply without a user payload is a malformed backend response. It is
/// reported generically rather than leaking backend internals to clients.
fn missing_user() -> tonic::Status {
    tracing::warn!("backend reply carried no user payload");
    tonic::Status::internal("unknown error")
}
