//! Gateway construction: backend connection establishment and route binding.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tonic::transport::Endpoint;

use crate::backend::GrpcUserBackend;
use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::handlers;

/// Upper bound on backend connection establishment at startup.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(3);

/// The assembled gateway: a router wired to a live backend channel.
///
/// Constructed by [`GatewayServer::connect`]; a value of this type implies
/// the backend connection exists. The channel is released exactly once when
/// the router (handed out by [`into_router`](Self::into_router)) is dropped,
/// however the process exits.
pub struct GatewayServer {
    router: Router,
}

impl GatewayServer {
    /// Establish the backend connection and bind every route.
    ///
    /// Connection establishment is eager and bounded by [`CONNECT_TIMEOUT`]:
    /// the endpoint carries a connect timeout for the transport layer and the
    /// whole attempt runs under an elapsed-time guard, whichever trips first.
    ///
    /// # Errors
    ///
    /// [`GatewayError`] if the backend address does not parse or the
    /// connection cannot be established within the bound. On error no server
    /// value exists — there is no degraded state to reason about.
    pub async fn connect(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let addr = config.backend_addr.clone();

        let endpoint = Endpoint::from_shared(addr.clone())
            .map_err(|source| GatewayError::InvalidBackendAddr {
                addr: addr.clone(),
                source,
            })?
            .connect_timeout(CONNECT_TIMEOUT);

        let channel = match tokio::time::timeout(CONNECT_TIMEOUT, endpoint.connect()).await {
            Ok(Ok(channel)) => channel,
            Ok(Err(source)) => return Err(GatewayError::Connect { addr, source }),
            Err(_) => {
                return Err(GatewayError::ConnectTimeout {
                    addr,
                    timeout: CONNECT_TIMEOUT,
                })
            }
        };
        tracing::info!(backend = %config.backend_addr, "connected to user service backend");

        let backend = Arc::new(GrpcUserBackend::new(channel));
        Ok(Self {
            router: handlers::router(backend),
        })
    }

    /// Consume the server and hand its router to the serving layer.
    #[must_use]
    pub fn into_router(self) -> Router {
        self.router
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(backend_addr: &str) -> GatewayConfig {
        GatewayConfig {
            http_addr: "127.0.0.1:8080".parse().unwrap(),
            backend_addr: backend_addr.to_string(),
        }
    }

    #[tokio::test]
    async fn unparseable_backend_address_is_rejected() {
        let err = GatewayServer::connect(&config("not a uri"))
            .await
            .err()
            .expect("construction should fail");
        assert!(matches!(err, GatewayError::InvalidBackendAddr { .. }), "{err}");
    }

    #[tokio::test]
    async fn unreachable_backend_fails_construction() {
        // Port 1 on loopback refuses immediately; either the transport error
        // or the elapsed-time guard is an acceptable failure mode.
        let err = GatewayServer::connect(&config("http://127.0.0.1:1"))
            .await
            .err()
            .expect("construction should fail");
        assert!(
            matches!(
                err,
                GatewayError::Connect { .. } | GatewayError::ConnectTimeout { .. }
            ),
            "{err}",
        );
    }
}
