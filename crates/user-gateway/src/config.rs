//! Process-level gateway configuration.

use std::net::SocketAddr;

/// The two addresses the gateway consumes at startup.
///
/// There is no file-based configuration; the bootstrap layer fills this from
/// CLI flags and environment variables.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Address the HTTP listener binds to.
    pub http_addr: SocketAddr,

    /// URI of the `user.v1` gRPC backend. The scheme is required
    /// (e.g. `http://127.0.0.1:50051`).
    pub backend_addr: String,
}
