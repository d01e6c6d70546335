//! HTTP/JSON gateway in front of the `user.v1` gRPC backend.
//!
//! Each accepted HTTP request maps to exactly one backend call over a shared
//! multiplexed channel:
//!
//! ```text
//! inbound request → router → handler → backend call (2s bound) → translation
//! ```
//!
//! The pieces:
//!
//! - [`GatewayServer`] — owns backend connection establishment (3s bound) and
//!   binds every route at construction
//! - [`UserBackend`] — the backend call interface; [`GrpcUserBackend`] is the
//!   production implementation, tests substitute their own double
//! - [`ApiError`] — converts backend failure codes into HTTP error responses
//!   with a flat `{"error": "..."}` JSON body
//!
//! The binary (`main.rs`) is thin bootstrap: CLI parsing, tracing setup, and
//! serving the router with graceful shutdown.

#![forbid(unsafe_code)]

pub mod backend;
pub mod config;
pub mod error;
pub mod handlers;
pub mod server;
pub mod status_map;
pub mod validate;

pub use backend::{GrpcUserBackend, UserBackend, CALL_TIMEOUT};
pub use config::GatewayConfig;
pub use error::{ApiError, GatewayError};
pub use handlers::router;
pub use server::{GatewayServer, CONNECT_TIMEOUT};
pub use status_map::{backend_to_http_status, UPSTREAM_TIMEOUT};
