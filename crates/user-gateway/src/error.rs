//! Error types: fatal construction failures and the per-request error wrapper.

use std::time::Duration;

use axum::extract::Json;
use axum::response::IntoResponse;

use crate::status_map::{backend_to_http_status, UPSTREAM_TIMEOUT};
use crate::validate::ValidationError;

/// Fatal failures while constructing the gateway.
///
/// Any of these means the server never becomes ready — there is no partial
/// or degraded state. The binary converts them to `anyhow::Error` at the
/// boundary for richer context messages.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// The configured backend address is not a valid URI.
    #[error("invalid backend address '{addr}': {source}")]
    InvalidBackendAddr {
        /// The rejected address.
        addr: String,
        /// The underlying parse failure.
        source: tonic::transport::Error,
    },

    /// Connection establishment failed.
    #[error("failed to connect to backend at '{addr}': {source}")]
    Connect {
        /// The backend address.
        addr: String,
        /// The underlying transport failure.
        source: tonic::transport::Error,
    },

    /// Connection establishment did not finish within the startup bound.
    #[error("timed out connecting to backend at '{addr}' after {timeout:?}")]
    ConnectTimeout {
        /// The backend address.
        addr: String,
        /// The bound that expired.
        timeout: Duration,
    },
}

/// Per-request error wrapper — converts a backend [`tonic::Status`] into the
/// external HTTP error response.
///
/// The response body is a flat JSON object with a single field:
///
/// ```json
/// { "error": "user not found" }
/// ```
///
/// Status selection follows [`backend_to_http_status`]; the message is the
/// backend's own, except for deadline expiry which always reports the fixed
/// [`UPSTREAM_TIMEOUT`] string. Local validation failures enter through
/// [`From<ValidationError>`] as `InvalidArgument`, so every failure a handler
/// can produce flows through this one type and yields exactly one response.
#[derive(Debug, Clone)]
pub struct ApiError(tonic::Status);

impl ApiError {
    /// Wrap a backend status.
    #[must_use]
    pub const fn new(status: tonic::Status) -> Self {
        Self(status)
    }

    /// A local 400 with the given message, for failures caught before any
    /// backend call (e.g. an undecodable request body).
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self(tonic::Status::invalid_argument(message.into()))
    }

    /// Returns a reference to the underlying [`tonic::Status`].
    #[must_use]
    pub const fn status(&self) -> &tonic::Status {
        &self.0
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.0.code(), self.0.message())
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl From<tonic::Status> for ApiError {
    fn from(status: tonic::Status) -> Self {
        Self(status)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(tonic::Status::invalid_argument(err.to_string()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let http_status = backend_to_http_status(self.0.code());

        let message = if self.0.code() == tonic::Code::DeadlineExceeded {
            UPSTREAM_TIMEOUT
        } else {
            self.0.message()
        };

        if http_status.is_server_error() {
            tracing::warn!(code = ?self.0.code(), %http_status, "backend call failed");
        }

        let body = serde_json::json!({ "error": message });
        (http_status, Json(body)).into_response()
    }
}
