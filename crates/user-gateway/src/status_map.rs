//! Backend failure code → HTTP status mapping.

use axum::http::StatusCode;

/// Fixed client-facing message for an expired backend deadline.
///
/// Deadline expiry is reported with this constant regardless of what the
/// backend (or the local timer) put in the status message, so clients see a
/// stable string for the timeout case.
pub const UPSTREAM_TIMEOUT: &str = "upstream timeout";

/// Map a backend failure code to the external HTTP status.
///
/// The backend vocabulary is the closed [`tonic::Code`] enumeration; the
/// gateway gives dedicated statuses to the three codes its routes can
/// meaningfully relay and collapses everything else to 500 via the default
/// arm, which also absorbs codes a future backend might add.
///
/// # Examples
///
/// ```
/// use user_gateway::backend_to_http_status;
///
/// assert_eq!(backend_to_http_status(tonic::Code::NotFound), axum::http::StatusCode::NOT_FOUND);
/// assert_eq!(backend_to_http_status(tonic::Code::InvalidArgument), axum::http::StatusCode::BAD_REQUEST);
/// assert_eq!(backend_to_http_status(tonic::Code::DeadlineExceeded), axum::http::StatusCode::GATEWAY_TIMEOUT);
/// assert_eq!(backend_to_http_status(tonic::Code::Internal), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
/// ```
#[must_use]
pub fn backend_to_http_status(code: tonic::Code) -> StatusCode {
    match code {
        tonic::Code::NotFound => StatusCode::NOT_FOUND,
        tonic::Code::InvalidArgument => StatusCode::BAD_REQUEST,
        tonic::Code::DeadlineExceeded => StatusCode::GATEWAY_TIMEOUT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::Code;

    #[test]
    fn relayed_codes_get_dedicated_statuses() {
        let cases: &[(Code, StatusCode)] = &[
            (Code::NotFound, StatusCode::NOT_FOUND),
            (Code::InvalidArgument, StatusCode::BAD_REQUEST),
            (Code::DeadlineExceeded, StatusCode::GATEWAY_TIMEOUT),
        ];

        for (code, expected) in cases {
            assert_eq!(
                backend_to_http_status(*code),
                *expected,
                "backend {code:?} should map to HTTP {expected}",
            );
        }
    }

    /// Every other code falls through the default arm to 500.
    #[test]
    fn unrecognized_codes_collapse_to_internal_error() {
        let others = [
            Code::Ok,
            Code::Cancelled,
            Code::Unknown,
            Code::AlreadyExists,
            Code::PermissionDenied,
            Code::ResourceExhausted,
            Code::FailedPrecondition,
            Code::Aborted,
            Code::OutOfRange,
            Code::Unimplemented,
            Code::Internal,
            Code::Unavailable,
            Code::DataLoss,
            Code::Unauthenticated,
        ];

        for code in others {
            assert_eq!(
                backend_to_http_status(code),
                StatusCode::INTERNAL_SERVER_ERROR,
                "backend {code:?} should collapse to 500",
            );
        }
    }
}
