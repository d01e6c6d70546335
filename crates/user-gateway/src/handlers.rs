//! Route table and request handlers.
//!
//! Every handler has the same shape: decode → validate → one backend call
//! bounded by [`CALL_TIMEOUT`] → translate. Validation strictly precedes the
//! call; rejected input never reaches the backend. Cancellation propagates by
//! drop: when the inbound request is abandoned, axum drops the handler
//! future, which drops the in-flight backend call with it.

use std::future::Future;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use user_gateway_proto::user_v1::User;

use crate::backend::{UserBackend, CALL_TIMEOUT};
use crate::error::ApiError;
use crate::validate;

/// Shared state injected into every handler: the backend handle, nothing else.
#[derive(Clone)]
pub struct AppState {
    backend: Arc<dyn UserBackend>,
}

/// Build the gateway router with every route bound.
///
/// This is the seam the integration tests use — they pass a backend double
/// where production passes [`GrpcUserBackend`](crate::GrpcUserBackend).
pub fn router(backend: Arc<dyn UserBackend>) -> Router {
    Router::new()
        .route("/api/v1/users/{id}", get(get_user))
        .route("/api/v1/users", post(create_user))
        .with_state(AppState { backend })
}

/// External JSON shape of a user.
///
/// Exactly these three fields — backend responses are re-shaped through this
/// struct so no other backend field can leak into the external surface.
#[derive(Debug, Serialize)]
struct UserPayload {
    id: String,
    email: String,
    name: String,
}

impl From<User> for UserPayload {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CreateUserBody {
    email: String,
    name: String,
}

/// `GET /api/v1/users/{id}`
async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let user = bounded(state.backend.get_user(id)).await?;
    Ok((StatusCode::OK, Json(UserPayload::from(user))))
}

/// `POST /api/v1/users`
async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<CreateUserBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    // An undecodable body (bad JSON, missing field) is a 400 with the
    // decoder's message; the backend is never consulted.
    let Json(body) = body.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    validate::email(&body.email)?;
    validate::display_name(&body.name)?;

    let user = bounded(state.backend.create_user(body.email, body.name)).await?;
    Ok((StatusCode::CREATED, Json(UserPayload::from(user))))
}

/// Run one backend call under the fixed per-call deadline.
///
/// Local expiry surfaces as `DeadlineExceeded`, the same code the backend
/// reports when the wire deadline fires first — either way the client sees
/// 504 with the fixed timeout message.
async fn bounded<T>(call: impl Future<Output = Result<T, tonic::Status>>) -> Result<T, ApiError> {
    match tokio::time::timeout(CALL_TIMEOUT, call).await {
        Ok(outcome) => outcome.map_err(ApiError::from),
        Err(_) => Err(ApiError::from(tonic::Status::deadline_exceeded(
            "backend call deadline expired",
        ))),
    }
}
