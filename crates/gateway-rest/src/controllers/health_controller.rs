//! Probe routes for the gateway process and its users binding.

use crate::state::{AppState, UsersBinding};
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

/// Gateway status, including the users service it forwards to.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub users_service: UsersBinding,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/live", get(liveness_check))
}

/// Reports the gateway version and the users binding it was started with.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Gateway is up", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        users_service: state.binding,
    })
}

/// Ready once the users binding exists, which startup guarantees before the
/// listener opens. A lazy binding has not dialed yet, so the body says which
/// mode is in effect.
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Users binding resolved", body = UsersBinding)
    )
)]
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<UsersBinding>) {
    (StatusCode::OK, Json(state.binding))
}

#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    responses(
        (status = 200, description = "Process is running")
    )
)]
pub async fn liveness_check() -> StatusCode {
    StatusCode::OK
}
