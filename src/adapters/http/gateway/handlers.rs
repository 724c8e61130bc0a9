//! HTTP handlers for the gateway endpoints.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::application::{ActionRouter, CapabilityProber};
use crate::domain::{ActionRequest, ActionResult, Payload};

use super::dto::DispatchRequest;

/// Application state for gateway endpoints.
#[derive(Clone)]
pub struct GatewayAppState {
    /// Action router (injected)
    pub router: Arc<ActionRouter>,
    /// Capability prober with its memoized snapshot
    pub prober: Arc<CapabilityProber>,
}

/// Dispatch a provider action.
///
/// POST /api/actions
///
/// The body is always the normalized envelope; the status code is 200 on
/// success, 400 for validation-class failures, and 500 for transport or
/// unexpected failures.
pub async fn dispatch_action(
    State(state): State<GatewayAppState>,
    Json(request): Json<DispatchRequest>,
) -> impl IntoResponse {
    let payload = match Payload::from_value(request.payload) {
        Ok(payload) => payload,
        Err(err) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ActionResult::fail(err.to_string())),
            );
        }
    };

    let action_request = ActionRequest::new(
        request.provider,
        request.action.as_deref(),
        request.agent_id,
        payload,
    );

    match state.router.execute(&action_request).await {
        Ok(data) => (StatusCode::OK, Json(ActionResult::ok(data))),
        Err(err) => {
            let status = StatusCode::from_u16(err.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Json(ActionResult::fail(err.to_string())))
        }
    }
}

/// Get the capability snapshot, probing on first call.
///
/// GET /api/capabilities
pub async fn get_capabilities(State(state): State<GatewayAppState>) -> impl IntoResponse {
    Json(state.prober.check_all().await)
}

/// Invalidate the snapshot and re-probe every provider.
///
/// POST /api/capabilities/refresh
pub async fn refresh_capabilities(State(state): State<GatewayAppState>) -> impl IntoResponse {
    state.prober.invalidate().await;
    Json(state.prober.check_all().await)
}

/// Liveness probe.
///
/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Health endpoint body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}
