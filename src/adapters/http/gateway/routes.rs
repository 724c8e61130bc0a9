//! Axum router configuration for the gateway endpoints.

use std::time::Duration;

use axum::{
    http::{header, HeaderName, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{
    dispatch_action, get_capabilities, health, refresh_capabilities, GatewayAppState,
};

/// Create the gateway API router.
///
/// # Routes
///
/// - `POST /actions` - Dispatch a provider action
/// - `GET /capabilities` - Capability snapshot (probes on first call)
/// - `POST /capabilities/refresh` - Invalidate and re-probe
pub fn gateway_router() -> Router<GatewayAppState> {
    Router::new()
        .route("/actions", post(dispatch_action))
        .route("/capabilities", get(get_capabilities))
        .route("/capabilities/refresh", post(refresh_capabilities))
}

/// Create the complete application router with CORS, tracing, and the
/// configured request timeout.
///
/// Every endpoint answers pre-flight requests with a fixed permissive
/// policy allowing `authorization, x-client-info, apikey, content-type`.
pub fn gateway_app(state: GatewayAppState, request_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            header::CONTENT_TYPE,
        ]);

    Router::new()
        .nest("/api", gateway_router())
        .route("/health", get(health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .with_state(state)
}
