//! Gateway HTTP adapter - action dispatch and capability endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::DispatchRequest;
pub use handlers::GatewayAppState;
pub use routes::{gateway_app, gateway_router};
