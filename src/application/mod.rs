//! Application layer - the action router, the per-provider handlers it
//! dispatches to, and the capability prober.

pub mod handlers;
mod prober;
mod router;

pub use prober::{CapabilityProber, PROBE_AGENT_ID};
pub use router::ActionRouter;
