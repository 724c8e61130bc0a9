//! Switchboard - Agent Integration Gateway
//!
//! This crate implements a capability-routing gateway for an agent
//! dashboard: typed provider actions are dispatched to provider-specific
//! handlers with a uniform success/error envelope, and per-provider
//! availability is derived from concurrent benign probe calls, cached
//! process-wide until explicitly invalidated.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
