//! Adapters - outbound provider clients, the document store, and the
//! inbound HTTP surface.

pub mod documents;
pub mod http;
pub mod providers;
