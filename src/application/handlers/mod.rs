//! Per-provider action handlers.
//!
//! Each handler is a function of `(client, agent_id, payload)` that owns
//! the provider-specific request shaping (templates, model selection,
//! defaults) and projects the provider response into the normalized
//! `data` object. Transport happens behind the port the handler calls.

pub mod chat;
pub mod classroom;
pub mod documents;
pub mod email;
pub mod research;
pub mod voice;
