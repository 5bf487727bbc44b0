//! Stream relay
//!
//! Bridges the upstream fragment stream to protocol-framed server-sent
//! events, retrying the upstream call while nothing has reached the caller
//! and reporting later failures in-stream.

mod relay;
mod types;


pub use relay::{open_with_retry, relay_events};
pub use types::StreamEvent;
