//! HTTP server implementation
//!
//! This module provides the HTTP server, shared state, and routing.

pub mod routes;
pub mod server;
pub mod state;

pub use server::HttpServer;
pub use state::AppState;
