//! # courseforge
//!
//! An AI course generation gateway. Callers post a topic/level request and
//! receive the generated course as a server-sent event stream; the gateway
//! fronts the upstream generator with a per-client sliding-window rate
//! limiter, an exponential-backoff retry engine, and a stream relay that
//! tolerates mid-stream failures.
//!
//! ## Features
//!
//! - **Sliding-window rate limiting**: per-client quotas with
//!   `X-RateLimit-*` response headers and structured 429 rejections
//! - **Resilient upstream calls**: timeouts, transient-failure
//!   classification, and exponential backoff with jitter
//! - **SSE stream relay**: fragments forwarded as they arrive, with exactly
//!   one terminal `complete` or `error` event per stream
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use courseforge::{Config, Gateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/gateway.yaml").await?;
//!     let gateway = Gateway::new(config)?;
//!     gateway.run().await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{GatewayError, Result};

pub use core::generation::{
    CourseGenerator, CourseLevel, CourseRequest, FragmentStream, HttpCourseGenerator,
};
pub use core::rate_limiter::{RateLimitDecision, RateLimiter, SweeperHandle};
pub use core::retry::{RetryExecutor, RetryHook, RetryPredicate};
pub use core::streaming::{StreamEvent, open_with_retry, relay_events};

use tracing::info;

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// A course generation gateway instance
pub struct Gateway {
    server: server::HttpServer,
}

impl Gateway {
    /// Create a new gateway instance
    pub fn new(config: Config) -> Result<Self> {
        info!("Creating new gateway instance");
        let server = server::HttpServer::new(&config)?;
        Ok(Self { server })
    }

    /// Run the gateway server
    pub async fn run(self) -> Result<()> {
        info!("Starting courseforge gateway");
        self.server.start().await
    }
}
