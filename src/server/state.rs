//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::generation::CourseGenerator;
use crate::core::rate_limiter::RateLimiter;
use crate::core::retry::RetryExecutor;
use std::sync::Arc;

/// Shared resources for request handlers.
///
/// All fields are cheaply cloneable; the limiter is the only mutable shared
/// resource and serializes its own access internally.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Per-client sliding-window limiter
    pub limiter: Arc<RateLimiter>,
    /// Upstream fragment source
    pub generator: Arc<dyn CourseGenerator>,
    /// Retry supervision for upstream calls
    pub retry: RetryExecutor,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, generator: Arc<dyn CourseGenerator>) -> Self {
        let limiter = Arc::new(RateLimiter::new(config.rate_limit.clone()));
        let retry = RetryExecutor::new(config.retry.clone());
        Self {
            config: Arc::new(config),
            limiter,
            generator,
            retry,
        }
    }
}
