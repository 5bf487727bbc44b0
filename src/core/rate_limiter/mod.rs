//! Sliding-window rate limiting
//!
//! Tracks recent request timestamps per client key and admits or rejects
//! requests against a fixed per-window budget. Records for abandoned
//! clients are pruned by a periodic background sweep.

mod limiter;
mod sweeper;
mod types;


pub use limiter::RateLimiter;
pub use sweeper::SweeperHandle;
pub use types::RateLimitDecision;
