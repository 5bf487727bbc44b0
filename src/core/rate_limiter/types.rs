//! Rate limiter types and data structures

/// Outcome of one admission check
#[derive(Debug, Clone)]
pub struct RateLimitDecision {
    /// Whether the request is admitted
    pub allowed: bool,
    /// Maximum requests allowed per window
    pub limit: u32,
    /// Remaining requests in the current window
    pub remaining: u32,
    /// When the caller's window frees up (epoch milliseconds)
    pub reset_at_ms: i64,
    /// Seconds to wait before retrying (only set when rejected)
    pub retry_after_secs: Option<u64>,
}

/// Per-client request record
///
/// Owned exclusively by the limiter; mutated only under its write lock.
#[derive(Debug, Default)]
pub(super) struct ClientRecord {
    /// Admission timestamps inside the active window (epoch milliseconds)
    pub(super) timestamps: Vec<i64>,
    /// Last time this record was touched, for idle cleanup
    pub(super) last_seen_ms: i64,
}
