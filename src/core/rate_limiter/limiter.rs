//! Core rate limiter implementation

use super::types::{ClientRecord, RateLimitDecision};
use crate::config::RateLimitConfig;
use crate::utils::error::{GatewayError, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Sliding-window rate limiter
///
/// The check-and-append for one client key is atomic with respect to other
/// tasks: both happen under a single write-lock acquisition.
pub struct RateLimiter {
    /// Rate limit configuration
    pub(super) config: RateLimitConfig,
    /// Request records by client key
    pub(super) entries: Arc<RwLock<HashMap<String, ClientRecord>>>,
}

impl RateLimiter {
    /// Create a new rate limiter
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub(super) fn now_ms() -> i64 {
        chrono::Utc::now().timestamp_millis()
    }

    /// Atomically check and record a request for `key`.
    ///
    /// Admission appends the current timestamp to the caller's record;
    /// rejection records nothing, so a client hammering the endpoint does
    /// not delay its own reset.
    pub async fn check_and_record(&self, key: &str) -> RateLimitDecision {
        self.check_and_record_at(key, Self::now_ms()).await
    }

    /// Check and record against an explicit clock. Tests drive this
    /// directly so they never sleep against the production window.
    pub(crate) async fn check_and_record_at(&self, key: &str, now_ms: i64) -> RateLimitDecision {
        let window_ms = self.config.window_ms as i64;
        let window_start = now_ms - window_ms;
        let limit = self.config.max_requests;

        let mut entries = self.entries.write().await;
        // Avoid a String allocation when the key already exists
        let record = if let Some(r) = entries.get_mut(key) {
            r
        } else {
            entries.entry(key.to_string()).or_default()
        };
        record.last_seen_ms = now_ms;

        // Lazily prune timestamps that fell out of the window
        record.timestamps.retain(|&t| t > window_start);

        let current = record.timestamps.len() as u32;
        if current >= limit {
            let reset_at_ms = record
                .timestamps
                .first()
                .map(|&oldest| oldest + window_ms)
                .unwrap_or(now_ms + window_ms);
            let retry_after_secs = ((reset_at_ms - now_ms).max(0) as u64).div_ceil(1000);

            debug!(
                "Rate limit exceeded for {}: {}/{} requests",
                key, current, limit
            );

            return RateLimitDecision {
                allowed: false,
                limit,
                remaining: 0,
                reset_at_ms,
                retry_after_secs: Some(retry_after_secs),
            };
        }

        record.timestamps.push(now_ms);
        let oldest = record.timestamps.first().copied().unwrap_or(now_ms);

        RateLimitDecision {
            allowed: true,
            limit,
            remaining: limit - record.timestamps.len() as u32,
            reset_at_ms: oldest + window_ms,
            retry_after_secs: None,
        }
    }

    /// Exception-style admission for call sites that prefer short-circuiting
    pub async fn enforce(&self, key: &str) -> Result<RateLimitDecision> {
        let decision = self.check_and_record(key).await;
        if decision.allowed {
            Ok(decision)
        } else {
            Err(GatewayError::RateLimited {
                retry_after_secs: decision.retry_after_secs.unwrap_or(1),
            })
        }
    }
}

impl Clone for RateLimiter {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            entries: self.entries.clone(),
        }
    }
}
