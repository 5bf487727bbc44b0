//! Background cleanup of idle rate-limit records

use super::limiter::RateLimiter;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

impl RateLimiter {
    /// Remove records with no live timestamps that have been idle for more
    /// than twice the window, bounding memory for abandoned clients.
    ///
    /// Keys with live timestamps are left untouched, so a sweep can never
    /// disturb an in-flight admission sequence.
    pub async fn sweep(&self) {
        self.sweep_at(Self::now_ms()).await;
    }

    pub(crate) async fn sweep_at(&self, now_ms: i64) {
        let window_ms = self.config.window_ms as i64;
        let window_start = now_ms - window_ms;
        let max_idle_ms = window_ms * 2;

        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, record| {
            let has_live = record.timestamps.iter().any(|&t| t > window_start);
            has_live || now_ms - record.last_seen_ms < max_idle_ms
        });

        let removed = before - entries.len();
        if removed > 0 {
            debug!("Swept {} idle rate-limit records", removed);
        }
    }

    /// Start the periodic sweep task.
    ///
    /// The returned handle stops the task when dropped, so tests (and
    /// shutdown paths) never depend on a detached wall-clock timer.
    pub fn start_sweeper(self: &Arc<Self>) -> SweeperHandle {
        let limiter = Arc::clone(self);
        let period = Duration::from_secs(self.config.sweep_interval_secs.max(1));
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.tick().await; // the first tick completes immediately
            loop {
                interval.tick().await;
                limiter.sweep().await;
            }
        });
        SweeperHandle { handle }
    }
}

/// Handle owning the periodic sweep task
pub struct SweeperHandle {
    handle: JoinHandle<()>,
}

impl SweeperHandle {
    /// Stop the sweep task
    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for SweeperHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
