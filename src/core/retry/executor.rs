//! Retry execution with timeout and failure classification

use super::backoff;
use crate::config::RetryConfig;
use crate::utils::error::{GatewayError, Result};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Decides whether a classified failure may be retried
pub type RetryPredicate = Arc<dyn Fn(&GatewayError) -> bool + Send + Sync>;

/// Observes an intermediate failure: `(error, next_attempt, delay_ms)`
pub type RetryHook = Arc<dyn Fn(&GatewayError, u32, u64) + Send + Sync>;

/// Executes asynchronous operations under a retry policy.
///
/// Exactly one of a single success or a final failure is observable to the
/// caller; intermediate failures are only visible through the retry hook.
#[derive(Clone)]
pub struct RetryExecutor {
    config: RetryConfig,
    predicate: Option<RetryPredicate>,
    on_retry: Option<RetryHook>,
}

impl RetryExecutor {
    /// Create an executor with the default classification
    pub fn new(config: RetryConfig) -> Self {
        Self {
            config,
            predicate: None,
            on_retry: None,
        }
    }

    /// Replace the default retry-eligibility classification
    pub fn with_predicate(mut self, predicate: RetryPredicate) -> Self {
        self.predicate = Some(predicate);
        self
    }

    /// Observe intermediate failures before each retry
    pub fn with_retry_hook(mut self, hook: RetryHook) -> Self {
        self.on_retry = Some(hook);
        self
    }

    /// Run `operation` until it succeeds or the retry budget is exhausted.
    ///
    /// Each attempt races against the per-attempt timeout when one is
    /// configured; a timeout cancels the pending attempt and counts as a
    /// retryable failure. Total attempts are bounded by `max_retries + 1`,
    /// and the final failure is returned unchanged.
    pub async fn execute<F, Fut, T>(&self, mut operation: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut attempt: u32 = 0;

        loop {
            let outcome = match self.config.timeout_per_attempt_ms {
                Some(timeout_ms) => {
                    let deadline = Duration::from_millis(timeout_ms);
                    match tokio::time::timeout(deadline, operation()).await {
                        Ok(result) => result,
                        Err(_) => Err(GatewayError::Timeout(format!(
                            "attempt {} exceeded {}ms",
                            attempt + 1,
                            timeout_ms
                        ))),
                    }
                }
                None => operation().await,
            };

            match outcome {
                Ok(value) => {
                    if attempt > 0 {
                        debug!("Operation succeeded after {} attempts", attempt + 1);
                    }
                    return Ok(value);
                }
                Err(error) => {
                    let retryable = match &self.predicate {
                        Some(predicate) => predicate(&error),
                        None => error.is_retryable(),
                    };

                    if !retryable {
                        debug!("Non-retryable error: {}", error);
                        return Err(error);
                    }
                    if attempt >= self.config.max_retries {
                        warn!(
                            "Max retries ({}) exceeded. Last error: {}",
                            self.config.max_retries, error
                        );
                        return Err(error);
                    }

                    let delay_ms = backoff::next_delay(attempt, &self.config);
                    if let Some(hook) = &self.on_retry {
                        hook(&error, attempt + 1, delay_ms);
                    }
                    warn!(
                        "Attempt {} failed ({}), retrying in {}ms",
                        attempt + 1,
                        error,
                        delay_ms
                    );
                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                    attempt += 1;
                }
            }
        }
    }
}
