//! Tests for backoff scheduling and the retry executor

use super::backoff;
use super::executor::RetryExecutor;
use crate::config::RetryConfig;
use crate::utils::error::{GatewayError, Result};
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

fn fast_config(max_retries: u32) -> RetryConfig {
    RetryConfig {
        max_retries,
        base_delay_ms: 1,
        max_delay_ms: 5,
        backoff_multiplier: 2.0,
        jitter: false,
        timeout_per_attempt_ms: None,
    }
}

#[test]
fn backoff_is_monotonic_without_jitter() {
    let config = RetryConfig {
        base_delay_ms: 100,
        max_delay_ms: 30_000,
        backoff_multiplier: 2.0,
        jitter: false,
        ..Default::default()
    };

    let mut previous = 0;
    for attempt in 0..12 {
        let delay = backoff::next_delay(attempt, &config);
        assert!(delay >= previous, "delay shrank at attempt {}", attempt);
        assert!(delay <= config.max_delay_ms);
        previous = delay;
    }
}

#[test]
fn backoff_caps_at_max_delay() {
    let config = RetryConfig {
        base_delay_ms: 1_000,
        max_delay_ms: 4_000,
        backoff_multiplier: 3.0,
        jitter: false,
        ..Default::default()
    };

    assert_eq!(backoff::next_delay(0, &config), 1_000);
    assert_eq!(backoff::next_delay(1, &config), 3_000);
    assert_eq!(backoff::next_delay(2, &config), 4_000);
    assert_eq!(backoff::next_delay(10, &config), 4_000);
}

#[test]
fn backoff_jitter_stays_within_quarter_band() {
    let config = RetryConfig {
        base_delay_ms: 1_000,
        max_delay_ms: 30_000,
        backoff_multiplier: 2.0,
        jitter: true,
        ..Default::default()
    };

    // attempt 2 without jitter would be exactly 4_000ms
    for _ in 0..100 {
        let delay = backoff::next_delay(2, &config);
        assert!((3_000..=5_000).contains(&delay), "jittered delay {} out of band", delay);
    }
}

#[tokio::test]
async fn succeeds_after_transient_failures_and_reports_each_retry() {
    let attempts = Arc::new(AtomicU32::new(0));
    let hook_calls = Arc::new(AtomicU32::new(0));

    let hook_counter = hook_calls.clone();
    let executor = RetryExecutor::new(fast_config(3)).with_retry_hook(Arc::new(
        move |error, next_attempt, _delay| {
            assert!(error.is_retryable());
            assert!(next_attempt >= 1);
            hook_counter.fetch_add(1, Ordering::SeqCst);
        },
    ));

    let counter = attempts.clone();
    let result: Result<&str> = executor
        .execute(|| {
            let counter = counter.clone();
            async move {
                let n = counter.fetch_add(1, Ordering::SeqCst);
                if n < 2 {
                    Err(GatewayError::upstream("flaky"))
                } else {
                    Ok("done")
                }
            }
        })
        .await;

    assert_eq!(result.expect("should recover"), "done");
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
    assert_eq!(hook_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn exhausted_budget_returns_final_failure() {
    let attempts = Arc::new(AtomicU32::new(0));
    let executor = RetryExecutor::new(fast_config(2));

    let counter = attempts.clone();
    let result: Result<()> = executor
        .execute(|| {
            let counter = counter.clone();
            async move {
                let n = counter.fetch_add(1, Ordering::SeqCst);
                Err(GatewayError::upstream(format!("failure #{}", n + 1)))
            }
        })
        .await;

    // max_retries = 2 bounds total attempts to 3; the last error wins
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
    match result {
        Err(GatewayError::Upstream(msg)) => assert_eq!(msg, "failure #3"),
        other => panic!("unexpected outcome: {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn permanent_failure_is_not_retried() {
    let attempts = Arc::new(AtomicU32::new(0));
    let hook_calls = Arc::new(AtomicU32::new(0));

    let hook_counter = hook_calls.clone();
    let executor = RetryExecutor::new(fast_config(5))
        .with_retry_hook(Arc::new(move |_, _, _| {
            hook_counter.fetch_add(1, Ordering::SeqCst);
        }));

    let counter = attempts.clone();
    let result: Result<()> = executor
        .execute(|| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err(GatewayError::validation("bad input"))
            }
        })
        .await;

    assert!(matches!(result, Err(GatewayError::Validation(_))));
    assert_eq!(attempts.load(Ordering::SeqCst), 1);
    assert_eq!(hook_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn zero_retries_means_single_attempt() {
    let attempts = Arc::new(AtomicU32::new(0));
    let executor = RetryExecutor::new(fast_config(0));

    let counter = attempts.clone();
    let result: Result<()> = executor
        .execute(|| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err(GatewayError::upstream("down"))
            }
        })
        .await;

    assert!(result.is_err());
    assert_eq!(attempts.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn per_attempt_timeout_raises_timeout_failure() {
    let attempts = Arc::new(AtomicU32::new(0));
    let config = RetryConfig {
        timeout_per_attempt_ms: Some(10),
        ..fast_config(1)
    };
    let executor = RetryExecutor::new(config);

    let counter = attempts.clone();
    let result: Result<()> = executor
        .execute(|| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                tokio::time::sleep(std::time::Duration::from_secs(5)).await;
                Ok(())
            }
        })
        .await;

    // Both attempts time out; the timeout is classified retryable
    assert!(matches!(result, Err(GatewayError::Timeout(_))));
    assert_eq!(attempts.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn custom_predicate_overrides_default_classification() {
    let attempts = Arc::new(AtomicU32::new(0));
    let executor = RetryExecutor::new(fast_config(3))
        .with_predicate(Arc::new(|_| false));

    let counter = attempts.clone();
    let result: Result<()> = executor
        .execute(|| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err(GatewayError::upstream("would normally retry"))
            }
        })
        .await;

    assert!(result.is_err());
    assert_eq!(attempts.load(Ordering::SeqCst), 1);
}
