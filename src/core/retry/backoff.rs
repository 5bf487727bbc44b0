//! Exponential backoff delay computation

use crate::config::RetryConfig;
use rand::Rng;

/// Compute the delay before the next retry, in milliseconds.
///
/// `attempt_index` is zero-based: the delay applied after the first failed
/// attempt uses index 0. The exponential curve is capped at
/// `max_delay_ms`; when jitter is enabled a uniform ±25% factor is applied
/// to the capped delay, then floored to an integer.
pub fn next_delay(attempt_index: u32, config: &RetryConfig) -> u64 {
    let exponential = config.backoff_multiplier.powi(attempt_index as i32);
    let capped = (config.base_delay_ms as f64 * exponential).min(config.max_delay_ms as f64);

    if config.jitter {
        let factor = rand::thread_rng().gen_range(0.75..=1.25);
        (capped * factor).floor().max(0.0) as u64
    } else {
        capped.floor() as u64
    }
}
