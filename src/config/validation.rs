//! Configuration validation

use super::models::{RateLimitConfig, RetryConfig, ServerConfig, UpstreamConfig};
use super::Config;
use crate::utils::error::{GatewayError, Result};

/// Validation for configuration sections
pub trait Validate {
    /// Check the configuration for invalid values
    fn validate(&self) -> Result<()>;
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(GatewayError::Config("Server host must not be empty".to_string()));
        }
        if self.port == 0 {
            return Err(GatewayError::Config("Server port must not be 0".to_string()));
        }
        Ok(())
    }
}

impl Validate for RateLimitConfig {
    fn validate(&self) -> Result<()> {
        if self.window_ms == 0 {
            return Err(GatewayError::Config(
                "Rate limit window must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Validate for RetryConfig {
    fn validate(&self) -> Result<()> {
        if self.backoff_multiplier <= 1.0 {
            return Err(GatewayError::Config(
                "Retry backoff multiplier must be greater than 1.0".to_string(),
            ));
        }
        if self.max_delay_ms < self.base_delay_ms {
            return Err(GatewayError::Config(
                "Retry max delay must not be below the base delay".to_string(),
            ));
        }
        if self.timeout_per_attempt_ms == Some(0) {
            return Err(GatewayError::Config(
                "Per-attempt timeout must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Validate for UpstreamConfig {
    fn validate(&self) -> Result<()> {
        if self.url.is_empty() {
            return Err(GatewayError::Config("Upstream URL must not be empty".to_string()));
        }
        Ok(())
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<()> {
        self.server.validate()?;
        self.rate_limit.validate()?;
        self.retry.validate()?;
        self.upstream.validate()?;
        Ok(())
    }
}
