//! Configuration management for the gateway
//!
//! This module handles loading and validation of all gateway configuration.

mod models;
mod validation;

pub use models::{RateLimitConfig, RetryConfig, ServerConfig, UpstreamConfig};
pub use validation::Validate;

use crate::utils::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the gateway
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Rate limiter configuration
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
    /// Retry executor configuration
    #[serde(default)]
    pub retry: RetryConfig,
    /// Upstream generation endpoint configuration
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GatewayError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Self = serde_yaml::from_str(&content)
            .map_err(|e| GatewayError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();

        if let Ok(host) = std::env::var("COURSEFORGE_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("COURSEFORGE_PORT") {
            config.server.port = port
                .parse()
                .map_err(|e| GatewayError::Config(format!("Invalid COURSEFORGE_PORT: {}", e)))?;
        }
        if let Ok(url) = std::env::var("COURSEFORGE_UPSTREAM_URL") {
            config.upstream.url = url;
        }
        if let Ok(key) = std::env::var("COURSEFORGE_UPSTREAM_API_KEY") {
            config.upstream.api_key = Some(key);
        }
        if let Ok(max) = std::env::var("COURSEFORGE_MAX_REQUESTS") {
            config.rate_limit.max_requests = max.parse().map_err(|e| {
                GatewayError::Config(format!("Invalid COURSEFORGE_MAX_REQUESTS: {}", e))
            })?;
        }

        config.validate()?;
        Ok(config)
    }
}
