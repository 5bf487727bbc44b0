//! Configuration section types and their serde defaults

use serde::{Deserialize, Serialize};

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_window_ms() -> u64 {
    900_000 // 15 minutes
}

fn default_max_requests() -> u32 {
    10
}

fn default_sweep_interval_secs() -> u64 {
    60
}

fn default_max_retries() -> u32 {
    3
}

fn default_base_delay_ms() -> u64 {
    1_000
}

fn default_max_delay_ms() -> u64 {
    30_000
}

fn default_backoff_multiplier() -> f64 {
    2.0
}

fn default_true() -> bool {
    true
}

fn default_timeout_per_attempt_ms() -> Option<u64> {
    Some(60_000)
}

fn default_upstream_url() -> String {
    "http://127.0.0.1:8081/generate".to_string()
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Whether permissive CORS is enabled
    #[serde(default = "default_true")]
    pub cors_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_enabled: true,
        }
    }
}

/// Sliding-window rate limiter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Window length (milliseconds)
    #[serde(default = "default_window_ms")]
    pub window_ms: u64,
    /// Maximum admitted requests per client key per window
    #[serde(default = "default_max_requests")]
    pub max_requests: u32,
    /// Interval between background sweeps of idle records (seconds)
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            window_ms: default_window_ms(),
            max_requests: default_max_requests(),
            sweep_interval_secs: default_sweep_interval_secs(),
        }
    }
}

/// Retry executor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum retries after the initial attempt
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Initial delay (milliseconds)
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,
    /// Maximum delay (milliseconds)
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
    /// Exponential growth factor between attempts
    #[serde(default = "default_backoff_multiplier")]
    pub backoff_multiplier: f64,
    /// Add uniform random jitter of ±25% to each delay
    #[serde(default = "default_true")]
    pub jitter: bool,
    /// Per-attempt timeout (milliseconds); `None` disables the timeout
    #[serde(default = "default_timeout_per_attempt_ms")]
    pub timeout_per_attempt_ms: Option<u64>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            base_delay_ms: default_base_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
            backoff_multiplier: default_backoff_multiplier(),
            jitter: true,
            timeout_per_attempt_ms: default_timeout_per_attempt_ms(),
        }
    }
}

/// Upstream generation endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Generation endpoint URL
    #[serde(default = "default_upstream_url")]
    pub url: String,
    /// Optional bearer token for the upstream endpoint
    #[serde(default)]
    pub api_key: Option<String>,
    /// Connect timeout for the upstream client (seconds)
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: default_upstream_url(),
            api_key: None,
            connect_timeout_secs: None,
        }
    }
}
