//! Error handling for the gateway
//!
//! This module defines the error taxonomy shared by the admission, retry,
//! and relay layers, together with its HTTP mapping.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;

/// Result type alias for the gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Caller exceeded its request quota
    #[error("Rate limit exceeded, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until the caller's window frees up
        retry_after_secs: u64,
    },

    /// A single attempt exceeded its timeout
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Transient upstream failure (5xx-equivalent, throttling, stream reads)
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Accumulated stream content is not a valid structured payload
    #[error("Payload parse error: {0}")]
    PayloadParse(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        GatewayError::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        GatewayError::Validation(msg.into())
    }

    /// Create a timeout error
    pub fn timeout(msg: impl Into<String>) -> Self {
        GatewayError::Timeout(msg.into())
    }

    /// Create a transient upstream error
    pub fn upstream(msg: impl Into<String>) -> Self {
        GatewayError::Upstream(msg.into())
    }

    /// Create a payload parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        GatewayError::PayloadParse(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        GatewayError::Internal(msg.into())
    }

    /// Whether a failed attempt may be retried.
    ///
    /// Timeouts, classified-transient upstream failures, and known network
    /// error conditions are retryable; everything else is permanent.
    pub fn is_retryable(&self) -> bool {
        match self {
            GatewayError::Timeout(_) | GatewayError::Upstream(_) => true,
            GatewayError::HttpClient(e) => {
                e.is_timeout()
                    || e.is_connect()
                    || e.status()
                        .is_some_and(|s| s.is_server_error() || s == StatusCode::TOO_MANY_REQUESTS)
            }
            GatewayError::Io(_) => true,
            _ => false,
        }
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            GatewayError::Validation(_) => StatusCode::BAD_REQUEST,
            GatewayError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            GatewayError::Upstream(_) | GatewayError::HttpClient(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            GatewayError::RateLimited { retry_after_secs } => {
                HttpResponse::build(self.status_code()).json(json!({
                    "error": "Too many requests. Please try again later.",
                    "code": "RATE_LIMIT_EXCEEDED",
                    "retryAfter": retry_after_secs,
                }))
            }
            GatewayError::Validation(msg) => {
                HttpResponse::build(self.status_code()).json(json!({ "error": msg }))
            }
            // Never leak raw internals to the caller
            _ => HttpResponse::build(self.status_code()).json(json!({
                "error": self.to_string(),
            })),
        }
    }
}
