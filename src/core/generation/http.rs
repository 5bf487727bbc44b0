//! HTTP-backed course generator

use super::{CourseGenerator, CourseRequest, FragmentStream};
use crate::config::UpstreamConfig;
use crate::utils::error::{GatewayError, Result};
use futures::StreamExt;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

/// Course generator that streams fragments from an upstream HTTP endpoint
pub struct HttpCourseGenerator {
    client: reqwest::Client,
    config: UpstreamConfig,
}

impl HttpCourseGenerator {
    /// Create a generator from upstream configuration
    pub fn new(config: UpstreamConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.connect_timeout_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;
        Ok(Self { client, config })
    }

    /// Map a non-success upstream status to the failure taxonomy.
    ///
    /// 5xx and throttling are transient; everything else is permanent.
    fn classify_status(status: StatusCode) -> GatewayError {
        if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
            GatewayError::Upstream(format!("upstream returned {}", status))
        } else {
            GatewayError::Internal(format!("upstream returned {}", status))
        }
    }
}

#[async_trait::async_trait]
impl CourseGenerator for HttpCourseGenerator {
    async fn start(&self, request: &CourseRequest) -> Result<FragmentStream> {
        debug!("Opening upstream generation stream for topic: {}", request.topic);

        let mut req = self.client.post(&self.config.url).json(request);
        if let Some(key) = &self.config.api_key {
            req = req.bearer_auth(key);
        }

        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Self::classify_status(status));
        }

        let fragments = response
            .bytes_stream()
            .map(|chunk| match chunk {
                Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
                Err(e) => Err(GatewayError::Upstream(format!("stream read failed: {}", e))),
            })
            .boxed();

        Ok(fragments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_classify_as_transient() {
        assert!(HttpCourseGenerator::classify_status(StatusCode::INTERNAL_SERVER_ERROR).is_retryable());
        assert!(HttpCourseGenerator::classify_status(StatusCode::SERVICE_UNAVAILABLE).is_retryable());
        assert!(HttpCourseGenerator::classify_status(StatusCode::TOO_MANY_REQUESTS).is_retryable());
    }

    #[test]
    fn client_errors_classify_as_permanent() {
        assert!(!HttpCourseGenerator::classify_status(StatusCode::NOT_FOUND).is_retryable());
        assert!(!HttpCourseGenerator::classify_status(StatusCode::UNAUTHORIZED).is_retryable());
    }
}
