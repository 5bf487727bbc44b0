//! Health check endpoint

use actix_web::{HttpResponse, Result as ActixResult};
use serde_json::json;
use tracing::debug;

/// Basic health check, used by load balancers and monitoring
pub async fn health_check() -> ActixResult<HttpResponse> {
    debug!("Health check requested");

    Ok(HttpResponse::Ok().json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    })))
}
