//! Course generation endpoint

use crate::core::generation::CourseRequest;
use crate::core::rate_limiter::RateLimitDecision;
use crate::core::streaming::{open_with_retry, relay_events};
use crate::server::routes::errors;
use crate::server::state::AppState;
use crate::utils::error::GatewayError;
use actix_web::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use actix_web::{HttpRequest, HttpResponse, HttpResponseBuilder, Result as ActixResult, web};
use futures::StreamExt;
use serde_json::json;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Configure course generation routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/v1").route("/courses/generate", web::post().to(generate_course)),
    );
}

/// Resolve the rate-limit bucket key from the caller's network address
fn client_key(req: &HttpRequest) -> String {
    req.connection_info()
        .realip_remote_addr()
        .map(|addr| addr.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Attach quota metadata from the admission decision.
///
/// Set on every response for this endpoint, including rejections, so
/// callers can pace themselves.
fn quota_headers(builder: &mut HttpResponseBuilder, decision: &RateLimitDecision) {
    builder.insert_header(("X-RateLimit-Limit", decision.limit.to_string()));
    builder.insert_header(("X-RateLimit-Remaining", decision.remaining.to_string()));
    builder.insert_header(("X-RateLimit-Reset", decision.reset_at_ms.to_string()));
}

/// Course generation endpoint
///
/// Admits the request against the caller's quota, opens the upstream
/// generation stream under retry supervision, and relays fragments to the
/// caller as server-sent events.
pub async fn generate_course(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<CourseRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    let request_id = format!("coursegen-{}", Uuid::new_v4());
    info!(
        "Course generation request {} for topic: {}",
        request_id, request.topic
    );

    if let Err(e) = request.validate() {
        warn!("Invalid generation request {}: {}", request_id, e);
        return Ok(errors::validation_error(&e.to_string()));
    }

    let key = client_key(&req);
    let decision = state.limiter.check_and_record(&key).await;
    if !decision.allowed {
        let retry_after = decision.retry_after_secs.unwrap_or(1);
        warn!(
            "Rate limit exceeded for {} (request {}), retry after {}s",
            key, request_id, retry_after
        );
        let mut builder = HttpResponse::TooManyRequests();
        quota_headers(&mut builder, &decision);
        return Ok(builder.json(json!({
            "error": "Too many requests. Please try again later.",
            "code": "RATE_LIMIT_EXCEEDED",
            "retryAfter": retry_after,
        })));
    }

    // Failures here never reach the client stream; they are retried per
    // config and, if exhausted, collapse into one clean error response.
    let opened = open_with_retry(state.generator.as_ref(), &request, &state.retry).await;
    let (first, rest) = match opened {
        Ok(parts) => parts,
        Err(e) => {
            error!("Generation {} failed before streaming: {}", request_id, e);
            let mut builder = HttpResponse::BadGateway();
            quota_headers(&mut builder, &decision);
            return Ok(builder.json(json!({
                "error": format!("Course generation failed: {}", e),
            })));
        }
    };

    let frames =
        relay_events(first, rest).map(|event| Ok::<_, GatewayError>(event.to_sse_bytes()));

    let mut builder = HttpResponse::Ok();
    quota_headers(&mut builder, &decision);
    Ok(builder
        .insert_header((CONTENT_TYPE, "text/event-stream"))
        .insert_header((CACHE_CONTROL, "no-cache"))
        .insert_header(("Connection", "keep-alive"))
        .streaming(frames))
}
