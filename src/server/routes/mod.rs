//! HTTP route modules

pub mod courses;
pub mod health;

/// Error response helpers
pub mod errors {
    use actix_web::HttpResponse;
    use serde_json::json;

    /// Create a validation error response
    pub fn validation_error(message: &str) -> HttpResponse {
        HttpResponse::BadRequest().json(json!({ "error": message }))
    }
}
