//! HTTP server core implementation

use crate::config::{Config, ServerConfig};
use crate::core::generation::HttpCourseGenerator;
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};
use actix_cors::Cors;
use actix_web::{App, HttpServer as ActixHttpServer, middleware::Logger, web};
use std::sync::Arc;
use tracing::info;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let generator = Arc::new(HttpCourseGenerator::new(config.upstream.clone())?);
        let state = AppState::new(config.clone(), generator);

        Ok(Self {
            config: config.server.clone(),
            state,
        })
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = format!("{}:{}", self.config.host, self.config.port);
        info!("Starting HTTP server on {}", bind_addr);

        // Periodic pruning of abandoned limiter records; stops when the
        // handle is dropped at shutdown
        let _sweeper = self.state.limiter.start_sweeper();

        let cors_enabled = self.config.cors_enabled;
        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || {
            let cors = if cors_enabled {
                Cors::permissive()
            } else {
                Cors::default()
            };

            App::new()
                .app_data(state.clone())
                .wrap(cors)
                .wrap(Logger::default())
                .route("/health", web::get().to(routes::health::health_check))
                .configure(routes::courses::configure_routes)
        })
        .bind(&bind_addr)
        .map_err(|e| GatewayError::Config(format!("Failed to bind {}: {}", bind_addr, e)))?
        .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| GatewayError::Internal(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }
}
