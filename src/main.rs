//! cvscan HTTP server entry point
//!
//! Starts the REST API server for the resume search service.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cvscan::core::config::Config;
use cvscan::core::services::Services;
use cvscan::http::{self, middleware as http_middleware};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cvscan=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting cvscan resume search service");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::load()?;
    config.log_config();

    let max_upload_bytes = config.upload.max_file_size_mb * 1024 * 1024;

    // Create shared services
    let services = Arc::new(Services::new(config.clone()));

    // Build the API router
    let app = Router::new()
        // Health check endpoint
        .route("/health", get(http::health_handler))
        // API endpoints
        .route("/api/cvs/upload", post(http::upload_handler))
        .route("/api/cvs/search", post(http::search_handler))
        .route(
            "/api/cvs",
            get(http::list_documents_handler).delete(http::clear_documents_handler),
        )
        // Size ceiling applies before extraction ever runs
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        // Add middleware
        .layer(middleware::from_fn(http_middleware::log_request))
        .layer(CorsLayer::permissive())
        // Add shared state
        .with_state(services);

    // Bind to address and start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("Service ready - Health check at http://{}/health", addr);

    // Serve the application
    axum::serve(listener, app).await?;

    Ok(())
}
