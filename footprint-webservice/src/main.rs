use axum::{routing::get, routing::post, Router};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Module declarations for our application structure
mod error;
mod handler;
mod model;
mod openapi;

use crate::error::AppError;
use crate::openapi::ApiDoc;

#[tokio::main]
async fn main() {
    // Initialize tracing to capture logs from `log` crate and `tracing` calls.
    // Fallback to "info" level if RUST_LOG is not set.
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,footprint_webservice=debug,footprint_core=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .init();

    // Bridge log crate events to tracing.
    if let Err(e) = tracing_log::LogTracer::init() {
        eprintln!("Failed to set logger: {}", e);
    }

    tracing::info!("Tracing initialized. Starting footprint webservice...");

    // Define CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build our application router
    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(health_check))
        .route("/calculate", post(handler::calculate_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Run the server
    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    tracing::info!("Listening on {}", addr);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind to address {}: {}", addr, e);
            return;
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        let err = AppError::Internal(e.to_string());
        tracing::error!("Server error: {}", err);
    }
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is healthy", body = String)
    )
)]
pub async fn health_check() -> &'static str {
    tracing::debug!("Health check endpoint hit");
    "Footprint webservice is running!"
}
