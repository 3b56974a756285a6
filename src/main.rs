//! seatlock server entry point.
//!
//! Starts the Axum HTTP server over a PostgreSQL-backed booking core.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use seatlock::api;
use seatlock::app_state::AppState;
use seatlock::config::AppConfig;
use seatlock::persistence::{EntityRepository, schema};
use seatlock::service::BookingService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting seatlock");

    // Connect to the store and ensure the schema exists
    let pool = schema::connect(&config).await?;
    schema::init_schema(&pool).await?;

    // Build application state
    let repository = EntityRepository::new(pool.clone());
    let bookings = Arc::new(BookingService::new(repository.clone()));
    let app_state = AppState {
        repository,
        bookings,
    };

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    #[cfg(feature = "swagger-ui")]
    let app = {
        use utoipa::OpenApi;
        app.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", api::ApiDoc::openapi()),
        )
    };

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Drain pooled connections before exit
    pool.close().await;
    tracing::info!("shutdown complete");

    Ok(())
}

/// Resolves when the process receives ctrl-c / SIGINT.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(err) => {
            // Without a signal handler there is no shutdown trigger; keep
            // serving rather than exiting immediately.
            tracing::warn!(%err, "failed to install ctrl-c handler");
            std::future::pending::<()>().await;
        }
    }
}
