//! LastActive API server binary entrypoint.

use std::net::SocketAddr;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use lastactive_common::config::AppConfig;

use lastactive_api::routes::create_router;
use lastactive_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("lastactive_api=debug,lastactive_explorer=debug,tower_http=debug")
        }))
        .init();

    tracing::info!("Starting LastActive API server...");

    // Load configuration
    let config = AppConfig::from_env()?;
    let addr: SocketAddr = format!("{}:{}", config.bind_host, config.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid listen address: {e}"))?;

    tracing::info!(
        explorer = %config.explorer_base_url,
        upstream_timeout_secs = config.upstream_timeout_secs,
        timestamp_zone = %config.timestamp_zone,
        "Explorer client configured"
    );

    // Build application state
    let state = AppState::from_config(config)?;

    // Build router
    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    tracing::info!("API server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Received shutdown signal, stopping gracefully...");
        })
        .await?;

    tracing::info!("LastActive API server stopped.");
    Ok(())
}
