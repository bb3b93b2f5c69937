//! Fleet console server - telemetry simulation and alert feed backend

use anyhow::Result;
use axum::routing::get;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fleet_server::config::Config;
use fleet_server::loops::tick_loop::TickScheduler;
use fleet_server::state::AppState;
use fleet_server::{api, seed};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fleet_server=debug".parse()?),
        )
        .init();

    tracing::info!("Starting fleet console server...");

    let config = Config::from_env();
    let port = config.server_port;
    let state = Arc::new(AppState::new());
    seed::load_demo_fleet(&state);

    let mut scheduler = TickScheduler::new();
    scheduler.start(state.clone(), &config)?;

    // Build the app
    let app = api::routes()
        .route("/health", get(|| async { "OK" }))
        .route("/v1/stream", get(api::ws::ws_handler))
        .with_state(state)
        .layer(CorsLayer::permissive());

    // Run server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    scheduler.stop();
    Ok(())
}
