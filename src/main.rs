use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::CorsLayer;
use tracing::info;

use chat_relay::{
    config::Config, routes, services::gemini::GeminiClient, state::AppState, telemetry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init();

    let config = Config::from_env().context("invalid configuration")?;
    let state = Arc::new(AppState::new(GeminiClient::from_config(&config)));

    let app = routes::create_router(&config.static_dir)
        .with_state(state)
        .layer(CorsLayer::very_permissive());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(%addr, model = %config.model, "chat relay listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
