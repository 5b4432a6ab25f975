//! HTTP entry point for the codebuddy gateway.

mod models;
mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use buddy_llm::OllamaClient;
use tracing::info;

const DEFAULT_PORT: u16 = 5002;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn port_from_env() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    init_tracing();

    let client = OllamaClient::from_env();
    info!(
        url = %client.config().api_url,
        model = %client.config().model,
        "gateway configured"
    );

    let app = routes::router(routes::AppState::new(Arc::new(client)));

    let addr = SocketAddr::from(([0, 0, 0, 0], port_from_env()));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("server running on port {}", addr.port());
    axum::serve(listener, app).await?;

    Ok(())
}
