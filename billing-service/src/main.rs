use anyhow::Result;
use billing_service::{config::AppConfig, http, metrics_server, observability, store::Stores, AppState};
use std::net::SocketAddr;

#[tokio::main]
async fn main() -> Result<()> {
    observability::init_tracing();

    // Load configuration
    let cfg = AppConfig::load()?;

    // Start metrics server if configured
    if let Some(metrics_cfg) = &cfg.metrics {
        metrics_server::init(&metrics_cfg.bind_addr)?;
    }

    let stores = Stores::connect(&cfg.store).await?;
    let app = http::router(AppState::new(stores));

    let addr: SocketAddr = cfg
        .http
        .bind_addr
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid http.bind_addr: {e}"))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, store = ?cfg.store.kind, "billing service listening");

    axum::serve(listener, app).await?;

    Ok(())
}
