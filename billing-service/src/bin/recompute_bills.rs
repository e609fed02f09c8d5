use anyhow::{bail, Result};
use billing_service::{
    config::{AppConfig, StoreKind},
    observability,
    store::Stores,
    AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    observability::init_tracing();

    let cfg = AppConfig::load()?;
    if cfg.store.kind == StoreKind::Memory {
        bail!("recompute_bills needs a persistent store; set store.kind = \"postgres\"");
    }

    let state = AppState::new(Stores::connect(&cfg.store).await?);

    // Bills are cached on the customer rows; refresh them against the current tariff.
    let updated = state.customers.recompute_bills().await?;
    tracing::info!(updated_customers = updated, "customer bills recomputed");

    Ok(())
}
