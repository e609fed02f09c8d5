use anyhow::{bail, Result};
use billing_service::{
    config::{AppConfig, StoreKind},
    import, observability,
    store::Stores,
    AppState,
};
use std::{env, fs::File};

#[tokio::main]
async fn main() -> Result<()> {
    observability::init_tracing();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        bail!("usage: import_price_tiers <csv_file_path>");
    }
    let file_path = &args[1];

    let cfg = AppConfig::load()?;
    if cfg.store.kind == StoreKind::Memory {
        bail!("import_price_tiers needs a persistent store; set store.kind = \"postgres\"");
    }

    // Parse and validate the whole file before touching the store.
    let tiers = import::read_price_tiers(File::open(file_path)?)?;

    let state = AppState::new(Stores::connect(&cfg.store).await?);
    for tier in tiers {
        let created = state.prices.records().insert(tier).await?;
        tracing::info!(
            id = created.id,
            unit_range_lower = created.unit_range_lower,
            unit_range_upper = created.unit_range_upper,
            price = created.price,
            "price tier imported"
        );
    }

    Ok(())
}
