use analytics::dashboards::build_dashboard;
use analytics::reports::export::write_csv_file;
use analytics::reports::{r200_inventory, r201_sales, r202_low_stock};
use analytics::shared::config::{load_config, resolve_path, ConfigSource};
use analytics::shared::format::format_currency;
use analytics::shared::logger;
use anyhow::Context;
use contracts::shared::snapshot::Snapshot;

/// Usage: analytics <snapshot.json> [search query]
fn main() -> anyhow::Result<()> {
    let (config, source) = load_config()?;
    logger::init(&config.logging)?;

    match &source {
        ConfigSource::File(path) => tracing::info!("Loaded config from: {}", path.display()),
        ConfigSource::Embedded => tracing::info!("Using default embedded configuration"),
    }

    let mut args = std::env::args().skip(1);
    let snapshot_path = args
        .next()
        .context("usage: analytics <snapshot.json> [search query]")?;
    let query: Vec<String> = args.collect();
    let query = (!query.is_empty()).then(|| query.join(" "));

    let contents = std::fs::read_to_string(&snapshot_path)
        .with_context(|| format!("Failed to read snapshot {}", snapshot_path))?;
    let snapshot: Snapshot = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse snapshot {}", snapshot_path))?;

    tracing::info!(
        "Snapshot: {} products, {} categories, {} transactions",
        snapshot.products.len(),
        snapshot.categories.len(),
        snapshot.transactions.len()
    );

    let report = build_dashboard(&snapshot, &config, query.as_deref());

    tracing::info!(
        "Stock value {}, {} low stock products",
        format_currency(report.overview.stock_value),
        report.overview.low_stock_products
    );

    if let Some(output_dir) = &config.reports.output_dir {
        let dir = resolve_path(output_dir);
        write_csv_file(
            &r200_inventory::inventory_report(&snapshot.products, &snapshot.categories),
            &dir.join("inventory.csv"),
        )?;
        write_csv_file(
            &r201_sales::sales_report(&snapshot.transactions, &snapshot.products),
            &dir.join("sales.csv"),
        )?;
        write_csv_file(
            &r202_low_stock::low_stock_report(&snapshot.products, &snapshot.categories),
            &dir.join("low_stock.csv"),
        )?;
    }

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
