use std::fs::OpenOptions;
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::{resolve_path, LoggingConfig};

/// Install the global tracing subscriber.
///
/// RUST_LOG wins over the configured filter. Console output goes to stderr,
/// stdout is reserved for the dashboard payload.
pub fn init(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(|_| config.filter.clone()));

    let file_layer = match &config.file {
        Some(configured) => {
            let path = resolve_path(configured);
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir)?;
            }
            let log_file = OpenOptions::new().create(true).append(true).open(&path)?;
            Some(fmt::layer().with_writer(Arc::new(log_file)).with_ansi(false))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()?;

    Ok(())
}
