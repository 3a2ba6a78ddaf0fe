use contracts::enums::{Bucketing, RankBy};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub reports: ReportsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AnalyticsConfig {
    #[serde(default)]
    pub bucketing: Bucketing,
    #[serde(default = "default_top_products_limit")]
    pub top_products_limit: i64,
    #[serde(default)]
    pub top_products_by: RankBy,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    #[serde(default = "default_recent_transactions")]
    pub recent_transactions: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// EnvFilter directives, overridden by RUST_LOG
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Optional log file, relative paths resolve next to the executable
    #[serde(default)]
    pub file: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ReportsConfig {
    /// Directory for CSV exports, no export when unset
    #[serde(default)]
    pub output_dir: Option<String>,
}

fn default_top_products_limit() -> i64 {
    5
}

fn default_recent_transactions() -> usize {
    5
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            bucketing: Bucketing::default(),
            top_products_limit: default_top_products_limit(),
            top_products_by: RankBy::default(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            recent_transactions: default_recent_transactions(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            file: None,
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[analytics]
bucketing = "monthly"
top_products_limit = 5
top_products_by = "quantity"

[dashboard]
recent_transactions = 5

[logging]
filter = "info"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
///
/// Runs before logging is set up, so the chosen source is returned for the
/// caller to report.
pub fn load_config() -> anyhow::Result<(Config, ConfigSource)> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");
            if config_path.exists() {
                let config = load_config_from(&config_path)?;
                return Ok((config, ConfigSource::File(config_path)));
            }
        }
    }

    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok((config, ConfigSource::Embedded))
}

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    File(PathBuf),
    Embedded,
}

pub fn load_config_from(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)?;
    Ok(config)
}

/// Resolve a configured path: absolute paths as is, relative ones next to
/// the executable, falling back to the current directory
pub fn resolve_path(configured: &str) -> PathBuf {
    let path = Path::new(configured);

    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(path);
        }
    }

    PathBuf::from(configured)
}
