use anyhow::Context;
use mwcheck_domain::{CheckerConfig, CliOverrides};
use sqlx::SqlitePool;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub fn load_config(
    path: Option<&str>,
    overrides: &CliOverrides,
) -> anyhow::Result<CheckerConfig> {
    let mut config = match path {
        Some(p) => {
            let raw = std::fs::read_to_string(p)
                .with_context(|| format!("read config file {p}"))?;
            toml::from_str(&raw).with_context(|| format!("parse config file {p}"))?
        }
        None => CheckerConfig::default(),
    };
    config.apply_overrides(overrides);
    Ok(config)
}

/// RUST_LOG wins over the configured level when set.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

pub async fn init_database(path: &Path) -> anyhow::Result<SqlitePool> {
    info!("opening database {}", path.display());
    mwcheck_infrastructure::database::create_pool(path)
        .await
        .with_context(|| format!("open database {}", path.display()))
}
