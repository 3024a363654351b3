use crate::domain_model::Severity;
use anyhow::{Result, anyhow};
use config::{Config, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub log: Log,
}

#[derive(Debug, Deserialize)]
pub struct Log {
    /// `tracing` filter directive for the process subscriber.
    pub filter: String,
    /// Threshold of the component loggers: a level name or a rank.
    pub level: Severity,
}

#[cfg(debug_assertions)]
const SETTINGS_PATH: &str = "settings/dev.toml";
#[cfg(not(debug_assertions))]
const SETTINGS_PATH: &str = "settings/release.toml";

/// Loads settings from `path` (or the build's default file), then applies
/// `BUNDLE_LOGGER__LOG__LEVEL` style environment overrides.
pub fn parse_settings(path: Option<&str>) -> Result<Settings> {
    let path = path.unwrap_or(SETTINGS_PATH);

    let settings: Settings = Config::builder()
        .add_source(File::with_name(path))
        .add_source(Environment::with_prefix("BUNDLE_LOGGER").separator("__"))
        .build()
        .map_err(|e| anyhow!(e))?
        .try_deserialize()
        .map_err(|e| anyhow!(e))?;

    Ok(settings)
}
