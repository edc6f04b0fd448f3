use anyhow::Context;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

use shared::format::NumberLocale;

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub converter: ConverterConfig,
    #[serde(default)]
    pub tracing: TracingConfig,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ConverterConfig {
    #[serde(default)]
    pub locale: NumberLocale,
    /// Used when a conversion doesn't name its own rate.
    #[serde(default = "default_rate")]
    pub rate: Decimal,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            locale: NumberLocale::default(),
            rate: default_rate(),
        }
    }
}

fn default_rate() -> Decimal {
    Decimal::ONE
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TracingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

impl Config {
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let config_file = std::fs::read_to_string(path).context("Couldn't read config file")?;
        Self::from_yaml(&config_file)
    }

    fn from_yaml(contents: &str) -> anyhow::Result<Self> {
        let config: Config =
            serde_yaml::from_str(contents).context("Couldn't parse config file")?;
        Ok(config)
    }
}
