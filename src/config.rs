use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level abushakir configuration (all fields optional).
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AbushakirConfig {
    /// Output defaults, overridable per invocation by CLI flags.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output presentation defaults.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format: "text" or "json".
    #[serde(default = "default_format")]
    pub format: String,

    /// Default era for Ethiopic input dates: "AM" or "AA".
    #[serde(default = "default_era")]
    pub era: String,

    /// Whether week queries include Saturdays and Sundays.
    #[serde(default = "default_true")]
    pub include_weekends: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            era: default_era(),
            include_weekends: true,
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}
fn default_era() -> String {
    "AM".to_string()
}
fn default_true() -> bool {
    true
}

/// Loads the configuration file, or the defaults when no path is given.
pub fn load(path: Option<&Path>) -> Result<AbushakirConfig> {
    let Some(path) = path else {
        return Ok(AbushakirConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("invalid config: {}", path.display()))
}
