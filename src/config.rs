//! Configuration types for drip-edge

use std::collections::HashMap;

use anyhow::Context;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::devig::DevigMethod;
use crate::insight::{INTL_THRESHOLD, MIN_FEATURED_GAP};
use crate::telemetry::LogFormat;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub devig: DevigConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Edge engine configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Minimum gap to surface international sportsbooks (percentage points)
    #[serde(default = "default_intl_threshold")]
    pub intl_threshold: Decimal,

    /// Minimum gap to feature a fixture (percentage points)
    #[serde(default = "default_min_featured_gap")]
    pub min_featured_gap: Decimal,

    /// Devig applied to each sportsbook's line before aggregation
    #[serde(default)]
    pub devig: DevigMethod,

    /// Per-source consensus weights; empty means a plain mean
    #[serde(default)]
    pub source_weights: HashMap<String, f64>,
}

fn default_intl_threshold() -> Decimal {
    INTL_THRESHOLD
}
fn default_min_featured_gap() -> Decimal {
    MIN_FEATURED_GAP
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            intl_threshold: INTL_THRESHOLD,
            min_featured_gap: MIN_FEATURED_GAP,
            devig: DevigMethod::None,
            source_weights: HashMap::new(),
        }
    }
}

/// Power-method solver configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DevigConfig {
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

fn default_max_iterations() -> u32 {
    100
}
fn default_tolerance() -> f64 {
    1e-9
}

impl Default for DevigConfig {
    fn default() -> Self {
        Self {
            max_iterations: default_max_iterations(),
            tolerance: default_tolerance(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }
}
