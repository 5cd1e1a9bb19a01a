use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_match_limit")]
    pub default_limit: usize,
    #[serde(default = "default_min_score")]
    pub min_score: u8,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_match_limit(),
            min_score: default_min_score(),
        }
    }
}

fn default_match_limit() -> usize {
    20
}

fn default_min_score() -> u8 {
    5
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_stage_weight")]
    pub stage: u8,
    #[serde(default = "default_sector_weight")]
    pub sector: u8,
    #[serde(default = "default_check_size_weight")]
    pub check_size: u8,
    #[serde(default = "default_location_weight")]
    pub location: u8,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            stage: default_stage_weight(),
            sector: default_sector_weight(),
            check_size: default_check_size_weight(),
            location: default_location_weight(),
        }
    }
}

impl WeightsConfig {
    /// Convert to scoring weights, rejecting caps that do not sum to 100
    pub fn to_weights(&self) -> Result<ScoringWeights, ConfigError> {
        let weights = ScoringWeights {
            stage: self.stage,
            sector: self.sector,
            check_size: self.check_size,
            location: self.location,
        };
        if !weights.is_valid() {
            return Err(ConfigError::Message(format!(
                "scoring weights must sum to 100, got {}",
                weights.total()
            )));
        }
        Ok(weights)
    }
}

fn default_stage_weight() -> u8 {
    25
}
fn default_sector_weight() -> u8 {
    35
}
fn default_check_size_weight() -> u8 {
    25
}
fn default_location_weight() -> u8 {
    15
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with BRIDGE__)
    ///    e.g., BRIDGE__SERVER__PORT -> server.port
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("BRIDGE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("BRIDGE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
