use crate::models::{PenaltyCurves, ScoringWeights};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
///
/// Every section carries defaults, so the service starts with no config
/// file at all and a partial file only overrides what it names.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingConfig,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}

/// Knobs for the ranking endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct MatchingConfig {
    #[serde(default = "default_match_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
    #[serde(default = "default_min_score")]
    pub min_score: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            default_limit: default_match_limit(),
            max_limit: default_max_limit(),
            min_score: default_min_score(),
        }
    }
}

fn default_match_limit() -> u16 {
    20
}
fn default_max_limit() -> u16 {
    100
}
fn default_min_score() -> f64 {
    30.0
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default)]
    pub curves: CurvesConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_budget_weight")]
    pub budget: f64,
    #[serde(default = "default_location_weight")]
    pub location: f64,
    #[serde(default = "default_size_weight")]
    pub size: f64,
    #[serde(default = "default_bedrooms_weight")]
    pub bedrooms: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            budget: default_budget_weight(),
            location: default_location_weight(),
            size: default_size_weight(),
            bedrooms: default_bedrooms_weight(),
        }
    }
}

impl From<WeightsConfig> for ScoringWeights {
    fn from(config: WeightsConfig) -> Self {
        ScoringWeights {
            budget: config.budget,
            location: config.location,
            size: config.size,
            bedrooms: config.bedrooms,
        }
    }
}

fn default_budget_weight() -> f64 {
    0.35
}
fn default_location_weight() -> f64 {
    0.25
}
fn default_size_weight() -> f64 {
    0.20
}
fn default_bedrooms_weight() -> f64 {
    0.20
}

/// Shapes of the per-dimension penalty curves
#[derive(Debug, Clone, Deserialize)]
pub struct CurvesConfig {
    #[serde(default = "default_budget_tolerance")]
    pub budget_tolerance: f64,
    #[serde(default = "default_size_tolerance")]
    pub size_tolerance: f64,
    #[serde(default = "default_bedroom_step")]
    pub bedroom_step: f64,
    #[serde(default = "default_municipality_credit")]
    pub municipality_credit: f64,
}

impl Default for CurvesConfig {
    fn default() -> Self {
        Self {
            budget_tolerance: default_budget_tolerance(),
            size_tolerance: default_size_tolerance(),
            bedroom_step: default_bedroom_step(),
            municipality_credit: default_municipality_credit(),
        }
    }
}

impl From<CurvesConfig> for PenaltyCurves {
    fn from(config: CurvesConfig) -> Self {
        PenaltyCurves {
            budget_tolerance: config.budget_tolerance,
            size_tolerance: config.size_tolerance,
            bedroom_step: config.bedroom_step,
            municipality_credit: config.municipality_credit,
        }
    }
}

fn default_budget_tolerance() -> f64 {
    0.5
}
fn default_size_tolerance() -> f64 {
    0.5
}
fn default_bedroom_step() -> f64 {
    35.0
}
fn default_municipality_credit() -> f64 {
    60.0
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
    /// 3. Environment variables (prefixed with PROPMATCH_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with PROPMATCH_)
            // e.g., PROPMATCH_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("PROPMATCH")
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
                Environment::with_prefix("PROPMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
