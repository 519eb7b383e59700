//! Harness configuration management
//!
//! This module loads the binary's configuration from environment variables.
//! The library API never reads the environment; everything it needs is passed
//! in explicitly.

use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;

use crate::constants::{DEFAULT_EXPORT_DIR, DEFAULT_LOG_FILTER, chart_formats};

/// Global harness configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main harness configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub harness: HarnessConfig,
    pub export: ExportConfig,
}

/// Run selection configuration
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub rust_log: String,
    /// Run only this study (all studies when unset)
    pub study: Option<String>,
    /// Seed for table generators (fresh entropy when unset)
    pub seed: Option<u64>,
}

/// Chart and results export configuration
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Output directory, expected to exist
    pub dir: PathBuf,
    pub chart_format: String,
    pub write_results: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            harness: HarnessConfig::from_env()?,
            export: ExportConfig::from_env()?,
        })
    }
}

impl HarnessConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
            study: env::var("BENCH_STUDY").ok().filter(|s| !s.trim().is_empty()),
            seed: env::var("BENCH_SEED")
                .ok()
                .map(|raw| {
                    raw.parse()
                        .map_err(|_| ConfigError::InvalidValue("BENCH_SEED".to_string()))
                })
                .transpose()?,
        })
    }
}

impl ExportConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let chart_format = env::var("BENCH_CHART_FORMAT")
            .unwrap_or_else(|_| chart_formats::SVG.to_string())
            .to_lowercase();
        if !chart_formats::ALL.contains(&chart_format.as_str()) {
            return Err(ConfigError::InvalidValue("BENCH_CHART_FORMAT".to_string()));
        }

        Ok(Self {
            dir: PathBuf::from(
                env::var("BENCH_EXPORT_DIR").unwrap_or_else(|_| DEFAULT_EXPORT_DIR.to_string()),
            ),
            chart_format,
            write_results: parse_bool(
                "BENCH_WRITE_RESULTS",
                env::var("BENCH_WRITE_RESULTS").ok(),
                true,
            )?,
        })
    }
}

fn parse_bool(name: &str, raw: Option<String>, default: bool) -> Result<bool, ConfigError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some("1") | Some("true") | Some("yes") => Ok(true),
        Some("0") | Some("false") | Some("no") => Ok(false),
        Some(_) => Err(ConfigError::InvalidValue(name.to_string())),
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
