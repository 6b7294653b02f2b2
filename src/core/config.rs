//! Chart configuration with documented defaults
//!
//! Values come from three layers, lowest precedence first: built-in defaults,
//! an optional TOML file, then command-line overrides applied by the binary.

use crate::core::error::{PopError, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Endpoint serving the full population dataset
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api/population";

/// First year shown by the clock
pub const DEFAULT_START_YEAR: i32 = 1950;

/// Last year shown by the clock; the clock freezes here
pub const DEFAULT_END_YEAR: i32 = 2021;

/// Configuration for the population chart
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    // === DATASET ===
    /// Dataset endpoint (GET, JSON array of records)
    pub api_url: String,

    /// Whole-request timeout for the one-shot fetch
    ///
    /// A fetch that exceeds this is treated like any other fetch failure:
    /// logged, and the chart stays empty.
    pub request_timeout_secs: u64,

    // === CLOCK ===
    /// Year the clock starts at
    pub start_year: i32,

    /// Year the clock stops at (inclusive)
    pub end_year: i32,

    /// Milliseconds between year advances
    pub tick_ms: u64,

    // === RENDERING ===
    /// Duration of the bar transition on each redraw
    pub animation_ms: u64,

    /// Seed for color assignment
    ///
    /// When unset, colors are drawn from OS entropy and differ per run.
    pub seed: Option<u64>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: 10,
            start_year: DEFAULT_START_YEAR,
            end_year: DEFAULT_END_YEAR,
            tick_ms: 1000,
            animation_ms: 1000,
            seed: None,
        }
    }
}

impl ChartConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ChartConfig =
            toml::from_str(content).map_err(|e| PopError::Config(format!("Invalid TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.api_url.trim().is_empty() {
            return Err(PopError::Config("api_url must not be empty".into()));
        }

        if self.start_year > self.end_year {
            return Err(PopError::Config(format!(
                "start_year ({}) must be <= end_year ({})",
                self.start_year, self.end_year
            )));
        }

        if self.tick_ms == 0 {
            return Err(PopError::Config("tick_ms must be positive".into()));
        }

        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
