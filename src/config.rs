//! Run configuration.
//!
//! Load search settings from TOML to tune instance size and engine
//! parameters without code changes. Every section and key is optional.
//!
//! # Examples
//!
//! ```
//! use u_shiftopt::config::SearchConfig;
//!
//! let config = SearchConfig::from_toml_str(r#"
//!     seed = 42
//!
//!     [schedule]
//!     days = 14
//!
//!     [climb]
//!     patience = 500
//!
//!     [anneal]
//!     cooling_rate = 0.99
//! "#).unwrap();
//!
//! assert_eq!(config.seed, Some(42));
//! assert_eq!(config.schedule.days, Some(14));
//! assert_eq!(config.climb.patience, 500);
//! assert_eq!(config.anneal.min_temperature, 0.001);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::climb::ClimbConfig;
use crate::error::Result;
use crate::sa::SaConfig;
use crate::schedule::ScheduleConfig;

/// Top-level configuration for a search run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Seed for instance generation and search. Overrides engine seeds.
    pub seed: Option<u64>,

    /// Random instance size.
    pub schedule: ScheduleConfig,

    /// Hill climbing parameters.
    pub climb: ClimbConfig,

    /// Simulated annealing parameters.
    pub anneal: SaConfig,
}

impl SearchConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file can't be read, contains invalid TOML, or
    /// fails validation.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates every section.
    pub fn validate(&self) -> Result<()> {
        self.schedule.validate()?;
        self.climb.validate()?;
        self.anneal.validate()
    }

    /// Seed an engine should use: the top-level seed wins over the
    /// engine's own.
    pub fn engine_seed(&self, engine_seed: Option<u64>) -> Option<u64> {
        self.seed.or(engine_seed)
    }
}
