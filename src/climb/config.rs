//! Hill climbing configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration parameters for hill climbing.
///
/// # Examples
///
/// ```
/// use u_shiftopt::climb::ClimbConfig;
///
/// let config = ClimbConfig::default().with_patience(250).with_seed(3);
/// assert_eq!(config.patience, 250);
/// assert_eq!(config.max_rounds, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClimbConfig {
    /// Non-improving samples tolerated per round before declaring convergence.
    pub patience: usize,
    /// Hard cap on improving rounds. 0 = no limit.
    pub max_rounds: usize,
    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for ClimbConfig {
    fn default() -> Self {
        Self {
            patience: 1000,
            max_rounds: 0,
            seed: None,
        }
    }
}

impl ClimbConfig {
    /// Sets the per-round sample budget.
    pub fn with_patience(mut self, patience: usize) -> Self {
        self.patience = patience;
        self
    }

    /// Sets the maximum number of improving rounds.
    pub fn with_max_rounds(mut self, n: usize) -> Self {
        self.max_rounds = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.patience == 0 {
            return Err(Error::Config("patience must be at least 1".into()));
        }
        Ok(())
    }
}
