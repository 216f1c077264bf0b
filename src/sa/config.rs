//! SA configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration for the Simulated Annealing engine.
///
/// Cooling is geometric: `T_{k+1} = cooling_rate * T_k`, stopping once the
/// temperature reaches `min_temperature`.
///
/// # Examples
///
/// ```
/// use u_shiftopt::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(2.0)
///     .with_min_temperature(0.01)
///     .with_cooling_rate(0.99)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Temperature floor. The run ends once `T <= min_temperature`.
    pub min_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,

    /// Live fitness is recorded every this many steps. 0 disables history.
    pub history_interval: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1.0,
            min_temperature: 0.001,
            cooling_rate: 0.995,
            history_interval: 100,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, k: f64) -> Self {
        self.cooling_rate = k;
        self
    }

    pub fn with_history_interval(mut self, n: usize) -> Self {
        self.history_interval = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of cooling steps the engine will take:
    /// `ceil(ln(min / initial) / ln(cooling_rate))`.
    ///
    /// Only meaningful for a configuration that passes [`validate`](Self::validate).
    pub fn planned_iterations(&self) -> usize {
        ((self.min_temperature / self.initial_temperature).ln() / self.cooling_rate.ln()).ceil()
            as usize
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("initial_temperature", self.initial_temperature),
            ("min_temperature", self.min_temperature),
            ("cooling_rate", self.cooling_rate),
        ] {
            if !value.is_finite() {
                return Err(Error::Config(format!("{name} must be finite, got {value}")));
            }
        }
        if self.initial_temperature <= 0.0 {
            return Err(Error::Config("initial_temperature must be positive".into()));
        }
        if self.min_temperature <= 0.0 {
            return Err(Error::Config("min_temperature must be positive".into()));
        }
        if self.min_temperature >= self.initial_temperature {
            return Err(Error::Config(
                "min_temperature must be less than initial_temperature".into(),
            ));
        }
        if self.cooling_rate <= 0.0 || self.cooling_rate >= 1.0 {
            return Err(Error::Config(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        Ok(())
    }
}
