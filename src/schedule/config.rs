//! Random instance generation settings.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::types::Schedule;
use crate::error::{Error, Result};

/// Controls the size of randomly generated schedules.
///
/// When `days` or `workers` is `None`, the value is drawn at random:
/// days uniformly from `min_days..=max_days`, workers uniformly from
/// `min_workers..=floor(days * worker_ratio)` (the upper bound is raised
/// to `min_workers` for short schedules).
///
/// # Examples
///
/// ```
/// use u_shiftopt::schedule::ScheduleConfig;
///
/// let config = ScheduleConfig::default().with_days(5).with_workers(3);
/// assert_eq!(config.days, Some(5));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Fixed number of days, or `None` to draw one.
    pub days: Option<usize>,
    /// Fixed number of workers, or `None` to draw one.
    pub workers: Option<usize>,
    pub min_days: usize,
    pub max_days: usize,
    pub min_workers: usize,
    /// Upper bound on workers as a fraction of the day count.
    pub worker_ratio: f64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            days: None,
            workers: None,
            min_days: 10,
            max_days: 50,
            min_workers: 4,
            worker_ratio: 0.7,
        }
    }
}

impl ScheduleConfig {
    pub fn with_days(mut self, days: usize) -> Self {
        self.days = Some(days);
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.days == Some(0) {
            return Err(Error::NoDays);
        }
        if self.workers == Some(0) {
            return Err(Error::NoWorkers);
        }
        if self.min_days == 0 || self.min_days > self.max_days {
            return Err(Error::Config(format!(
                "day range {}..={} is empty or starts at zero",
                self.min_days, self.max_days
            )));
        }
        if self.min_workers == 0 {
            return Err(Error::Config("min_workers must be positive".into()));
        }
        if !self.worker_ratio.is_finite() || self.worker_ratio <= 0.0 {
            return Err(Error::Config(format!(
                "worker_ratio must be finite and positive, got {}",
                self.worker_ratio
            )));
        }
        Ok(())
    }

    /// Resolves the `(days, workers)` pair, drawing any unset dimension.
    pub fn dimensions<R: Rng>(&self, rng: &mut R) -> Result<(usize, usize)> {
        self.validate()?;
        let days = match self.days {
            Some(d) => d,
            None => rng.random_range(self.min_days..=self.max_days),
        };
        let workers = match self.workers {
            Some(w) => w,
            None => {
                let hi = ((days as f64 * self.worker_ratio) as usize).max(self.min_workers);
                rng.random_range(self.min_workers..=hi)
            }
        };
        Ok((days, workers))
    }

    /// Builds a randomized schedule of the configured size.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Schedule> {
        let (days, workers) = self.dimensions(rng)?;
        Schedule::random(days, workers, rng)
    }
}
