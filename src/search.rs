//! Search driver: binds a strategy and a heuristic to an engine run.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use tracing::info;

use crate::climb::ClimbRunner;
use crate::config::SearchConfig;
use crate::error::{Error, Result};
use crate::heuristic::Heuristic;
use crate::sa::SaRunner;
use crate::schedule::Schedule;

/// Search strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// First-improvement stochastic hill climbing.
    Climb,
    /// Simulated annealing with best-seen retention.
    Anneal,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Climb => f.write_str("hill climbing"),
            Strategy::Anneal => f.write_str("simulated annealing"),
        }
    }
}

impl FromStr for Strategy {
    type Err = Error;

    /// Accepts `--hill`, `hill`, `climb`, `--anneal`, and `anneal`.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "--hill" | "hill" | "climb" => Ok(Strategy::Climb),
            "--anneal" | "anneal" => Ok(Strategy::Anneal),
            other => Err(Error::UnknownStrategy(other.to_string())),
        }
    }
}

/// Parses a mode token and a heuristic id given in either order.
///
/// Whichever token parses as an integer is taken as the heuristic id; the
/// other must name a strategy. The id is checked before the mode.
///
/// # Examples
///
/// ```
/// use u_shiftopt::heuristic::Heuristic;
/// use u_shiftopt::search::{parse_mode_and_heuristic, Strategy};
///
/// let a = parse_mode_and_heuristic("--hill", "3").unwrap();
/// let b = parse_mode_and_heuristic("3", "--hill").unwrap();
/// assert_eq!(a, (Strategy::Climb, Heuristic::Weighted));
/// assert_eq!(a, b);
/// ```
pub fn parse_mode_and_heuristic(first: &str, second: &str) -> Result<(Strategy, Heuristic)> {
    let (mode, id) = match (second.trim().parse::<i64>(), first.trim().parse::<i64>()) {
        (Ok(id), _) => (first, id),
        (Err(_), Ok(id)) => (second, id),
        (Err(_), Err(_)) => return Err(Error::InvalidHeuristic(second.to_string())),
    };
    let heuristic = Heuristic::try_from_id(id)?;
    let strategy = mode.parse()?;
    Ok((strategy, heuristic))
}

/// Outcome of a driver run.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub strategy: Strategy,
    pub heuristic: Heuristic,
    /// The result schedule: the final state for hill climbing, the
    /// best-seen state for annealing.
    pub schedule: Schedule,
    /// Fitness of `schedule`.
    pub fitness: f64,
    /// Fitness of the starting schedule.
    pub initial_fitness: f64,
    /// Fitness at the end of the live trajectory.
    pub final_fitness: f64,
    /// Best fitness seen; only tracked by annealing.
    pub best_fitness: Option<f64>,
    /// Objective calls, including the initial evaluation.
    pub evaluations: usize,
}

/// Runs `strategy` on `schedule`, scoring with `heuristic`.
///
/// # Errors
///
/// Returns an error only if the engine section of `config` is invalid.
pub fn run<R: Rng>(
    strategy: Strategy,
    heuristic: Heuristic,
    schedule: Schedule,
    config: &SearchConfig,
    rng: &mut R,
) -> Result<SearchOutcome> {
    info!(%strategy, %heuristic, "search started");
    let outcome = match strategy {
        Strategy::Climb => {
            let r = ClimbRunner::run_with_rng(schedule, &heuristic, &config.climb, rng)?;
            SearchOutcome {
                strategy,
                heuristic,
                fitness: r.fitness,
                initial_fitness: r.initial_fitness,
                final_fitness: r.fitness,
                best_fitness: None,
                evaluations: r.evaluations,
                schedule: r.schedule,
            }
        }
        Strategy::Anneal => {
            let r = SaRunner::run_with_rng(schedule, &heuristic, &config.anneal, rng)?;
            SearchOutcome {
                strategy,
                heuristic,
                fitness: r.best_fitness,
                initial_fitness: r.initial_fitness,
                final_fitness: r.final_fitness,
                best_fitness: Some(r.best_fitness),
                evaluations: r.evaluations,
                schedule: r.best,
            }
        }
    };
    Ok(outcome)
}

/// Like [`run`], selecting the heuristic by numeric id with the lenient
/// fallback of [`Heuristic::from_id`].
pub fn run_with_id<R: Rng>(
    strategy: Strategy,
    heuristic_id: i64,
    schedule: Schedule,
    config: &SearchConfig,
    rng: &mut R,
) -> Result<SearchOutcome> {
    run(strategy, Heuristic::from_id(heuristic_id), schedule, config, rng)
}
