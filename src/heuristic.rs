//! Schedule scoring.
//!
//! Every heuristic maps a [`Schedule`] to a scalar fitness where **higher is
//! better**. Fitness is the negated weighted sum of rule penalties, so a
//! schedule with no violations scores `0.0`.
//!
//! # Criteria
//!
//! | criterion | penalty |
//! |---|---|
//! | double shift | extra slots held by one worker on the same day |
//! | short rest | graveyard on day `d` followed by morning on day `d + 1` |
//! | workload imbalance | `Σ |count(w) - mean|` over all workers |
//! | graveyard imbalance | same, counting graveyard shifts only |

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::schedule::Schedule;

/// Uniform scoring capability consumed by the search engines.
///
/// Implementations must be deterministic: scoring an unmodified schedule
/// twice returns the same value.
pub trait Objective {
    /// Fitness of `schedule`. Higher is better.
    fn fitness(&self, schedule: &Schedule) -> f64;
}

/// The three built-in heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Heuristic {
    /// Id 1: even workload, no double shifts.
    #[default]
    Balanced,
    /// Id 2: rest between shifts first, workload second.
    Rested,
    /// Id 3: all criteria, including fair graveyard rotation.
    Weighted,
}

impl Heuristic {
    pub const ALL: [Heuristic; 3] = [Heuristic::Balanced, Heuristic::Rested, Heuristic::Weighted];

    /// Maps a numeric id to a heuristic.
    ///
    /// `2` and `3` select [`Rested`](Heuristic::Rested) and
    /// [`Weighted`](Heuristic::Weighted); every other value, including
    /// out-of-range ones, falls back to [`Balanced`](Heuristic::Balanced).
    pub fn from_id(id: i64) -> Self {
        match id {
            3 => Heuristic::Weighted,
            2 => Heuristic::Rested,
            _ => Heuristic::Balanced,
        }
    }

    /// Strict variant of [`from_id`](Self::from_id) that rejects ids other
    /// than 1, 2, and 3.
    pub fn try_from_id(id: i64) -> Result<Self, Error> {
        match id {
            1..=3 => Ok(Self::from_id(id)),
            _ => Err(Error::InvalidHeuristic(id.to_string())),
        }
    }

    /// Numeric id of this heuristic.
    pub fn id(self) -> u8 {
        match self {
            Heuristic::Balanced => 1,
            Heuristic::Rested => 2,
            Heuristic::Weighted => 3,
        }
    }

    fn weights(self) -> Weights {
        match self {
            Heuristic::Balanced => Weights {
                double_shift: 1.0,
                short_rest: 0.0,
                imbalance: 1.0,
                graveyard_imbalance: 0.0,
            },
            Heuristic::Rested => Weights {
                double_shift: 2.0,
                short_rest: 2.0,
                imbalance: 0.5,
                graveyard_imbalance: 0.0,
            },
            Heuristic::Weighted => Weights {
                double_shift: 3.0,
                short_rest: 2.0,
                imbalance: 1.0,
                graveyard_imbalance: 1.0,
            },
        }
    }
}

impl Objective for Heuristic {
    fn fitness(&self, schedule: &Schedule) -> f64 {
        let w = self.weights();
        let mut penalty = w.double_shift * double_shifts(schedule) as f64
            + w.imbalance * imbalance(&schedule.shift_counts());
        if w.short_rest > 0.0 {
            penalty += w.short_rest * short_rests(schedule) as f64;
        }
        if w.graveyard_imbalance > 0.0 {
            penalty += w.graveyard_imbalance * imbalance(&schedule.graveyard_counts());
        }
        -penalty
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Heuristic::Balanced => "balanced",
            Heuristic::Rested => "rested",
            Heuristic::Weighted => "weighted",
        };
        write!(f, "{name} ({})", self.id())
    }
}

impl FromStr for Heuristic {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id: i64 = s
            .trim()
            .parse()
            .map_err(|_| Error::InvalidHeuristic(s.to_string()))?;
        Self::try_from_id(id)
    }
}

#[derive(Debug, Clone, Copy)]
struct Weights {
    double_shift: f64,
    short_rest: f64,
    imbalance: f64,
    graveyard_imbalance: f64,
}

/// Extra slots held by the same worker within a day, summed over days.
pub fn double_shifts(schedule: &Schedule) -> usize {
    schedule
        .days()
        .iter()
        .map(|d| {
            let [m, e, g] = d.slots();
            let distinct = if m == e && e == g {
                1
            } else if m == e || e == g || m == g {
                2
            } else {
                3
            };
            3 - distinct
        })
        .sum()
}

/// Graveyard-to-next-morning turnarounds for the same worker.
pub fn short_rests(schedule: &Schedule) -> usize {
    schedule
        .days()
        .windows(2)
        .filter(|w| w[0].graveyard == w[1].morning)
        .count()
}

/// Total absolute deviation of `counts` from their mean.
pub fn imbalance(counts: &[usize]) -> f64 {
    if counts.is_empty() {
        return 0.0;
    }
    let mean = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
    counts.iter().map(|&c| (c as f64 - mean).abs()).sum()
}
