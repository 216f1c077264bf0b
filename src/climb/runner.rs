//! Hill climbing execution engine.
//!
//! # Algorithm
//!
//! 1. Evaluate the starting schedule
//! 2. Each round, up to `patience` times:
//!    a. Apply a random single-slot move
//!    b. Keep it if the fitness strictly improved, ending the round
//!    c. Otherwise restore the day snapshot and sample again
//! 3. Stop when a round finds no improvement (converged) or the round
//!    cap is reached

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::config::ClimbConfig;
use crate::error::Result;
use crate::heuristic::Objective;
use crate::moves::Move;
use crate::schedule::Schedule;

/// Why a hill climbing run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClimbStop {
    /// A full round of `patience` samples found no improving move.
    Converged,
    /// `max_rounds` improving rounds were completed.
    RoundLimit,
}

/// Result of a hill climbing run.
#[derive(Debug, Clone)]
pub struct ClimbResult {
    /// The schedule in its final accepted state.
    pub schedule: Schedule,
    /// Fitness of `schedule`.
    pub fitness: f64,
    /// Fitness of the starting schedule.
    pub initial_fitness: f64,
    /// Number of improving rounds (accepted moves).
    pub rounds: usize,
    /// Objective calls, including the initial evaluation.
    pub evaluations: usize,
    /// Why the run ended.
    pub stop: ClimbStop,
    /// Fitness after each accepted move, starting with the initial fitness.
    pub fitness_history: Vec<f64>,
}

/// Hill climbing runner.
pub struct ClimbRunner;

impl ClimbRunner {
    /// Climbs from `schedule` using a generator seeded from `config.seed`
    /// (or from entropy when unset).
    pub fn run<O: Objective>(
        schedule: Schedule,
        objective: &O,
        config: &ClimbConfig,
    ) -> Result<ClimbResult> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::run_with_rng(schedule, objective, config, &mut rng)
    }

    /// Climbs from `schedule` drawing all randomness from `rng`.
    ///
    /// The returned fitness is never below the initial fitness.
    ///
    /// # Errors
    ///
    /// Returns an error only if `config` fails validation.
    pub fn run_with_rng<O: Objective, R: Rng>(
        mut schedule: Schedule,
        objective: &O,
        config: &ClimbConfig,
        rng: &mut R,
    ) -> Result<ClimbResult> {
        config.validate()?;

        let initial_fitness = objective.fitness(&schedule);
        let mut fitness = initial_fitness;
        let mut evaluations = 1usize;
        let mut rounds = 0usize;
        let mut fitness_history = vec![initial_fitness];

        info!(
            days = schedule.num_days(),
            workers = schedule.num_workers(),
            fitness = initial_fitness,
            "hill climbing started"
        );

        let stop = loop {
            if config.max_rounds > 0 && rounds >= config.max_rounds {
                break ClimbStop::RoundLimit;
            }

            let mut improved = false;
            for _ in 0..config.patience {
                let mv = Move::random(&schedule, rng);
                let undo = mv.apply_with_undo(&mut schedule);
                let candidate = objective.fitness(&schedule);
                evaluations += 1;

                if candidate > fitness {
                    fitness = candidate;
                    improved = true;
                    break;
                }
                undo.restore(&mut schedule);
            }

            if !improved {
                break ClimbStop::Converged;
            }

            rounds += 1;
            fitness_history.push(fitness);
            debug!(round = rounds, fitness, "improved");
        };

        info!(
            rounds,
            evaluations,
            fitness,
            stop = ?stop,
            "hill climbing finished"
        );

        Ok(ClimbResult {
            schedule,
            fitness,
            initial_fitness,
            rounds,
            evaluations,
            stop,
            fitness_history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::Heuristic;
    use std::cell::Cell;

    struct Counting<'a> {
        inner: Heuristic,
        calls: &'a Cell<usize>,
    }

    impl Objective for Counting<'_> {
        fn fitness(&self, schedule: &Schedule) -> f64 {
            self.calls.set(self.calls.get() + 1);
            self.inner.fitness(schedule)
        }
    }

    fn seeded(days: usize, workers: usize, seed: u64) -> (Schedule, StdRng) {
        let mut rng = StdRng::seed_from_u64(seed);
        let schedule = Schedule::random(days, workers, &mut rng).unwrap();
        (schedule, rng)
    }

    #[test]
    fn test_climb_never_worsens() {
        for h in Heuristic::ALL {
            let (schedule, mut rng) = seeded(5, 3, 42);
            let result =
                ClimbRunner::run_with_rng(schedule, &h, &ClimbConfig::default(), &mut rng)
                    .unwrap();
            assert!(result.fitness >= result.initial_fitness, "{h}");
            assert_eq!(result.stop, ClimbStop::Converged);
        }
    }

    #[test]
    fn test_climb_history_strictly_increasing() {
        let (schedule, mut rng) = seeded(25, 7, 9);
        let result = ClimbRunner::run_with_rng(
            schedule,
            &Heuristic::Weighted,
            &ClimbConfig::default(),
            &mut rng,
        )
        .unwrap();
        assert_eq!(result.fitness_history.len(), result.rounds + 1);
        for w in result.fitness_history.windows(2) {
            assert!(w[1] > w[0]);
        }
        assert_eq!(result.fitness_history.last().copied(), Some(result.fitness));
    }

    #[test]
    fn test_climb_evaluation_bound() {
        let calls = Cell::new(0);
        let objective = Counting {
            inner: Heuristic::Balanced,
            calls: &calls,
        };
        let (schedule, mut rng) = seeded(5, 3, 42);
        let config = ClimbConfig::default();
        let result = ClimbRunner::run_with_rng(schedule, &objective, &config, &mut rng).unwrap();

        assert_eq!(calls.get(), result.evaluations);
        // The converging round always spends its full patience.
        assert!(result.evaluations > config.patience);
        assert!(result.evaluations <= 1 + config.patience * (result.rounds + 1));
    }

    #[test]
    fn test_climb_result_fitness_matches_schedule() {
        let (schedule, mut rng) = seeded(20, 6, 4);
        let h = Heuristic::Rested;
        let result =
            ClimbRunner::run_with_rng(schedule, &h, &ClimbConfig::default(), &mut rng).unwrap();
        assert_eq!(h.fitness(&result.schedule), result.fitness);
        assert_eq!(result.schedule.num_days(), 20);
        assert_eq!(result.schedule.num_workers(), 6);
    }

    #[test]
    fn test_climb_round_limit() {
        let (schedule, mut rng) = seeded(40, 10, 1);
        let config = ClimbConfig::default().with_max_rounds(3);
        let result =
            ClimbRunner::run_with_rng(schedule, &Heuristic::Balanced, &config, &mut rng).unwrap();
        assert_eq!(result.rounds, 3);
        assert_eq!(result.stop, ClimbStop::RoundLimit);
    }

    #[test]
    fn test_climb_at_optimum_converges_immediately() {
        use crate::schedule::{Day, WorkerId};
        let w = WorkerId;
        let days = vec![
            Day::new(w(0), w(1), w(2)),
            Day::new(w(1), w(2), w(0)),
            Day::new(w(2), w(0), w(1)),
        ];
        let schedule = Schedule::from_days(days, 3).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let config = ClimbConfig::default().with_patience(50);
        let result =
            ClimbRunner::run_with_rng(schedule.clone(), &Heuristic::Weighted, &config, &mut rng)
                .unwrap();
        assert_eq!(result.rounds, 0);
        assert_eq!(result.evaluations, 51);
        assert_eq!(result.schedule, schedule);
    }

    #[test]
    fn test_climb_seed_is_reproducible() {
        let (schedule, _) = seeded(15, 5, 2);
        let config = ClimbConfig::default().with_seed(17);
        let a = ClimbRunner::run(schedule.clone(), &Heuristic::Weighted, &config).unwrap();
        let b = ClimbRunner::run(schedule, &Heuristic::Weighted, &config).unwrap();
        assert_eq!(a.schedule, b.schedule);
        assert_eq!(a.evaluations, b.evaluations);
    }
}
