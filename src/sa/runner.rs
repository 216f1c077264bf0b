//! SA execution loop.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

use super::acceptance::acceptance_probability;
use super::config::SaConfig;
use crate::error::Result;
use crate::heuristic::Objective;
use crate::moves::Move;
use crate::schedule::Schedule;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// The best schedule seen during the run.
    pub best: Schedule,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// The live schedule as it stood when the temperature hit the floor.
    pub current: Schedule,

    /// Fitness of `current`.
    pub final_fitness: f64,

    /// Fitness of the schedule the run started from.
    pub initial_fitness: f64,

    /// Number of cooling steps (one move per step).
    pub iterations: usize,

    /// Objective calls, including the initial evaluation.
    pub evaluations: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Live fitness sampled every `history_interval` steps, plus the start
    /// and end of the run.
    pub fitness_history: Vec<f64>,

    /// Best fitness sampled at the same points as `fitness_history`.
    pub best_history: Vec<f64>,
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Anneals `schedule` using a generator seeded from `config.seed`
    /// (or from entropy when unset).
    pub fn run<O: Objective>(
        schedule: Schedule,
        objective: &O,
        config: &SaConfig,
    ) -> Result<SaResult> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::run_with_rng(schedule, objective, config, &mut rng)
    }

    /// Anneals `schedule` drawing all randomness from `rng`.
    ///
    /// Each step applies one random [`Move`]. Improvements are always kept
    /// and worsening moves survive with
    /// [`acceptance_probability`](super::acceptance_probability); rejected
    /// moves are undone from a day snapshot. The temperature is multiplied
    /// by `cooling_rate` after every step.
    ///
    /// # Errors
    ///
    /// Returns an error only if `config` fails validation.
    pub fn run_with_rng<O: Objective, R: Rng>(
        mut schedule: Schedule,
        objective: &O,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult> {
        config.validate()?;

        let mut current_fitness = objective.fitness(&schedule);
        let initial_fitness = current_fitness;
        let mut best = schedule.clone();
        let mut best_fitness = current_fitness;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut evaluations = 1usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        let mut fitness_history = vec![current_fitness];
        let mut best_history = vec![best_fitness];

        info!(
            days = schedule.num_days(),
            workers = schedule.num_workers(),
            fitness = initial_fitness,
            steps = config.planned_iterations(),
            "annealing started"
        );

        while temperature > config.min_temperature {
            let mv = Move::random(&schedule, rng);
            let undo = mv.apply_with_undo(&mut schedule);
            let candidate = objective.fitness(&schedule);
            evaluations += 1;

            if candidate > current_fitness {
                current_fitness = candidate;
                accepted_moves += 1;
                improving_moves += 1;

                if candidate > best_fitness {
                    best.clone_from(&schedule);
                    best_fitness = candidate;
                    debug!(step = iterations, temperature, fitness = best_fitness, "new best");
                }
            } else {
                let r: f64 = rng.random();
                if r <= acceptance_probability(current_fitness, candidate, temperature) {
                    current_fitness = candidate;
                    accepted_moves += 1;
                    trace!(step = iterations, temperature, fitness = candidate, "accepted worse");
                } else {
                    undo.restore(&mut schedule);
                }
            }

            iterations += 1;

            if config.history_interval > 0 && iterations.is_multiple_of(config.history_interval) {
                fitness_history.push(current_fitness);
                best_history.push(best_fitness);
            }

            temperature *= config.cooling_rate;
        }

        if config.history_interval == 0 || !iterations.is_multiple_of(config.history_interval) {
            fitness_history.push(current_fitness);
            best_history.push(best_fitness);
        }

        info!(
            steps = iterations,
            accepted = accepted_moves,
            improving = improving_moves,
            fitness = current_fitness,
            best = best_fitness,
            "annealing finished"
        );

        Ok(SaResult {
            best,
            best_fitness,
            current: schedule,
            final_fitness: current_fitness,
            initial_fitness,
            iterations,
            evaluations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            fitness_history,
            best_history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::Heuristic;
    use crate::schedule::{Schedule, WorkerId};

    fn seeded(days: usize, workers: usize, seed: u64) -> (Schedule, StdRng) {
        let mut rng = StdRng::seed_from_u64(seed);
        let schedule = Schedule::random(days, workers, &mut rng).unwrap();
        (schedule, rng)
    }

    #[test]
    fn test_sa_fixed_iteration_count() {
        let config = SaConfig::default();
        let expected = ((0.001f64 / 1.0).ln() / 0.995f64.ln()).ceil() as usize;
        for (days, workers) in [(5, 3), (30, 10), (50, 35)] {
            let (schedule, mut rng) = seeded(days, workers, 42);
            let result =
                SaRunner::run_with_rng(schedule, &Heuristic::Balanced, &config, &mut rng).unwrap();
            assert_eq!(result.iterations, expected, "days={days} workers={workers}");
            assert_eq!(result.evaluations, expected + 1);
            assert!(result.final_temperature <= config.min_temperature);
        }
    }

    #[test]
    fn test_sa_best_dominates_final() {
        for h in Heuristic::ALL {
            let (schedule, mut rng) = seeded(5, 3, 7);
            let result =
                SaRunner::run_with_rng(schedule, &h, &SaConfig::default(), &mut rng).unwrap();
            assert!(result.best_fitness >= result.final_fitness);
            assert!(result.best_fitness >= result.initial_fitness);
        }
    }

    #[test]
    fn test_sa_best_dominates_every_accepted_state() {
        let (schedule, mut rng) = seeded(20, 6, 3);
        let config = SaConfig::default().with_history_interval(1);
        let result =
            SaRunner::run_with_rng(schedule, &Heuristic::Weighted, &config, &mut rng).unwrap();
        assert_eq!(result.fitness_history.len(), result.iterations + 1);
        for (live, best) in result.fitness_history.iter().zip(&result.best_history) {
            assert!(best >= live, "best {best} < live {live}");
        }
        for w in result.best_history.windows(2) {
            assert!(w[1] >= w[0]);
        }
    }

    #[test]
    fn test_sa_reported_fitness_matches_schedules() {
        let (schedule, mut rng) = seeded(15, 5, 11);
        let h = Heuristic::Rested;
        let result = SaRunner::run_with_rng(schedule, &h, &SaConfig::default(), &mut rng).unwrap();
        assert_eq!(h.fitness(&result.best), result.best_fitness);
        assert_eq!(h.fitness(&result.current), result.final_fitness);
    }

    #[test]
    fn test_sa_improves_random_schedule() {
        let (schedule, mut rng) = seeded(30, 8, 42);
        let result =
            SaRunner::run_with_rng(schedule, &Heuristic::Balanced, &SaConfig::default(), &mut rng)
                .unwrap();
        assert!(result.improving_moves > 0);
        assert!(result.best_fitness > result.initial_fitness);
    }

    #[test]
    fn test_sa_preserves_shape() {
        let (schedule, mut rng) = seeded(12, 4, 5);
        let result =
            SaRunner::run_with_rng(schedule, &Heuristic::Weighted, &SaConfig::default(), &mut rng)
                .unwrap();
        for s in [&result.best, &result.current] {
            assert_eq!(s.num_days(), 12);
            assert_eq!(s.workers(), &[WorkerId(0), WorkerId(1), WorkerId(2), WorkerId(3)]);
        }
    }

    #[test]
    fn test_sa_seed_is_reproducible() {
        let (schedule, _) = seeded(10, 4, 1);
        let config = SaConfig::default().with_seed(99);
        let a = SaRunner::run(schedule.clone(), &Heuristic::Rested, &config).unwrap();
        let b = SaRunner::run(schedule, &Heuristic::Rested, &config).unwrap();
        assert_eq!(a.best, b.best);
        assert_eq!(a.fitness_history, b.fitness_history);
    }

    #[test]
    fn test_sa_accepts_uphill_when_hot() {
        // Warm, slow schedule: most moves should be accepted.
        let (schedule, mut rng) = seeded(20, 6, 8);
        let config = SaConfig::default()
            .with_initial_temperature(1e6)
            .with_min_temperature(1e5)
            .with_cooling_rate(0.999);
        let result =
            SaRunner::run_with_rng(schedule, &Heuristic::Balanced, &config, &mut rng).unwrap();
        let ratio = result.accepted_moves as f64 / result.iterations as f64;
        assert!(ratio > 0.9, "expected high acceptance at high temp, got {ratio}");
    }

    #[test]
    fn test_sa_rejects_invalid_config() {
        let (schedule, mut rng) = seeded(5, 3, 0);
        let config = SaConfig::default().with_cooling_rate(1.2);
        assert!(SaRunner::run_with_rng(schedule, &Heuristic::Balanced, &config, &mut rng).is_err());
    }
}
