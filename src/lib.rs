//! Shift roster optimization by stochastic local search.
//!
//! Assigns workers to the morning, evening, and graveyard slots of a run of
//! days, then improves the roster with one of two engines:
//!
//! - **Hill climbing**: first-improvement sampling of single-slot moves,
//!   stopping once a full round of samples finds nothing better.
//! - **Simulated Annealing (SA)**: geometric cooling with Metropolis
//!   acceptance of worsening moves and best-seen retention.
//!
//! Both engines score schedules through the [`heuristic::Objective`] trait;
//! three built-in [`heuristic::Heuristic`]s weight the quality criteria
//! differently. Higher fitness is better throughout.
//!
//! All randomness flows through an injected [`rand::Rng`], so a seeded
//! generator reproduces a run exactly.
//!
//! # Examples
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use u_shiftopt::config::SearchConfig;
//! use u_shiftopt::heuristic::Heuristic;
//! use u_shiftopt::schedule::Schedule;
//! use u_shiftopt::search::{self, Strategy};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let schedule = Schedule::random(7, 4, &mut rng).unwrap();
//! let outcome = search::run(
//!     Strategy::Climb,
//!     Heuristic::Weighted,
//!     schedule,
//!     &SearchConfig::default(),
//!     &mut rng,
//! )
//! .unwrap();
//! assert!(outcome.fitness >= outcome.initial_fitness);
//! ```

pub mod climb;
pub mod config;
pub mod error;
pub mod heuristic;
pub mod moves;
pub mod sa;
pub mod schedule;
pub mod search;

pub use error::{Error, Result};
