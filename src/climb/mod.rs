//! Stochastic first-improvement hill climbing.
//!
//! Each round samples random single-slot moves until one strictly improves
//! the fitness, keeping it and starting the next round. A round that
//! exhausts its patience without finding an improvement ends the run: the
//! schedule is then a local optimum with respect to the sampled
//! neighbourhood (not necessarily the full one).

mod config;
mod runner;

pub use config::ClimbConfig;
pub use runner::{ClimbResult, ClimbRunner, ClimbStop};
