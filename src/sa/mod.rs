//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Worsening moves are accepted with a probability that
//! shrinks as the temperature decays, letting the search climb out of local
//! optima early and settle later.
//!
//! The run length depends only on the cooling schedule: with geometric
//! cooling from `T0` to `Tmin` at rate `k`, the engine performs
//! `ceil(ln(Tmin / T0) / ln(k))` steps regardless of schedule size.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"

mod acceptance;
mod config;
mod runner;

pub use acceptance::acceptance_probability;
pub use config::SaConfig;
pub use runner::{SaResult, SaRunner};
