//! Shift schedules.
//!
//! A [`Schedule`] is a fixed run of [`Day`]s, each holding a morning,
//! evening, and graveyard assignment drawn from a fixed worker pool.
//! Search engines mutate slots in place and never change the shape.

mod config;
mod types;

pub use config::ScheduleConfig;
pub use types::{Day, Schedule, Shift, WorkerId};
