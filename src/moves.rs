//! Single-slot moves and day snapshots.
//!
//! A [`Move`] reassigns one slot of one day. Moves are made reversible by
//! taking a [`DaySnapshot`] (a by-value copy of the target day) before
//! applying them, and writing the snapshot back on rejection.

use rand::Rng;

use crate::schedule::{Day, Schedule, Shift, WorkerId};

/// Tentative reassignment of a single slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub day: usize,
    pub shift: Shift,
    pub worker: WorkerId,
}

impl Move {
    /// Draws a move uniformly: day from `0..num_days`, shift from the three
    /// slots, worker from the whole pool.
    ///
    /// The drawn worker may already hold the slot, making the move a no-op.
    pub fn random<R: Rng>(schedule: &Schedule, rng: &mut R) -> Self {
        let day = rng.random_range(0..schedule.num_days());
        let shift = Shift::ALL[rng.random_range(0..Shift::ALL.len())];
        let workers = schedule.workers();
        let worker = workers[rng.random_range(0..workers.len())];
        Self { day, shift, worker }
    }

    /// Writes the move into the schedule.
    #[inline]
    pub fn apply(&self, schedule: &mut Schedule) {
        schedule.day_mut(self.day).set(self.shift, self.worker);
    }

    /// Snapshots the target day, then applies the move.
    ///
    /// Restoring the returned snapshot undoes the move.
    #[inline]
    pub fn apply_with_undo(&self, schedule: &mut Schedule) -> DaySnapshot {
        let snapshot = DaySnapshot::take(schedule, self.day);
        self.apply(schedule);
        snapshot
    }
}

/// By-value copy of one day, detached from the live schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySnapshot {
    index: usize,
    day: Day,
}

impl DaySnapshot {
    /// Copies day `index` out of `schedule`.
    #[inline]
    pub fn take(schedule: &Schedule, index: usize) -> Self {
        Self {
            index,
            day: *schedule.day(index),
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The saved day value.
    #[inline]
    pub fn day(&self) -> Day {
        self.day
    }

    /// Overwrites the live day with the saved value. Touches only that day.
    #[inline]
    pub fn restore(self, schedule: &mut Schedule) {
        *schedule.day_mut(self.index) = self.day;
    }
}
