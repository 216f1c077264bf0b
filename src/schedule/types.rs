//! Roster value types: workers, shifts, days, and the schedule itself.

use std::fmt;

use rand::Rng;

use crate::error::{Error, Result};

/// Opaque worker identity.
///
/// The search only copies and compares these; the numeric value carries
/// no meaning beyond identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkerId(pub u32);

impl WorkerId {
    /// Index of this worker in a dense per-worker table.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "W{}", self.0)
    }
}

/// One of the three slots within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shift {
    Morning,
    Evening,
    Graveyard,
}

impl Shift {
    /// All shifts in the order they occur within a day.
    pub const ALL: [Shift; 3] = [Shift::Morning, Shift::Evening, Shift::Graveyard];
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shift::Morning => "morning",
            Shift::Evening => "evening",
            Shift::Graveyard => "graveyard",
        };
        f.write_str(name)
    }
}

/// Assignments for a single day.
///
/// `Day` is `Copy`: a copy is a full, independent snapshot of the slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Day {
    pub morning: WorkerId,
    pub evening: WorkerId,
    pub graveyard: WorkerId,
}

impl Day {
    /// Creates a day with explicit assignments.
    pub fn new(morning: WorkerId, evening: WorkerId, graveyard: WorkerId) -> Self {
        Self {
            morning,
            evening,
            graveyard,
        }
    }

    /// Returns the worker assigned to `shift`.
    #[inline]
    pub fn get(&self, shift: Shift) -> WorkerId {
        match shift {
            Shift::Morning => self.morning,
            Shift::Evening => self.evening,
            Shift::Graveyard => self.graveyard,
        }
    }

    /// Assigns `worker` to `shift`.
    #[inline]
    pub fn set(&mut self, shift: Shift, worker: WorkerId) {
        match shift {
            Shift::Morning => self.morning = worker,
            Shift::Evening => self.evening = worker,
            Shift::Graveyard => self.graveyard = worker,
        }
    }

    /// The three assignments in day order.
    #[inline]
    pub fn slots(&self) -> [WorkerId; 3] {
        [self.morning, self.evening, self.graveyard]
    }
}

/// A fixed-length sequence of days staffed from a fixed worker pool.
///
/// The number of days and the worker pool never change after
/// construction; only slot contents are mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    days: Vec<Day>,
    workers: Vec<WorkerId>,
}

impl Schedule {
    /// Builds a schedule from explicit days over workers `W0..W{num_workers-1}`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoDays`] or [`Error::NoWorkers`] for empty inputs, and
    /// [`Error::Config`] if a day references a worker outside the pool.
    pub fn from_days(days: Vec<Day>, num_workers: usize) -> Result<Self> {
        if days.is_empty() {
            return Err(Error::NoDays);
        }
        if num_workers == 0 {
            return Err(Error::NoWorkers);
        }
        if let Some(w) = days
            .iter()
            .flat_map(|d| d.slots())
            .find(|w| w.index() >= num_workers)
        {
            return Err(Error::Config(format!(
                "worker {w} is outside a pool of {num_workers}"
            )));
        }
        let workers = worker_pool(num_workers)?;
        Ok(Self { days, workers })
    }

    /// Creates a schedule whose every slot holds a uniformly drawn worker.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoDays`] or [`Error::NoWorkers`] if either size is
    /// zero, and [`Error::Config`] if `num_workers` does not fit a [`WorkerId`].
    pub fn random<R: Rng>(num_days: usize, num_workers: usize, rng: &mut R) -> Result<Self> {
        if num_days == 0 {
            return Err(Error::NoDays);
        }
        if num_workers == 0 {
            return Err(Error::NoWorkers);
        }
        let workers = worker_pool(num_workers)?;
        let mut pick = || workers[rng.random_range(0..workers.len())];
        let days = (0..num_days)
            .map(|_| Day::new(pick(), pick(), pick()))
            .collect();
        Ok(Self { days, workers })
    }

    #[inline]
    pub fn num_days(&self) -> usize {
        self.days.len()
    }

    #[inline]
    pub fn num_workers(&self) -> usize {
        self.workers.len()
    }

    /// The worker pool.
    #[inline]
    pub fn workers(&self) -> &[WorkerId] {
        &self.workers
    }

    /// All days in order.
    #[inline]
    pub fn days(&self) -> &[Day] {
        &self.days
    }

    /// Day at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= num_days()`.
    #[inline]
    pub fn day(&self, index: usize) -> &Day {
        &self.days[index]
    }

    /// Mutable day at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= num_days()`.
    #[inline]
    pub fn day_mut(&mut self, index: usize) -> &mut Day {
        &mut self.days[index]
    }

    /// Total number of shifts held by each worker, indexed by [`WorkerId::index`].
    pub fn shift_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.workers.len()];
        for w in self.days.iter().flat_map(|d| d.slots()) {
            counts[w.index()] += 1;
        }
        counts
    }

    /// Number of graveyard shifts held by each worker.
    pub fn graveyard_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.workers.len()];
        for d in &self.days {
            counts[d.graveyard.index()] += 1;
        }
        counts
    }
}

fn worker_pool(n: usize) -> Result<Vec<WorkerId>> {
    let n = u32::try_from(n)
        .map_err(|_| Error::Config(format!("{n} workers exceeds the supported maximum")))?;
    Ok((0..n).map(WorkerId).collect())
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>5}  {:>8}  {:>8}  {:>9}", "day", "morning", "evening", "graveyard")?;
        for (i, d) in self.days.iter().enumerate() {
            writeln!(
                f,
                "{:>5}  {:>8}  {:>8}  {:>9}",
                i + 1,
                d.morning.to_string(),
                d.evening.to_string(),
                d.graveyard.to_string()
            )?;
        }
        Ok(())
    }
}
