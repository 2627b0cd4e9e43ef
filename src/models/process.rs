//! Process descriptor model.
//!
//! A process is the unit of work handed to a CPU scheduler: an identity,
//! the simulation time at which it becomes ready, the CPU time it needs,
//! and a priority used only to break ties.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// An immutable process descriptor.
///
/// Descriptors are borrowed by schedulers and never mutated, so the same
/// slice can be fed to several algorithms for comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: String,
    /// Tick at which the process enters the ready set.
    pub arrival_time: i64,
    /// Total CPU time required (ticks).
    pub burst_duration: i64,
    /// Tie-break priority (lower = more important).
    #[serde(default)]
    pub priority: i64,
}

impl Process {
    /// Creates a process arriving at t=0 with priority 0.
    pub fn new(id: impl Into<String>, burst_duration: i64) -> Self {
        Self {
            id: id.into(),
            arrival_time: 0,
            burst_duration,
            priority: 0,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival_time: i64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Shorthand for `(id, arrival, burst, priority)` tuples.
    pub fn from_tuple(id: &str, arrival_time: i64, burst_duration: i64, priority: i64) -> Self {
        Self::new(id, burst_duration)
            .with_arrival(arrival_time)
            .with_priority(priority)
    }

    /// Whether the process has arrived by `time`.
    #[inline]
    pub fn is_ready_at(&self, time: i64) -> bool {
        self.arrival_time <= time
    }
}

/// Returns process indices stably sorted by arrival time.
///
/// Processes arriving at the same tick keep their input order.
pub fn arrival_order(processes: &[Process]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..processes.len()).collect();
    indices.sort_by_key(|&i| processes[i].arrival_time);
    indices
}

/// Sum of burst durations.
pub fn total_burst(processes: &[Process]) -> i64 {
    processes.iter().map(|p| p.burst_duration).sum()
}

/// Latest arrival plus total burst: no schedule runs past this tick.
///
/// `None` if the bound does not fit in `i64`. Negative fields count as 0.
pub fn horizon(processes: &[Process]) -> Option<i64> {
    let latest = processes
        .iter()
        .map(|p| p.arrival_time.max(0))
        .max()
        .unwrap_or(0);
    processes
        .iter()
        .try_fold(latest, |acc, p| acc.checked_add(p.burst_duration.max(0)))
}
