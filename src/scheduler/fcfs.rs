//! First-Come-First-Served scheduler.
//!
//! Runs processes strictly in the order they were supplied, each to
//! completion. The input is not sorted; callers pass it in arrival order.
//!
//! For each process: `waiting = max(0, service_time - arrival)`,
//! `start = arrival + waiting`, and the CPU is free again at
//! `start + burst`. An idle gap before a late arrival is skipped over
//! rather than charged as negative waiting.

use super::{run_in_order, CpuScheduler};
use crate::models::{Process, Schedule};

/// First-Come-First-Served, non-preemptive.
///
/// # Example
///
/// ```
/// use u_procsched::models::Process;
/// use u_procsched::scheduler::{CpuScheduler, Fcfs};
///
/// let procs = vec![
///     Process::from_tuple("A", 0, 5, 1),
///     Process::from_tuple("B", 1, 3, 2),
/// ];
/// let report = Fcfs::new().run("FCFS", &procs).unwrap();
/// assert_eq!(report.rows()[1].waiting_time, 4);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Fcfs {
    /// Creates a new FCFS scheduler.
    pub fn new() -> Self {
        Self
    }
}

impl CpuScheduler for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn dispatch(&self, processes: &[Process]) -> Schedule {
        let order: Vec<usize> = (0..processes.len()).collect();
        run_in_order(processes, &order)
    }
}
