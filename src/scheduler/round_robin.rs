//! Round-Robin scheduler.
//!
//! # Algorithm
//!
//! 1. Processes enter a FIFO ready queue in stable arrival order.
//! 2. Dispatch pops the head and runs it for `min(remaining, quantum)`.
//! 3. After the slice, processes that arrived by the new clock are enqueued
//!    first, then the preempted process goes to the tail if unfinished.
//! 4. With an empty queue and pending arrivals, the clock jumps to the next
//!    arrival.
//!
//! Each dispatch emits its own segment, so a process running alone shows up
//! as consecutive slices of at most one quantum.
//!
//! # Metrics
//! `turnaround = completion - arrival`, `waiting = turnaround - burst`.

use std::collections::VecDeque;

use tracing::{debug, trace};

use super::{ArrivalCursor, CpuScheduler, ScheduleError};
use crate::models::{Process, Schedule, SimulationState, TimelineSegment};

/// Default time quantum (ticks).
pub const DEFAULT_QUANTUM: i64 = 2;

/// Preemptive Round-Robin with a fixed quantum.
///
/// # Example
///
/// ```
/// use u_procsched::models::Process;
/// use u_procsched::scheduler::{CpuScheduler, RoundRobin};
///
/// let procs = vec![Process::new("A", 3), Process::new("B", 2)];
/// let report = RoundRobin::new(2).run("RR", &procs).unwrap();
/// assert_eq!(report.timeline().len(), 3); // A, B, A
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates a scheduler with the given quantum.
    ///
    /// A non-positive quantum is reported by [`CpuScheduler::run`].
    pub fn new(quantum: i64) -> Self {
        Self { quantum }
    }

    /// Configured time quantum.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self::new(DEFAULT_QUANTUM)
    }
}

impl CpuScheduler for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn is_preemptive(&self) -> bool {
        true
    }

    fn check_config(&self) -> Result<(), ScheduleError> {
        if self.quantum <= 0 {
            return Err(ScheduleError::InvalidQuantum(self.quantum));
        }
        Ok(())
    }

    fn dispatch(&self, processes: &[Process]) -> Schedule {
        let mut sim = SimulationState::new(processes);
        let mut schedule = Schedule::new();
        let mut cursor = ArrivalCursor::new(processes);
        let mut queue: VecDeque<usize> = VecDeque::new();
        let mut current = 0;
        // `run` rejects non-positive quanta; direct callers get 1.
        let quantum = self.quantum.max(1);

        loop {
            while let Some((_, idx)) = cursor.pop_arrived(processes, current) {
                queue.push_back(idx);
            }

            let Some(idx) = queue.pop_front() else {
                match cursor.next_arrival(processes) {
                    Some(next) => {
                        trace!(from = current, to = next, "cpu idle");
                        current = next;
                        continue;
                    }
                    None => break,
                }
            };

            let process = sim.process(idx);
            let slice = sim.state(idx).remaining.min(quantum);
            let start = current;
            current += slice;
            schedule.add_segment(TimelineSegment::new(&process.id, start, current));
            let remaining = sim.run_for(idx, slice);
            trace!(process = %process.id, start, stop = current, remaining, "slice");

            while let Some((_, arrived)) = cursor.pop_arrived(processes, current) {
                queue.push_back(arrived);
            }

            if remaining > 0 {
                queue.push_back(idx);
            } else {
                let row = sim.complete(idx, current);
                debug!(
                    process = %row.id,
                    completion = current,
                    waiting = row.waiting_time,
                    turnaround = row.turnaround_time,
                    "process completed"
                );
                schedule.add_row(row);
            }
        }

        schedule
    }
}
