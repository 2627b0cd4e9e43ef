//! Arrival-aware Shortest-Job-First with priority tie-break.
//!
//! # Algorithm
//!
//! 1. Walk processes in stable arrival order with an arrival cursor.
//! 2. At each decision point, admit every arrived process into a min-heap
//!    keyed by `(burst, priority, arrival_rank)`.
//! 3. If the heap is empty, jump the clock to the next arrival.
//! 4. Otherwise pop the minimum and run it to completion.
//!
//! Non-preemptive: a shorter job arriving mid-burst waits for the next
//! decision point.
//!
//! # Complexity
//! O(n log n): each process is pushed and popped once, idle periods cost a
//! single clock jump.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::trace;

use super::{run_to_completion, ArrivalCursor, CpuScheduler};
use crate::models::{Process, Schedule, SimulationState};

/// Ready-heap ordering key. Field order is comparison order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct ReadyKey {
    burst: i64,
    priority: i64,
    arrival_rank: usize,
    idx: usize,
}

/// Dynamic non-preemptive SJF with priority tie-break.
///
/// # Example
///
/// ```
/// use u_procsched::models::Process;
/// use u_procsched::scheduler::{CpuScheduler, PrioritySjf};
///
/// let procs = vec![
///     Process::from_tuple("A", 0, 5, 1),
///     Process::from_tuple("B", 1, 3, 2),
///     Process::from_tuple("C", 2, 1, 3),
/// ];
/// let report = PrioritySjf::new().run("SJF-PRIORITY", &procs).unwrap();
/// let order: Vec<&str> = report.rows().iter().map(|r| r.id.as_str()).collect();
/// assert_eq!(order, vec!["A", "C", "B"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PrioritySjf;

impl PrioritySjf {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }
}

impl CpuScheduler for PrioritySjf {
    fn name(&self) -> &'static str {
        "SJF-PRIORITY"
    }

    fn dispatch(&self, processes: &[Process]) -> Schedule {
        let mut sim = SimulationState::new(processes);
        let mut schedule = Schedule::new();
        let mut cursor = ArrivalCursor::new(processes);
        let mut ready = BinaryHeap::new();
        let mut current = 0;

        while !sim.all_completed() {
            while let Some((arrival_rank, idx)) = cursor.pop_arrived(processes, current) {
                let p = &processes[idx];
                ready.push(Reverse(ReadyKey {
                    burst: p.burst_duration,
                    priority: p.priority,
                    arrival_rank,
                    idx,
                }));
            }

            let Some(Reverse(key)) = ready.pop() else {
                match cursor.next_arrival(processes) {
                    Some(next) => {
                        trace!(from = current, to = next, "cpu idle");
                        current = next;
                        continue;
                    }
                    None => break,
                }
            };

            current = run_to_completion(&mut sim, &mut schedule, key.idx, current);
        }

        schedule
    }
}
