//! Per-run simulation state.
//!
//! Mutable bookkeeping lives in a [`SimulationState`] array indexed in
//! parallel to the immutable descriptor slice. Each scheduler run builds a
//! fresh state, so descriptors can be reused across runs.

use super::{Process, ProcessMetrics};

/// Mutable state of one process during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessState {
    /// Whether the process has fully executed.
    pub completed: bool,
    /// CPU time still owed to the process.
    pub remaining: i64,
    /// Time spent ready but not running. Valid once completed.
    pub waiting_time: i64,
    /// Time from arrival to completion. Valid once completed.
    pub turnaround_time: i64,
    /// Completion tick.
    pub completion_time: Option<i64>,
}

/// Simulation state for a whole process set.
#[derive(Debug, Clone)]
pub struct SimulationState<'a> {
    processes: &'a [Process],
    states: Vec<ProcessState>,
    completed: usize,
}

impl<'a> SimulationState<'a> {
    /// Creates a state with every process pending and its full burst remaining.
    pub fn new(processes: &'a [Process]) -> Self {
        let states = processes
            .iter()
            .map(|p| ProcessState {
                remaining: p.burst_duration,
                ..Default::default()
            })
            .collect();
        Self {
            processes,
            states,
            completed: 0,
        }
    }

    /// The descriptor at `idx`.
    #[inline]
    pub fn process(&self, idx: usize) -> &'a Process {
        &self.processes[idx]
    }

    /// The state at `idx`.
    #[inline]
    pub fn state(&self, idx: usize) -> &ProcessState {
        &self.states[idx]
    }

    /// Charges `ticks` of CPU time to `idx` and returns what is left.
    pub fn run_for(&mut self, idx: usize, ticks: i64) -> i64 {
        let state = &mut self.states[idx];
        state.remaining -= ticks;
        state.remaining
    }

    /// Marks `idx` as finished at `completion_time` and derives its metrics.
    ///
    /// `turnaround = completion - arrival` and `waiting = turnaround - burst`,
    /// which holds for both run-to-completion and time-sliced execution.
    pub fn complete(&mut self, idx: usize, completion_time: i64) -> ProcessMetrics {
        let process = self.processes[idx].clone();
        let state = &mut self.states[idx];
        debug_assert!(!state.completed, "process completed twice");

        state.completed = true;
        state.remaining = 0;
        state.completion_time = Some(completion_time);
        state.turnaround_time = completion_time - process.arrival_time;
        state.waiting_time = state.turnaround_time - process.burst_duration;
        self.completed += 1;

        ProcessMetrics {
            id: process.id,
            priority: process.priority,
            burst_duration: process.burst_duration,
            arrival_time: process.arrival_time,
            waiting_time: state.waiting_time,
            turnaround_time: state.turnaround_time,
            completion_time,
        }
    }

    /// Number of completed processes.
    pub fn completed_count(&self) -> usize {
        self.completed
    }

    /// Whether every process has completed.
    pub fn all_completed(&self) -> bool {
        self.completed == self.states.len()
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the process set is empty.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// All states, parallel to the descriptor slice.
    pub fn states(&self) -> &[ProcessState] {
        &self.states
    }
}
