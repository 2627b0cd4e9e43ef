//! CPU schedulers and KPI evaluation.
//!
//! Every algorithm implements [`CpuScheduler`]: it borrows an immutable
//! process slice, keeps its bookkeeping in a per-run
//! [`SimulationState`](crate::models::SimulationState), and emits a Gantt
//! trace plus one metrics row per process.
//!
//! # Algorithms
//!
//! | Scheduler | Preemptive | Order |
//! |-----------|------------|-------|
//! | [`Fcfs`] | no | input order |
//! | [`Sjf`] | no | burst ascending, arrival ignored |
//! | [`PrioritySjf`] | no | shortest ready burst, then priority |
//! | [`RoundRobin`] | yes | FIFO ready queue, fixed quantum |
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling", Ch. 3-4

mod fcfs;
mod kpi;
mod priority_sjf;
mod round_robin;
mod sjf;

pub use fcfs::Fcfs;
pub use kpi::{KpiAccumulator, ScheduleKpi};
pub use priority_sjf::PrioritySjf;
pub use round_robin::{RoundRobin, DEFAULT_QUANTUM};
pub use sjf::Sjf;

use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::{
    arrival_order, Process, ProcessMetrics, Schedule, SimulationState, TimelineSegment,
};
use crate::validation::{validate_processes, ValidationError};

/// Errors raised before a simulation starts.
///
/// No partial results are produced once an error is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    /// The process set failed validation.
    #[error("invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),
    /// Round-robin quantum must be positive.
    #[error("invalid quantum {0}: must be positive")]
    InvalidQuantum(i64),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result of one scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleReport {
    /// Opaque run label.
    pub title: String,
    /// Name of the algorithm that produced the run.
    pub algorithm: String,
    /// Gantt trace and per-process rows.
    #[serde(flatten)]
    pub schedule: Schedule,
    /// Aggregate metrics.
    pub kpi: ScheduleKpi,
}

impl ScheduleReport {
    /// Gantt trace in dispatch order.
    pub fn timeline(&self) -> &[TimelineSegment] {
        &self.schedule.timeline
    }

    /// Per-process rows.
    pub fn rows(&self) -> &[ProcessMetrics] {
        &self.schedule.rows
    }

    /// Average waiting time.
    pub fn avg_waiting_time(&self) -> f64 {
        self.kpi.avg_waiting_time
    }

    /// Average turnaround time.
    pub fn avg_turnaround_time(&self) -> f64 {
        self.kpi.avg_turnaround_time
    }

    /// Processes completed per tick.
    pub fn throughput(&self) -> f64 {
        self.kpi.throughput
    }
}

/// A single-processor scheduling algorithm.
pub trait CpuScheduler: Send + Sync + Debug {
    /// Algorithm name (e.g., "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// Whether a running process can be interrupted.
    fn is_preemptive(&self) -> bool {
        false
    }

    /// Checks scheduler parameters.
    fn check_config(&self) -> Result<(), ScheduleError> {
        Ok(())
    }

    /// Simulates the run on input that already passed validation.
    fn dispatch(&self, processes: &[Process]) -> Schedule;

    /// Validates the input, simulates to completion, and aggregates KPIs.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidInput`] for empty or malformed process sets,
    /// or a configuration error from [`check_config`](Self::check_config).
    fn run(&self, title: &str, processes: &[Process]) -> Result<ScheduleReport, ScheduleError> {
        self.check_config()?;
        if let Err(errors) = validate_processes(processes) {
            warn!(
                algorithm = self.name(),
                errors = errors.len(),
                "rejected process set"
            );
            return Err(ScheduleError::InvalidInput(errors));
        }

        let schedule = self.dispatch(processes);
        let kpi = ScheduleKpi::calculate(&schedule);
        info!(
            algorithm = self.name(),
            processes = kpi.process_count,
            avg_waiting = kpi.avg_waiting_time,
            avg_turnaround = kpi.avg_turnaround_time,
            throughput = kpi.throughput,
            "schedule complete"
        );

        Ok(ScheduleReport {
            title: title.to_string(),
            algorithm: self.name().to_string(),
            schedule,
            kpi,
        })
    }
}

/// Runs several schedulers over the same process set.
///
/// The descriptors are shared read-only, so every report starts from the
/// same input. Fails on the first scheduler that rejects the input.
pub fn compare(
    processes: &[Process],
    schedulers: &[&dyn CpuScheduler],
) -> Result<Vec<ScheduleReport>, ScheduleError> {
    schedulers
        .iter()
        .map(|s| s.run(s.name(), processes))
        .collect()
}

/// Runs `idx` from `start` to completion as a single segment.
///
/// Returns the completion time.
fn run_to_completion(
    sim: &mut SimulationState<'_>,
    schedule: &mut Schedule,
    idx: usize,
    start: i64,
) -> i64 {
    let process = sim.process(idx);
    let burst = process.burst_duration;
    let completion = start + burst;

    sim.run_for(idx, burst);
    schedule.add_segment(TimelineSegment::new(&process.id, start, completion));
    let row = sim.complete(idx, completion);
    debug!(
        process = %row.id,
        start,
        stop = completion,
        waiting = row.waiting_time,
        turnaround = row.turnaround_time,
        "process completed"
    );
    schedule.add_row(row);
    completion
}

/// Non-preemptive execution in a fixed order.
///
/// The CPU idles until a process arrives if it is not yet ready.
fn run_in_order(processes: &[Process], order: &[usize]) -> Schedule {
    let mut sim = SimulationState::new(processes);
    let mut schedule = Schedule::new();
    let mut current = 0;

    for &idx in order {
        let start = current.max(processes[idx].arrival_time);
        current = run_to_completion(&mut sim, &mut schedule, idx, start);
    }

    schedule
}

/// Admits processes into a ready structure as the clock passes their arrival.
#[derive(Debug, Clone)]
struct ArrivalCursor {
    order: Vec<usize>,
    next: usize,
}

impl ArrivalCursor {
    fn new(processes: &[Process]) -> Self {
        Self {
            order: arrival_order(processes),
            next: 0,
        }
    }

    /// Next process with `arrival_time <= time`, as `(arrival_rank, index)`.
    fn pop_arrived(&mut self, processes: &[Process], time: i64) -> Option<(usize, usize)> {
        let &idx = self.order.get(self.next)?;
        if !processes[idx].is_ready_at(time) {
            return None;
        }
        let rank = self.next;
        self.next += 1;
        Some((rank, idx))
    }

    /// Arrival time of the next pending process.
    fn next_arrival(&self, processes: &[Process]) -> Option<i64> {
        self.order
            .get(self.next)
            .map(|&idx| processes[idx].arrival_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::total_burst;
    use crate::validation::ValidationErrorKind;
    use crate::workload::WorkloadGenerator;

    fn example() -> Vec<Process> {
        vec![
            Process::from_tuple("A", 0, 5, 1),
            Process::from_tuple("B", 1, 3, 2),
            Process::from_tuple("C", 2, 1, 3),
        ]
    }

    fn all_schedulers() -> Vec<Box<dyn CpuScheduler>> {
        vec![
            Box::new(Fcfs::new()),
            Box::new(Sjf::new()),
            Box::new(PrioritySjf::new()),
            Box::new(RoundRobin::new(1)),
            Box::new(RoundRobin::new(3)),
        ]
    }

    fn assert_invariants(processes: &[Process], report: &ScheduleReport) {
        let name = &report.algorithm;
        let burst_sum = total_burst(processes);
        let total_wait: i64 = report.rows().iter().map(|r| r.waiting_time).sum();
        let total_turnaround: i64 = report.rows().iter().map(|r| r.turnaround_time).sum();

        assert_eq!(report.rows().len(), processes.len(), "{name}: row count");
        assert_eq!(total_turnaround, total_wait + burst_sum, "{name}: Σ identity");
        assert!(report.schedule.is_sequential(), "{name}: overlap");
        assert_eq!(report.schedule.busy_time(), burst_sum, "{name}: coverage");

        for p in processes {
            let segments = report.schedule.segments_for(&p.id);
            let executed: i64 = segments.iter().map(|s| s.duration()).sum();
            assert_eq!(executed, p.burst_duration, "{name}: burst of {}", p.id);
            assert!(
                segments.iter().all(|s| s.start >= p.arrival_time),
                "{name}: {} ran before arrival",
                p.id
            );
            let row = report.schedule.row_for(&p.id).unwrap();
            assert!(row.waiting_time >= 0, "{name}: negative wait");
            assert_eq!(row.turnaround_time, row.waiting_time + p.burst_duration);
        }

        let last = report.rows().iter().map(|r| r.completion_time).max().unwrap();
        assert!((report.throughput() - processes.len() as f64 / last as f64).abs() < 1e-10);
        assert!(report.throughput() > 0.0);
    }

    #[test]
    fn test_invariants_on_example() {
        let procs = example();
        for s in all_schedulers() {
            let report = s.run("example", &procs).unwrap();
            assert_invariants(&procs, &report);
        }
    }

    #[test]
    fn test_invariants_on_random_workloads() {
        for seed in 0..25 {
            let procs = WorkloadGenerator::new(12).with_seed(seed).generate();
            for s in all_schedulers() {
                let report = s.run("random", &procs).unwrap();
                assert_invariants(&procs, &report);
            }
        }
    }

    #[test]
    fn test_non_preemptive_single_segment() {
        let procs = WorkloadGenerator::new(15).with_seed(7).generate();
        let schedulers: Vec<Box<dyn CpuScheduler>> = vec![
            Box::new(Fcfs::new()),
            Box::new(Sjf::new()),
            Box::new(PrioritySjf::new()),
        ];
        for s in schedulers {
            assert!(!s.is_preemptive());
            let report = s.run("t", &procs).unwrap();
            assert_eq!(report.timeline().len(), procs.len(), "{}", s.name());
        }
    }

    #[test]
    fn test_empty_input_rejected_by_all() {
        for s in all_schedulers() {
            match s.run("empty", &[]) {
                Err(ScheduleError::InvalidInput(errors)) => {
                    assert_eq!(errors[0].kind, ValidationErrorKind::EmptyInput)
                }
                other => panic!("{}: expected InvalidInput, got {other:?}", s.name()),
            }
        }
    }

    #[test]
    fn test_negative_arrival_rejected_by_all() {
        let procs = vec![Process::new("A", 2).with_arrival(-1)];
        for s in all_schedulers() {
            assert!(matches!(
                s.run("neg", &procs),
                Err(ScheduleError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_clock_overflow_rejected_by_all() {
        let procs = vec![Process::from_tuple("A", i64::MAX - 1, 5, 0)];
        for s in all_schedulers() {
            match s.run("overflow", &procs) {
                Err(ScheduleError::InvalidInput(errors)) => {
                    assert_eq!(errors[0].kind, ValidationErrorKind::HorizonOverflow)
                }
                other => panic!("{}: expected InvalidInput, got {other:?}", s.name()),
            }
        }
    }

    #[test]
    fn test_clock_at_limit_runs() {
        let procs = vec![
            Process::from_tuple("A", i64::MAX - 10, 2, 0),
            Process::from_tuple("B", i64::MAX - 9, 3, 0),
        ];
        for s in all_schedulers() {
            let report = s.run("limit", &procs).unwrap();
            assert_eq!(report.kpi.makespan, i64::MAX - 5, "{}", s.name());
            assert!(report.throughput() > 0.0);
        }
    }

    #[test]
    fn test_error_display() {
        let err = Fcfs::new().run("t", &[Process::new("X", 0)]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid input: Process 'X' has non-positive burst duration 0"
        );
        assert_eq!(
            ScheduleError::InvalidQuantum(0).to_string(),
            "invalid quantum 0: must be positive"
        );
    }

    #[test]
    fn test_descriptors_reusable_across_runs() {
        let procs = example();
        let before = procs.clone();
        let first = PrioritySjf::new().run("a", &procs).unwrap();
        let second = PrioritySjf::new().run("b", &procs).unwrap();
        assert_eq!(procs, before);
        assert_eq!(first.schedule, second.schedule);
    }

    #[test]
    fn test_compare() {
        let procs = example();
        let fcfs = Fcfs::new();
        let psjf = PrioritySjf::new();
        let reports = compare(&procs, &[&fcfs, &psjf]).unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].algorithm, "FCFS");
        assert_eq!(reports[1].algorithm, "SJF-PRIORITY");
        // Dynamic SJF never waits longer on average here
        assert!(reports[1].avg_waiting_time() <= reports[0].avg_waiting_time());
    }

    #[test]
    fn test_report_serde_roundtrip() {
        let report = Fcfs::new().run("json", &example()).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"timeline\""));
        let back: ScheduleReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.schedule, report.schedule);
        assert_eq!(back.kpi.makespan, report.kpi.makespan);
        assert!((back.kpi.avg_waiting_time - report.kpi.avg_waiting_time).abs() < 1e-10);
    }

    #[test]
    fn test_arrival_cursor() {
        let procs = vec![
            Process::from_tuple("late", 4, 1, 0),
            Process::from_tuple("early", 0, 1, 0),
        ];
        let mut cursor = ArrivalCursor::new(&procs);
        assert_eq!(cursor.pop_arrived(&procs, 0), Some((0, 1)));
        assert_eq!(cursor.pop_arrived(&procs, 0), None);
        assert_eq!(cursor.next_arrival(&procs), Some(4));
        assert_eq!(cursor.pop_arrived(&procs, 4), Some((1, 0)));
        assert_eq!(cursor.next_arrival(&procs), None);
    }
}
