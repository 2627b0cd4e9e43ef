//! Schedule quality metrics (KPIs).
//!
//! Aggregates per-process rows into the run-level performance indicators.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting Time | Mean time spent ready but not running |
//! | Avg Turnaround Time | Mean time from arrival to completion |
//! | Throughput | Processes completed per tick: count / last completion |
//! | Makespan | Latest completion time |
//! | CPU Utilization | Busy time / makespan |
//! | Max Waiting Time | Longest single wait |
//! | Context Switches | Dispatches that change the running process |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::{ProcessMetrics, Schedule};

/// Schedule performance indicators.
///
/// All time values are in ticks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Number of completed processes.
    pub process_count: usize,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Processes per tick (count / last completion).
    pub throughput: f64,
    /// Latest completion time.
    pub makespan: i64,
    /// Fraction of [0, makespan) the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Longest waiting time of any single process.
    pub max_waiting_time: i64,
    /// Dispatches that switch to a different process.
    pub context_switches: usize,
}

/// Running totals over per-process rows.
///
/// Rows are recorded as processes complete; [`finish`](Self::finish)
/// turns the totals into a [`ScheduleKpi`].
#[derive(Debug, Clone, Default)]
pub struct KpiAccumulator {
    count: usize,
    total_waiting: i128,
    total_turnaround: i128,
    max_waiting: i64,
    last_completion: i64,
}

impl KpiAccumulator {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one completed process.
    pub fn record(&mut self, row: &ProcessMetrics) {
        self.count += 1;
        self.total_waiting += i128::from(row.waiting_time);
        self.total_turnaround += i128::from(row.turnaround_time);
        self.max_waiting = self.max_waiting.max(row.waiting_time);
        self.last_completion = self.last_completion.max(row.completion_time);
    }

    /// Number of recorded processes.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Finalizes the averages.
    ///
    /// An accumulator with no rows yields all-zero averages; schedulers never
    /// reach this since empty input is rejected before simulation.
    pub fn finish(&self, schedule: &Schedule) -> ScheduleKpi {
        let makespan = schedule.makespan().max(self.last_completion);

        let (avg_waiting_time, avg_turnaround_time) = if self.count == 0 {
            (0.0, 0.0)
        } else {
            let n = self.count as f64;
            (
                self.total_waiting as f64 / n,
                self.total_turnaround as f64 / n,
            )
        };

        let (throughput, cpu_utilization) = if makespan <= 0 {
            (0.0, 0.0)
        } else {
            (
                self.count as f64 / self.last_completion.max(1) as f64,
                schedule.busy_time() as f64 / makespan as f64,
            )
        };

        ScheduleKpi {
            process_count: self.count,
            avg_waiting_time,
            avg_turnaround_time,
            throughput,
            makespan,
            cpu_utilization,
            max_waiting_time: self.max_waiting,
            context_switches: schedule.context_switches(),
        }
    }
}

impl ScheduleKpi {
    /// Computes KPIs from a completed schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        let mut acc = KpiAccumulator::new();
        for row in &schedule.rows {
            acc.record(row);
        }
        acc.finish(schedule)
    }

    /// Whether the run meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_avg_waiting: f64, min_utilization: f64) -> bool {
        self.avg_waiting_time <= max_avg_waiting && self.cpu_utilization >= min_utilization
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimelineSegment;

    fn row(id: &str, arrival: i64, burst: i64, completion: i64) -> ProcessMetrics {
        let turnaround = completion - arrival;
        ProcessMetrics {
            id: id.into(),
            priority: 0,
            burst_duration: burst,
            arrival_time: arrival,
            waiting_time: turnaround - burst,
            turnaround_time: turnaround,
            completion_time: completion,
        }
    }

    fn fcfs_example() -> Schedule {
        // A 0→5, B 5→8, C 8→9
        let mut s = Schedule::new();
        s.add_segment(TimelineSegment::new("A", 0, 5));
        s.add_segment(TimelineSegment::new("B", 5, 8));
        s.add_segment(TimelineSegment::new("C", 8, 9));
        s.add_row(row("A", 0, 5, 5));
        s.add_row(row("B", 1, 3, 8));
        s.add_row(row("C", 2, 1, 9));
        s
    }

    #[test]
    fn test_kpi_basic() {
        let kpi = ScheduleKpi::calculate(&fcfs_example());
        assert_eq!(kpi.process_count, 3);
        // waits 0 + 4 + 6
        assert!((kpi.avg_waiting_time - 10.0 / 3.0).abs() < 1e-10);
        // turnarounds 5 + 7 + 7
        assert!((kpi.avg_turnaround_time - 19.0 / 3.0).abs() < 1e-10);
        assert!((kpi.throughput - 3.0 / 9.0).abs() < 1e-10);
        assert_eq!(kpi.makespan, 9);
        assert_eq!(kpi.max_waiting_time, 6);
        assert_eq!(kpi.context_switches, 2);
        assert!((kpi.cpu_utilization - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_utilization_with_idle_gap() {
        let mut s = Schedule::new();
        s.add_segment(TimelineSegment::new("A", 0, 2));
        s.add_segment(TimelineSegment::new("B", 6, 8));
        s.add_row(row("A", 0, 2, 2));
        s.add_row(row("B", 6, 2, 8));

        let kpi = ScheduleKpi::calculate(&s);
        // busy 4 over makespan 8
        assert!((kpi.cpu_utilization - 0.5).abs() < 1e-10);
        assert!((kpi.throughput - 0.25).abs() < 1e-10);
        assert!((kpi.avg_waiting_time - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = ScheduleKpi::calculate(&Schedule::new());
        assert_eq!(kpi.process_count, 0);
        assert_eq!(kpi.makespan, 0);
        assert!((kpi.avg_waiting_time - 0.0).abs() < 1e-10);
        assert!((kpi.throughput - 0.0).abs() < 1e-10);
        assert!(!kpi.avg_turnaround_time.is_nan());
    }

    #[test]
    fn test_accumulator_incremental() {
        let mut acc = KpiAccumulator::new();
        acc.record(&row("A", 0, 5, 5));
        assert_eq!(acc.count(), 1);
        acc.record(&row("B", 1, 3, 8));

        let kpi = acc.finish(&Schedule::new());
        assert_eq!(kpi.process_count, 2);
        assert_eq!(kpi.makespan, 8);
        assert!((kpi.avg_waiting_time - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_totals_beyond_i64() {
        // Turnarounds q, 2q, 3q sum past i64::MAX
        let q = i64::MAX / 4;
        let mut acc = KpiAccumulator::new();
        acc.record(&row("A", 0, q, q));
        acc.record(&row("B", 0, q, 2 * q));
        acc.record(&row("C", 0, q, 3 * q));

        let kpi = acc.finish(&Schedule::new());
        assert!((kpi.avg_turnaround_time - 2.0 * q as f64).abs() / (q as f64) < 1e-10);
        assert!((kpi.avg_waiting_time - q as f64).abs() / (q as f64) < 1e-10);
    }

    #[test]
    fn test_meets_thresholds() {
        let kpi = ScheduleKpi::calculate(&fcfs_example());
        assert!(kpi.meets_thresholds(3.5, 0.9));
        assert!(!kpi.meets_thresholds(3.0, 0.9));
        assert!(!kpi.meets_thresholds(10.0, 1.5));
    }
}
