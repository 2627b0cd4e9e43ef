//! Shortest-Job-First scheduler (non-preemptive, static order).
//!
//! # Algorithm
//!
//! 1. Stable-sort all processes by ascending burst (equal bursts keep input
//!    order), or by a caller-supplied rule engine.
//! 2. Run them in that order, each to completion. The clock jumps forward
//!    when the next process has not arrived yet.
//!
//! Arrival times do not gate the order: a short job that arrives late still
//! runs before a long job that is already waiting, and the CPU idles until it
//! shows up. Use [`PrioritySjf`](super::PrioritySjf) for arrival-aware SJF.
//!
//! # Complexity
//! O(n log n).

use super::{run_in_order, CpuScheduler};
use crate::dispatching::{RuleEngine, SchedulingContext};
use crate::models::{Process, Schedule};

/// Static Shortest-Job-First.
#[derive(Debug, Clone, Default)]
pub struct Sjf {
    rule_engine: Option<RuleEngine>,
}

impl Sjf {
    /// Creates an SJF scheduler ordering by shortest burst.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the ordering rules.
    ///
    /// Rule scores are `f64`, so bursts beyond 2^53 may compare equal;
    /// the default order compares bursts exactly.
    pub fn with_rule_engine(mut self, engine: RuleEngine) -> Self {
        self.rule_engine = Some(engine);
        self
    }

    /// Execution order as indices into `processes`.
    pub fn order(&self, processes: &[Process]) -> Vec<usize> {
        match &self.rule_engine {
            Some(engine) => engine.sort_indices(processes, &SchedulingContext::at_time(0)),
            None => {
                let mut order: Vec<usize> = (0..processes.len()).collect();
                order.sort_by_key(|&i| processes[i].burst_duration);
                order
            }
        }
    }
}

impl CpuScheduler for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn dispatch(&self, processes: &[Process]) -> Schedule {
        run_in_order(processes, &self.order(processes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;
    use crate::models::TimelineSegment;
    use crate::workload::WorkloadGenerator;

    #[test]
    fn test_sjf_sorts_by_burst() {
        let procs = vec![
            Process::from_tuple("A", 0, 6, 0),
            Process::from_tuple("B", 0, 8, 0),
            Process::from_tuple("C", 0, 7, 0),
            Process::from_tuple("D", 0, 3, 0),
        ];
        let report = Sjf::new().run("SJF", &procs).unwrap();

        assert_eq!(
            report.timeline(),
            &[
                TimelineSegment::new("D", 0, 3),
                TimelineSegment::new("A", 3, 9),
                TimelineSegment::new("C", 9, 16),
                TimelineSegment::new("B", 16, 24),
            ]
        );
        // waits 0, 3, 9, 16
        assert!((report.avg_waiting_time() - 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_sjf_ties_keep_input_order() {
        let procs = vec![
            Process::from_tuple("first", 0, 2, 9),
            Process::from_tuple("second", 0, 2, 1),
            Process::from_tuple("short", 0, 1, 5),
        ];
        let report = Sjf::new().run("t", &procs).unwrap();
        let order: Vec<&str> = report.rows().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(order, vec!["short", "first", "second"]);
    }

    #[test]
    fn test_sjf_ignores_arrival_for_order() {
        // Short job arrives late: it still runs first, CPU idles until t=4
        let procs = vec![
            Process::from_tuple("long", 0, 5, 0),
            Process::from_tuple("short", 4, 1, 0),
        ];
        let report = Sjf::new().run("t", &procs).unwrap();
        assert_eq!(
            report.timeline(),
            &[
                TimelineSegment::new("short", 4, 5),
                TimelineSegment::new("long", 5, 10),
            ]
        );
        let long = report.schedule.row_for("long").unwrap();
        assert_eq!(long.waiting_time, 5);
        assert_eq!(long.turnaround_time, 10);
    }

    #[test]
    fn test_sjf_order_non_decreasing_burst() {
        let procs = WorkloadGenerator::new(20).with_seed(3).generate();
        let report = Sjf::new().run("t", &procs).unwrap();
        let bursts: Vec<i64> = report.rows().iter().map(|r| r.burst_duration).collect();
        assert!(bursts.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_sjf_exact_order_for_huge_bursts() {
        // 2^53 + 1 and 2^53 are the same f64
        let big = 1_i64 << 53;
        let procs = vec![
            Process::from_tuple("A", 0, big + 1, 0),
            Process::from_tuple("B", 0, big, 0),
        ];
        assert_eq!(Sjf::new().order(&procs), vec![1, 0]);

        let report = Sjf::new().run("t", &procs).unwrap();
        let bursts: Vec<i64> = report.rows().iter().map(|r| r.burst_duration).collect();
        assert_eq!(bursts, vec![big, big + 1]);
    }

    #[test]
    fn test_sjf_engine_spt_matches_default() {
        let procs = WorkloadGenerator::new(20).with_seed(5).generate();
        let spt = Sjf::new().with_rule_engine(RuleEngine::new().with_rule(rules::Spt));
        assert_eq!(spt.order(&procs), Sjf::new().order(&procs));
    }

    #[test]
    fn test_sjf_custom_rule_engine() {
        let procs = vec![
            Process::from_tuple("short", 0, 1, 0),
            Process::from_tuple("long", 0, 5, 0),
        ];
        let sjf = Sjf::new().with_rule_engine(RuleEngine::new().with_rule(rules::Lpt));
        assert_eq!(sjf.order(&procs), vec![1, 0]);
    }
}
