//! Built-in dispatching rules.
//!
//! # Categories
//!
//! - **Time-based**: SPT, LPT
//! - **Arrival**: FIFO
//! - **Priority**: PRIORITY
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.
//!
//! # References
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::Process;

// ======================== Time-based rules ========================

/// Shortest Processing Time (shortest job first).
///
/// Minimizes average waiting time on a single processor when all jobs are
/// available at once.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on single machine.
#[derive(Debug, Clone, Copy)]
pub struct Spt;

impl DispatchingRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.burst_duration as f64
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}

/// Longest Processing Time.
#[derive(Debug, Clone, Copy)]
pub struct Lpt;

impl DispatchingRule for Lpt {
    fn name(&self) -> &'static str {
        "LPT"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        -(process.burst_duration as f64)
    }

    fn description(&self) -> &'static str {
        "Longest Processing Time"
    }
}

// ======================== Arrival rule ========================

/// First In First Out.
///
/// Orders processes by arrival time.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.arrival_time as f64
    }

    fn description(&self) -> &'static str {
        "First In First Out"
    }
}

// ======================== Priority-based rule ========================

/// Process priority rule.
///
/// Lower `priority` values run first.
#[derive(Debug, Clone, Copy)]
pub struct Priority;

impl DispatchingRule for Priority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.priority as f64
    }

    fn description(&self) -> &'static str {
        "Process Priority"
    }
}
