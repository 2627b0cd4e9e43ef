//! Dispatching rules and rule engine.
//!
//! Provides ordering rules (SPT, FIFO, priority, ...) and a rule engine that
//! composes them lexicographically. The static SJF scheduler sorts its input
//! with a `RuleEngine`; callers can swap in their own rule chain.
//!
//! # Usage
//!
//! ```
//! use u_procsched::dispatching::{RuleEngine, SchedulingContext};
//! use u_procsched::dispatching::rules;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::Spt)
//!     .with_rule(rules::Priority);
//!
//! let context = SchedulingContext::at_time(0);
//! // let order = engine.sort_indices(&processes, &context);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod context;
mod engine;
pub mod rules;

pub use context::SchedulingContext;
pub use engine::{RuleEngine, TieBreaker};

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = f64;

/// A dispatching rule that evaluates process priority.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for processes that should run first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPT", "FIFO").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of a process given the current context.
    ///
    /// Returns a score where lower = higher priority.
    fn evaluate(&self, process: &Process, context: &SchedulingContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
