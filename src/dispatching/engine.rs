//! Rule engine for multi-criteria dispatching.
//!
//! Composes dispatching rules lexicographically: the first rule decides,
//! later rules only break its ties.
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::cmp::Ordering;
use std::sync::Arc;

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::Process;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Keep input order (the sort is stable).
    #[default]
    InputOrder,
    /// Deterministic by process ID (lexicographic).
    ById,
}

/// A composable rule engine for process ordering.
///
/// # Example
/// ```
/// use u_procsched::dispatching::{RuleEngine, SchedulingContext};
/// use u_procsched::dispatching::rules;
/// use u_procsched::models::Process;
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::Spt)
///     .with_rule(rules::Priority);
///
/// let procs = vec![Process::new("long", 5), Process::new("short", 1)];
/// let order = engine.sort_indices(&procs, &SchedulingContext::at_time(0));
/// assert_eq!(order, vec![1, 0]);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    tie_breaker: TieBreaker,
    epsilon: f64,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    ///
    /// With no rules every comparison is a tie, so the final tie-breaker
    /// alone decides the order.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::InputOrder,
            epsilon: 1e-9,
        }
    }

    /// Appends a rule. Earlier rules take precedence.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Names of the configured rules, in precedence order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts processes (highest priority first).
    ///
    /// Returns indices into the original slice. The sort is stable.
    pub fn sort_indices(&self, processes: &[Process], context: &SchedulingContext) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&processes[a], &processes[b], context));
        indices
    }

    /// Returns the index of the highest-priority process.
    pub fn select_best(&self, processes: &[Process], context: &SchedulingContext) -> Option<usize> {
        self.sort_indices(processes, context).first().copied()
    }

    /// Evaluates a single process and returns scores from each rule.
    pub fn evaluate(&self, process: &Process, context: &SchedulingContext) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|rule| rule.evaluate(process, context))
            .collect()
    }

    /// Compares two processes rule by rule.
    pub fn compare(&self, a: &Process, b: &Process, context: &SchedulingContext) -> Ordering {
        for rule in &self.rules {
            let score_a = rule.evaluate(a, context);
            let score_b = rule.evaluate(b, context);

            if (score_a - score_b).abs() > self.epsilon {
                return score_a.partial_cmp(&score_b).unwrap_or(Ordering::Equal);
            }
        }

        match &self.tie_breaker {
            TieBreaker::InputOrder => Ordering::Equal,
            TieBreaker::ById => a.id.cmp(&b.id),
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}
