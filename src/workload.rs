//! Random workload generation.
//!
//! Produces valid process sets for experiments and invariant checks. Each
//! tick a process arrives with probability `p_arrival`, so inter-arrival
//! gaps are geometric and idle periods occur naturally. Output is sorted by
//! arrival time, ready for FCFS.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::Process;

/// Smallest accepted per-tick arrival probability.
pub const MIN_ARRIVAL_PROBABILITY: f64 = 1e-3;

/// Seeded generator of random process sets.
///
/// # Example
///
/// ```
/// use u_procsched::workload::WorkloadGenerator;
///
/// let procs = WorkloadGenerator::new(5).with_seed(42).generate();
/// assert_eq!(procs.len(), 5);
/// assert_eq!(procs, WorkloadGenerator::new(5).with_seed(42).generate());
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    count: usize,
    p_arrival: f64,
    min_burst: i64,
    max_burst: i64,
    max_priority: i64,
    seed: u64,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes.
    ///
    /// Defaults: arrival probability 0.5 per tick, bursts in `1..=8`,
    /// priorities in `0..=5`, seed 0.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            p_arrival: 0.5,
            min_burst: 1,
            max_burst: 8,
            max_priority: 5,
            seed: 0,
        }
    }

    /// Sets the per-tick arrival probability, clamped to
    /// `[MIN_ARRIVAL_PROBABILITY, 1]`. NaN falls back to the floor.
    pub fn with_arrival_probability(mut self, p: f64) -> Self {
        self.p_arrival = if p.is_nan() {
            MIN_ARRIVAL_PROBABILITY
        } else {
            p.clamp(MIN_ARRIVAL_PROBABILITY, 1.0)
        };
        self
    }

    /// Sets the inclusive burst range. Bounds are raised to at least 1.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.min_burst = min.max(1);
        self.max_burst = max.max(self.min_burst);
        self
    }

    /// Sets the largest priority value (inclusive, from 0).
    pub fn with_max_priority(mut self, max_priority: i64) -> Self {
        self.max_priority = max_priority.max(0);
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Generates the process set, IDs `P1..Pn` in arrival order.
    pub fn generate(&self) -> Vec<Process> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut processes = Vec::with_capacity(self.count);
        let mut tick = 0;

        while processes.len() < self.count {
            if rng.random::<f64>() < self.p_arrival {
                let burst = rng.random_range(self.min_burst..=self.max_burst);
                let priority = rng.random_range(0..=self.max_priority);
                processes.push(Process::from_tuple(
                    &format!("P{}", processes.len() + 1),
                    tick,
                    burst,
                    priority,
                ));
            } else {
                tick += 1;
            }
        }

        processes
    }
}
