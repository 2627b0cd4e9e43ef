//! Simulation configuration.
//!
//! Selects the scheduling policy and run title. Deserializable so callers
//! can keep run settings alongside their process data:
//!
//! ```json
//! { "title": "Lab 3", "policy": { "algorithm": "round_robin", "quantum": 4 } }
//! ```

use serde::{Deserialize, Serialize};

use crate::models::Process;
use crate::scheduler::{
    CpuScheduler, Fcfs, PrioritySjf, RoundRobin, ScheduleError, ScheduleReport, Sjf,
    DEFAULT_QUANTUM,
};

/// Default run title.
pub const DEFAULT_TITLE: &str = "Schedule";

/// Scheduling policy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum Policy {
    /// First-Come-First-Served.
    #[default]
    Fcfs,
    /// Static shortest-job-first.
    Sjf,
    /// Arrival-aware SJF with priority tie-break.
    PrioritySjf,
    /// Round-Robin with a fixed quantum.
    RoundRobin {
        /// Time slice per dispatch.
        #[serde(default = "default_quantum")]
        quantum: i64,
    },
}

fn default_quantum() -> i64 {
    DEFAULT_QUANTUM
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl Policy {
    /// Round-Robin with the default quantum.
    pub fn round_robin() -> Self {
        Self::RoundRobin {
            quantum: DEFAULT_QUANTUM,
        }
    }

    /// Builds the scheduler for this policy.
    pub fn scheduler(&self) -> Box<dyn CpuScheduler> {
        match *self {
            Self::Fcfs => Box::new(Fcfs::new()),
            Self::Sjf => Box::new(Sjf::new()),
            Self::PrioritySjf => Box::new(PrioritySjf::new()),
            Self::RoundRobin { quantum } => Box::new(RoundRobin::new(quantum)),
        }
    }

    /// All policies, Round-Robin at the given quantum.
    pub fn all(quantum: i64) -> [Policy; 4] {
        [
            Self::Fcfs,
            Self::Sjf,
            Self::PrioritySjf,
            Self::RoundRobin { quantum },
        ]
    }
}

/// Settings for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Run label passed through to the report.
    #[serde(default = "default_title")]
    pub title: String,
    /// Scheduling policy.
    #[serde(default)]
    pub policy: Policy,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            policy: Policy::default(),
        }
    }
}

impl SimulationConfig {
    /// Creates a config for the given policy.
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// Runs the configured policy over `processes`.
///
/// # Errors
/// See [`CpuScheduler::run`].
pub fn simulate(
    processes: &[Process],
    config: &SimulationConfig,
) -> Result<ScheduleReport, ScheduleError> {
    config.policy.scheduler().run(&config.title, processes)
}
