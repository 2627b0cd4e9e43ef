//! Single-processor CPU scheduling simulator.
//!
//! Simulates classical scheduling policies over a static process set and
//! reports a Gantt trace, per-process waiting/turnaround times, and
//! aggregate KPIs (average wait, average turnaround, throughput).
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `SimulationState`,
//!   `TimelineSegment`, `ProcessMetrics`, `Schedule`
//! - **`scheduler`**: `CpuScheduler` implementations (FCFS, SJF,
//!   priority SJF, round-robin) and KPI aggregation
//! - **`dispatching`**: Ordering rules (SPT, FIFO, priority, ...) and a
//!   composable rule engine
//! - **`validation`**: Input checks run before every simulation
//! - **`config`**: Serializable policy selection and the `simulate` entry point
//! - **`report`**: Text and JSON renderers
//! - **`workload`**: Seeded random process sets
//!
//! # Example
//!
//! ```
//! use u_procsched::config::{simulate, Policy, SimulationConfig};
//! use u_procsched::models::Process;
//! use u_procsched::report::{ReportWriter, TextReport};
//!
//! let processes = vec![
//!     Process::from_tuple("A", 0, 5, 1),
//!     Process::from_tuple("B", 1, 3, 2),
//!     Process::from_tuple("C", 2, 1, 3),
//! ];
//! let config = SimulationConfig::new(Policy::PrioritySjf).with_title("demo");
//! let report = simulate(&processes, &config).unwrap();
//! assert_eq!(report.rows()[1].id, "C");
//!
//! let text = TextReport::new().render(&report).unwrap();
//! assert!(text.contains("Average wait: 2.67"));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod dispatching;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use config::{simulate, Policy, SimulationConfig};
pub use models::{Process, ProcessMetrics, TimelineSegment};
pub use scheduler::{CpuScheduler, ScheduleError, ScheduleReport};
