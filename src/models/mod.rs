//! Scheduling domain models.
//!
//! Provides the data types shared by every CPU scheduler: immutable process
//! descriptors, the per-run mutable state array, and the Gantt/metrics
//! output.
//!
//! # Ownership
//!
//! | Type | Owner | Mutated during a run |
//! |------|-------|----------------------|
//! | `Process` | caller | never |
//! | `SimulationState` | scheduler | yes |
//! | `Schedule` | caller (after return) | built incrementally |

mod process;
mod schedule;
mod state;

pub use process::{arrival_order, horizon, total_burst, Process};
pub use schedule::{ProcessMetrics, Schedule, TimelineSegment};
pub use state::{ProcessState, SimulationState};
