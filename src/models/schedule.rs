//! Schedule (simulation output) model.
//!
//! A schedule is the Gantt trace of a run plus one metrics row per process.
//! Segments are appended in dispatch order, which on a single processor is
//! also ascending start order.

use serde::{Deserialize, Serialize};

/// One contiguous execution interval attributed to one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSegment {
    /// Executing process ID.
    pub process_id: String,
    /// First tick of execution (inclusive).
    pub start: i64,
    /// End of execution (exclusive).
    pub stop: i64,
}

impl TimelineSegment {
    /// Creates a new segment.
    pub fn new(process_id: impl Into<String>, start: i64, stop: i64) -> Self {
        Self {
            process_id: process_id.into(),
            start,
            stop,
        }
    }

    /// Executed time (stop - start).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.stop - self.start
    }

    /// Whether two segments share any tick.
    #[inline]
    pub fn overlaps(&self, other: &TimelineSegment) -> bool {
        self.start < other.stop && other.start < self.stop
    }
}

/// Per-process result row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process ID.
    pub id: String,
    /// Tie-break priority.
    pub priority: i64,
    /// Total CPU time.
    pub burst_duration: i64,
    /// Arrival tick.
    pub arrival_time: i64,
    /// Ticks spent ready but not running.
    pub waiting_time: i64,
    /// Ticks from arrival to completion.
    pub turnaround_time: i64,
    /// Completion tick.
    pub completion_time: i64,
}

/// Gantt trace and per-process rows of a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Execution intervals in dispatch order.
    pub timeline: Vec<TimelineSegment>,
    /// Metrics rows in the order processes were reported.
    pub rows: Vec<ProcessMetrics>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment.
    ///
    /// A zero-length slice is never produced by a valid run; such segments
    /// are dropped rather than recorded.
    pub fn add_segment(&mut self, segment: TimelineSegment) {
        if segment.duration() > 0 {
            self.timeline.push(segment);
        }
    }

    /// Appends a metrics row.
    pub fn add_row(&mut self, row: ProcessMetrics) {
        self.rows.push(row);
    }

    /// Makespan: latest stop across all segments.
    pub fn makespan(&self) -> i64 {
        self.timeline.iter().map(|s| s.stop).max().unwrap_or(0)
    }

    /// Total CPU busy time.
    pub fn busy_time(&self) -> i64 {
        self.timeline.iter().map(|s| s.duration()).sum()
    }

    /// All segments of a given process.
    pub fn segments_for(&self, process_id: &str) -> Vec<&TimelineSegment> {
        self.timeline
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }

    /// The metrics row of a given process.
    pub fn row_for(&self, process_id: &str) -> Option<&ProcessMetrics> {
        self.rows.iter().find(|r| r.id == process_id)
    }

    /// Number of dispatches that switch the CPU to a different process.
    ///
    /// The first dispatch is not counted.
    pub fn context_switches(&self) -> usize {
        self.timeline
            .windows(2)
            .filter(|w| w[0].process_id != w[1].process_id)
            .count()
    }

    /// Whether the timeline is ordered by start and free of overlaps.
    pub fn is_sequential(&self) -> bool {
        self.timeline
            .windows(2)
            .all(|w| w[0].start <= w[1].start && !w[0].overlaps(&w[1]))
    }

    /// Idle gaps between consecutive segments as `(from, to)` pairs.
    pub fn idle_gaps(&self) -> Vec<(i64, i64)> {
        self.timeline
            .windows(2)
            .filter(|w| w[1].start > w[0].stop)
            .map(|w| (w[0].stop, w[1].start))
            .collect()
    }
}
