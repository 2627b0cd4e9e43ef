//! Report rendering.
//!
//! Pure formatting over [`ScheduleReport`]: nothing here affects scheduling.
//! A [`ReportWriter`] renders into any `io::Write` sink (console, file,
//! buffer).

use std::io::{self, Write};

use crate::scheduler::ScheduleReport;

/// Label used for idle CPU time in the Gantt chart.
pub const IDLE_LABEL: &str = "idle";

const TABLE_HEADERS: [&str; 7] = [
    "ID",
    "Priority",
    "Burst",
    "Arrival",
    "Wait",
    "Turnaround",
    "Exit",
];

/// Output strategy for schedule reports.
pub trait ReportWriter {
    /// Writes `report` to `out`.
    fn write_report(&self, report: &ScheduleReport, out: &mut dyn Write) -> io::Result<()>;

    /// Renders `report` into a string.
    fn render(&self, report: &ScheduleReport) -> io::Result<String> {
        let mut buf = Vec::new();
        self.write_report(report, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Plain-text report: title, Gantt chart, table, aggregates.
///
/// ```text
/// ------ FCFS ------
/// Gantt schedule
/// | A | B | C |
/// 0   5   8   9
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextReport;

impl TextReport {
    /// Creates a text writer.
    pub fn new() -> Self {
        Self
    }

    /// Writes the title banner.
    pub fn write_title(&self, title: &str, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "------ {title} ------")
    }

    /// Writes the Gantt bar and its time axis.
    ///
    /// Gaps between segments (and before the first one) are drawn as
    /// [`IDLE_LABEL`] cells.
    pub fn write_gantt(&self, report: &ScheduleReport, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Gantt schedule")?;
        let timeline = report.timeline();
        if timeline.is_empty() {
            return writeln!(out, "(empty)");
        }

        let mut cells: Vec<(&str, i64)> = Vec::with_capacity(timeline.len());
        let mut clock = 0;
        for seg in timeline {
            if seg.start > clock {
                cells.push((IDLE_LABEL, clock));
            }
            cells.push((seg.process_id.as_str(), seg.start));
            clock = seg.stop;
        }

        let mut bar = String::from("|");
        let mut axis = String::new();
        for (label, start) in cells {
            let start = start.to_string();
            let width = (label.len() + 2).max(start.len() + 1);
            bar.push_str(&format!("{label:^width$}|"));
            axis.push_str(&format!("{start:<pad$}", pad = width + 1));
        }
        axis.push_str(&clock.to_string());

        writeln!(out, "{bar}")?;
        writeln!(out, "{axis}")
    }

    /// Writes the per-process table and the three aggregates.
    pub fn write_table(&self, report: &ScheduleReport, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Schedule table")?;

        let rows: Vec<[String; 7]> = report
            .rows()
            .iter()
            .map(|r| {
                [
                    r.id.clone(),
                    r.priority.to_string(),
                    r.burst_duration.to_string(),
                    r.arrival_time.to_string(),
                    r.waiting_time.to_string(),
                    r.turnaround_time.to_string(),
                    r.completion_time.to_string(),
                ]
            })
            .collect();

        let mut widths = TABLE_HEADERS.map(str::len);
        for row in &rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.len());
            }
        }

        let header: Vec<String> = TABLE_HEADERS
            .iter()
            .zip(widths)
            .map(|(h, w)| format!("{h:<w$}"))
            .collect();
        writeln!(out, "{}", header.join("  ").trim_end())?;
        let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
        writeln!(out, "{}", rule.join("  "))?;

        for row in &rows {
            let cells: Vec<String> = row
                .iter()
                .zip(widths)
                .enumerate()
                .map(|(col, (cell, w))| {
                    if col == 0 {
                        format!("{cell:<w$}")
                    } else {
                        format!("{cell:>w$}")
                    }
                })
                .collect();
            writeln!(out, "{}", cells.join("  "))?;
        }

        writeln!(out, "Average wait: {:.2}", report.avg_waiting_time())?;
        writeln!(out, "Average turnaround: {:.2}", report.avg_turnaround_time())?;
        writeln!(
            out,
            "Throughput: {:.2} processes/unit time",
            report.throughput()
        )
    }

    /// Writes a one-line-per-run summary of several reports.
    pub fn write_comparison(
        &self,
        reports: &[ScheduleReport],
        out: &mut dyn Write,
    ) -> io::Result<()> {
        let name_width = reports
            .iter()
            .map(|r| r.algorithm.len())
            .max()
            .unwrap_or(0)
            .max("Algorithm".len());

        writeln!(
            out,
            "{:<name_width$}  {:>8}  {:>10}  {:>10}",
            "Algorithm", "Avg wait", "Avg turn.", "Throughput"
        )?;
        for r in reports {
            writeln!(
                out,
                "{:<name_width$}  {:>8.2}  {:>10.2}  {:>10.2}",
                r.algorithm,
                r.avg_waiting_time(),
                r.avg_turnaround_time(),
                r.throughput()
            )?;
        }
        Ok(())
    }
}

impl ReportWriter for TextReport {
    fn write_report(&self, report: &ScheduleReport, out: &mut dyn Write) -> io::Result<()> {
        self.write_title(&report.title, out)?;
        self.write_gantt(report, out)?;
        self.write_table(report, out)?;
        writeln!(out)
    }
}

/// Pretty-printed JSON report.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReport;

impl JsonReport {
    /// Creates a JSON writer.
    pub fn new() -> Self {
        Self
    }
}

impl ReportWriter for JsonReport {
    fn write_report(&self, report: &ScheduleReport, out: &mut dyn Write) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)
    }
}
