//! Input validation for process sets.
//!
//! Every scheduler checks its input before simulating. Detects:
//! - Empty process sets (averages would divide by zero)
//! - Duplicate or empty IDs
//! - Non-positive burst durations (zero-length segments, non-termination)
//! - Negative arrival times (rejected by all algorithms alike)
//! - Sets whose latest arrival plus total burst overflows the clock
//!
//! All issues are collected rather than stopping at the first one.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{horizon, Process};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyInput,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process has an empty ID.
    EmptyId,
    /// A process requires zero or negative CPU time.
    NonPositiveBurst,
    /// A process arrives before t=0.
    NegativeArrival,
    /// Latest arrival plus total burst does not fit in an `i64` clock.
    HorizonOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process set.
///
/// Checks:
/// 1. At least one process
/// 2. No empty IDs
/// 3. No duplicate IDs
/// 4. `burst_duration > 0`
/// 5. `arrival_time >= 0`
/// 6. Latest arrival plus total burst fits in `i64`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    if processes.is_empty() {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "No processes to schedule",
        )]);
    }

    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for (idx, p) in processes.iter().enumerate() {
        if p.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Process at position {idx} has an empty ID"),
            ));
        } else if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.burst_duration <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process '{}' has non-positive burst duration {}",
                    p.id, p.burst_duration
                ),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process '{}' has negative arrival time {}",
                    p.id, p.arrival_time
                ),
            ));
        }
    }

    if horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::HorizonOverflow,
            "Latest arrival plus total burst overflows the simulation clock",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
