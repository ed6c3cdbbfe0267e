//! Rule checks for candidate recurrence patterns.
//!
//! A candidate is checked against the full rule list on every edit; all
//! violated rules are reported together so a form can display every
//! outstanding problem at once instead of one at a time.

use chrono::NaiveDate;
use thiserror::Error;

use crate::recur::core::{EndCondition, Frequency, RecurrenceSpec};

/// A single violated pattern rule.
///
/// Variants are declared in the order rules are checked and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Frequency is required")]
    MissingFrequency,

    #[error("Repeat interval must be at least 1")]
    InvalidInterval,

    #[error("Weekly recurrence requires at least one weekday")]
    MissingWeekdays,

    #[error("Day of month must be between 1 and 31")]
    InvalidDayOfMonth,

    #[error("End date must be after today")]
    EndDateNotInFuture,

    #[error("Occurrence count must be at least 1")]
    InvalidMaxOccurrences,
}

/// Outcome of checking a candidate pattern.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    /// Violated rules in reporting order.
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Returns true if no rule was violated.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the human-readable messages in reporting order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// ## Summary
/// Checks a candidate pattern against every rule and collects all
/// violations.
///
/// `today` anchors the future-date check for end dates (date-only
/// comparison); passing it explicitly keeps the check deterministic and
/// testable. No side effects.
#[must_use]
pub fn validate(spec: &RecurrenceSpec, today: NaiveDate) -> ValidationResult {
    let mut errors = Vec::new();

    if spec.frequency.is_none() {
        errors.push(ValidationError::MissingFrequency);
    }

    if spec.interval.is_none_or(|interval| interval == 0) {
        errors.push(ValidationError::InvalidInterval);
    }

    if spec.frequency == Some(Frequency::Weekly) && spec.days_of_week.is_empty() {
        errors.push(ValidationError::MissingWeekdays);
    }

    if spec.frequency == Some(Frequency::Monthly)
        && spec.day_of_month.is_none_or(|day| !(1..=31).contains(&day))
    {
        errors.push(ValidationError::InvalidDayOfMonth);
    }

    match spec.end {
        EndCondition::EndDate(date) if date <= today => {
            errors.push(ValidationError::EndDateNotInFuture);
        }
        EndCondition::MaxOccurrences(count) if count == 0 => {
            errors.push(ValidationError::InvalidMaxOccurrences);
        }
        _ => {}
    }

    tracing::trace!(error_count = errors.len(), "Checked candidate pattern");

    ValidationResult { errors }
}
