//! Recurrence pattern value types.

use std::fmt;

use chrono::NaiveDate;

use super::{Frequency, Weekday};

/// Rule terminating occurrence generation.
///
/// Exactly one variant is active at a time; replacing the end condition is
/// the only way to switch between a date boundary and an occurrence count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EndCondition {
    /// No terminating rule; generation is bounded by the caller's cap only.
    #[default]
    Never,
    /// Inclusive date boundary.
    EndDate(NaiveDate),
    /// Total number of occurrences to generate.
    MaxOccurrences(u32),
}

/// Recurrence pattern as configured by a caller.
///
/// Fields are optional so a mid-edit pattern can be carried around and
/// re-checked on every change: `validate` reports which rules a candidate
/// still violates, and `expand` only walks patterns that pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecurrenceSpec {
    /// Recurrence frequency (required for a valid pattern).
    pub frequency: Option<Frequency>,

    /// "Every N units" of the frequency (required, >= 1).
    pub interval: Option<u32>,

    /// Selected weekdays; required and non-empty for weekly patterns.
    pub days_of_week: Vec<Weekday>,

    /// Anchor day for monthly patterns (1-31).
    pub day_of_month: Option<u8>,

    /// End condition.
    pub end: EndCondition,
}

impl RecurrenceSpec {
    /// Creates a new empty pattern.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a daily pattern with an interval of 1.
    #[must_use]
    pub fn daily() -> Self {
        Self {
            frequency: Some(Frequency::Daily),
            interval: Some(1),
            ..Self::default()
        }
    }

    /// Creates a weekly pattern with an interval of 1.
    ///
    /// Weekdays still have to be supplied via [`Self::with_days_of_week`]
    /// for the pattern to validate.
    #[must_use]
    pub fn weekly() -> Self {
        Self {
            frequency: Some(Frequency::Weekly),
            interval: Some(1),
            ..Self::default()
        }
    }

    /// Creates a monthly pattern with an interval of 1.
    ///
    /// A day anchor still has to be supplied via [`Self::with_day_of_month`]
    /// for the pattern to validate.
    #[must_use]
    pub fn monthly() -> Self {
        Self {
            frequency: Some(Frequency::Monthly),
            interval: Some(1),
            ..Self::default()
        }
    }

    /// Creates a yearly pattern with an interval of 1.
    #[must_use]
    pub fn yearly() -> Self {
        Self {
            frequency: Some(Frequency::Yearly),
            interval: Some(1),
            ..Self::default()
        }
    }

    /// Sets the interval.
    #[must_use]
    pub fn with_interval(mut self, interval: u32) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Sets the selected weekdays.
    #[must_use]
    pub fn with_days_of_week(mut self, days: Vec<Weekday>) -> Self {
        self.days_of_week = days;
        self
    }

    /// Sets the day-of-month anchor.
    #[must_use]
    pub fn with_day_of_month(mut self, day: u8) -> Self {
        self.day_of_month = Some(day);
        self
    }

    /// Ends the pattern at a date boundary, replacing any occurrence count.
    #[must_use]
    pub fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.end = EndCondition::EndDate(date);
        self
    }

    /// Ends the pattern after a number of occurrences, replacing any date
    /// boundary.
    #[must_use]
    pub fn with_max_occurrences(mut self, count: u32) -> Self {
        self.end = EndCondition::MaxOccurrences(count);
        self
    }
}

impl fmt::Display for RecurrenceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(frequency) = self.frequency else {
            return f.write_str("unconfigured pattern");
        };

        let interval = self.interval.unwrap_or(1);
        if interval == 1 {
            write!(f, "every {}", frequency.unit_noun())?;
        } else {
            write!(f, "every {interval} {}s", frequency.unit_noun())?;
        }

        if frequency == Frequency::Weekly && !self.days_of_week.is_empty() {
            let days: Vec<_> = self.days_of_week.iter().map(ToString::to_string).collect();
            write!(f, " on {}", days.join(", "))?;
        }

        if let Some(day) = self.day_of_month
            && frequency == Frequency::Monthly
        {
            write!(f, " on day {day}")?;
        }

        match self.end {
            EndCondition::Never => Ok(()),
            EndCondition::EndDate(date) => write!(f, " until {date}"),
            EndCondition::MaxOccurrences(count) => write!(f, " for {count} occurrences"),
        }
    }
}
