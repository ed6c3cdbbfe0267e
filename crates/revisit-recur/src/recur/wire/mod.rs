//! REST payload adapter for recurrence patterns.
//!
//! The persistence collaborator exchanges patterns as flat JSON objects
//! with optional constraint fields. One side of the wire speaks `camelCase`
//! and the other `snake_case`, so deserialization accepts both spellings.
//! Patterns travel verbatim; expansions are never serialized.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{RecurError, RecurResult};
use crate::recur::core::{EndCondition, Frequency, RecurrenceSpec, Weekday};

/// Flat wire shape for a recurrence pattern.
///
/// The end condition is encoded by field presence: `endDate` set, or
/// `maxOccurrences` set, or neither (never-ending). Setting both is
/// rejected when converting to a [`RecurrenceSpec`]. Out-of-range numeric
/// values pass through so validation can report them as rule violations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecurrencePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,

    #[serde(alias = "days_of_week", skip_serializing_if = "Option::is_none")]
    pub days_of_week: Option<Vec<String>>,

    #[serde(alias = "day_of_month", skip_serializing_if = "Option::is_none")]
    pub day_of_month: Option<u8>,

    /// Date-only ISO string on the wire.
    #[serde(alias = "end_date", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,

    #[serde(alias = "max_occurrences", skip_serializing_if = "Option::is_none")]
    pub max_occurrences: Option<u32>,
}

impl TryFrom<RecurrencePayload> for RecurrenceSpec {
    type Error = RecurError;

    fn try_from(payload: RecurrencePayload) -> RecurResult<Self> {
        let frequency = payload
            .frequency
            .as_deref()
            .map(|token| {
                Frequency::parse(token)
                    .ok_or_else(|| RecurError::ParseError(format!("unknown frequency: {token}")))
            })
            .transpose()?;

        let days_of_week = payload
            .days_of_week
            .unwrap_or_default()
            .iter()
            .map(|token| {
                Weekday::parse(token)
                    .ok_or_else(|| RecurError::ParseError(format!("unknown weekday: {token}")))
            })
            .collect::<RecurResult<Vec<_>>>()?;

        let end = match (payload.end_date, payload.max_occurrences) {
            (Some(_), Some(_)) => {
                return Err(RecurError::InvalidInput(
                    "endDate and maxOccurrences are mutually exclusive".to_string(),
                ));
            }
            (Some(date), None) => EndCondition::EndDate(date),
            (None, Some(count)) => EndCondition::MaxOccurrences(count),
            (None, None) => EndCondition::Never,
        };

        Ok(Self {
            frequency,
            interval: payload.interval,
            days_of_week,
            day_of_month: payload.day_of_month,
            end,
        })
    }
}

impl From<&RecurrenceSpec> for RecurrencePayload {
    fn from(spec: &RecurrenceSpec) -> Self {
        let (end_date, max_occurrences) = match spec.end {
            EndCondition::Never => (None, None),
            EndCondition::EndDate(date) => (Some(date), None),
            EndCondition::MaxOccurrences(count) => (None, Some(count)),
        };

        Self {
            frequency: spec.frequency.map(|frequency| frequency.as_str().to_string()),
            interval: spec.interval,
            days_of_week: (!spec.days_of_week.is_empty()).then(|| {
                spec.days_of_week
                    .iter()
                    .map(|day| day.as_str().to_string())
                    .collect()
            }),
            day_of_month: spec.day_of_month,
            end_date,
            max_occurrences,
        }
    }
}
