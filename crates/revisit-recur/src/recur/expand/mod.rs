//! Bounded occurrence generation for validated patterns.
//!
//! Expansion walks forward from a start date one candidate at a time and
//! stops at the pattern's own end condition, the caller's cap, or a hard
//! step ceiling. The sequence is recomputed from scratch on every call;
//! nothing is cached or resumed.

use chrono::{Datelike, Days, Months, NaiveDate};

use revisit_core::constants::{DEFAULT_PREVIEW_CAP, SAFETY_CEILING_FACTOR};

use crate::recur::core::{EndCondition, Frequency, RecurrenceSpec};

/// Options for preview assembly.
#[derive(Debug, Clone)]
pub struct PreviewOptions {
    /// Maximum number of occurrence dates to materialize.
    pub max_preview: usize,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            max_preview: DEFAULT_PREVIEW_CAP,
        }
    }
}

impl PreviewOptions {
    /// Sets the preview cap.
    #[must_use]
    pub fn with_max_preview(mut self, max: usize) -> Self {
        self.max_preview = max;
        self
    }
}

/// Occurrence dates materialized for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    /// Occurrences in ascending order, at most the configured cap of them.
    pub dates: Vec<NaiveDate>,
    /// True when the pattern kept producing past the cap, so the caller
    /// should render a "+N more" indicator.
    pub truncated: bool,
}

/// Lazy iterator over the occurrence dates of a pattern.
///
/// Produced by [`expand`]. Dates come out strictly ascending, starting at
/// the start date, and the iterator fuses once any stop condition is hit.
#[derive(Debug, Clone)]
pub struct Occurrences {
    frequency: Frequency,
    interval: u32,
    day_of_month: Option<u8>,
    end: EndCondition,
    current: Option<NaiveDate>,
    emitted: usize,
    limit: usize,
    steps: usize,
    ceiling: usize,
}

impl Occurrences {
    /// An expansion that yields nothing.
    fn empty() -> Self {
        Self {
            frequency: Frequency::Daily,
            interval: 1,
            day_of_month: None,
            end: EndCondition::Never,
            current: None,
            emitted: 0,
            limit: 0,
            steps: 0,
            ceiling: 0,
        }
    }

    /// Next candidate date after `current`, or `None` when calendar
    /// arithmetic runs off the representable range.
    fn advance(&self, current: NaiveDate) -> Option<NaiveDate> {
        match self.frequency {
            Frequency::Daily => current.checked_add_days(Days::new(u64::from(self.interval))),
            // Whole-week stride: selected weekdays narrow validation, not
            // the step size.
            Frequency::Weekly => current.checked_add_days(Days::new(7 * u64::from(self.interval))),
            Frequency::Monthly => add_months_anchored(current, self.interval, self.day_of_month),
            Frequency::Yearly => {
                current.checked_add_months(Months::new(self.interval.checked_mul(12)?))
            }
        }
    }
}

impl Iterator for Occurrences {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.current?;

        if self.emitted >= self.limit {
            self.current = None;
            return None;
        }

        self.steps += 1;
        if self.steps > self.ceiling {
            tracing::trace!(steps = self.steps, "Step ceiling reached, truncating expansion");
            self.current = None;
            return None;
        }

        if let EndCondition::EndDate(end) = self.end
            && current > end
        {
            self.current = None;
            return None;
        }

        self.emitted += 1;
        self.current = self.advance(current);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.current {
            Some(_) => (0, Some(self.limit - self.emitted)),
            None => (0, Some(0)),
        }
    }
}

impl std::iter::FusedIterator for Occurrences {}

/// ## Summary
/// Expands a pattern into a lazy sequence of occurrence dates.
///
/// Callers are expected to run `validate` first and only expand patterns
/// that pass; a structurally unusable pattern (missing frequency or
/// interval, or a monthly pattern without a usable day anchor) yields an
/// empty sequence rather than panicking.
///
/// Dates are strictly ascending and start at `start`. The sequence length
/// never exceeds `max_preview`, or the pattern's own occurrence count when
/// that is smaller.
///
/// ## Side Effects
///
/// None - this is a pure function that performs expansion in memory.
#[must_use]
pub fn expand(spec: &RecurrenceSpec, start: NaiveDate, max_preview: usize) -> Occurrences {
    let (Some(frequency), Some(interval)) = (spec.frequency, spec.interval) else {
        tracing::trace!("Pattern missing frequency or interval, expanding to nothing");
        return Occurrences::empty();
    };

    if interval == 0 {
        tracing::trace!("Zero interval, expanding to nothing");
        return Occurrences::empty();
    }

    if frequency == Frequency::Monthly
        && !spec.day_of_month.is_some_and(|day| (1..=31).contains(&day))
    {
        tracing::trace!("Monthly pattern without a usable day anchor, expanding to nothing");
        return Occurrences::empty();
    }

    let limit = match spec.end {
        EndCondition::MaxOccurrences(count) => {
            max_preview.min(usize::try_from(count).unwrap_or(usize::MAX))
        }
        EndCondition::Never | EndCondition::EndDate(_) => max_preview,
    };

    tracing::trace!(frequency = %frequency, interval, limit, "Expanding pattern");

    Occurrences {
        frequency,
        interval,
        day_of_month: spec.day_of_month,
        end: spec.end,
        current: Some(start),
        emitted: 0,
        limit,
        steps: 0,
        ceiling: limit.saturating_mul(SAFETY_CEILING_FACTOR),
    }
}

/// ## Summary
/// Materializes a preview list plus a truncation flag.
///
/// `truncated` is true exactly when the cap cut the sequence short, i.e.
/// the pattern itself would have produced more dates. A pattern whose own
/// end condition lands precisely on the cap does not count as truncated.
#[must_use]
pub fn preview(spec: &RecurrenceSpec, start: NaiveDate, options: &PreviewOptions) -> Preview {
    let cap = options.max_preview;
    let mut dates: Vec<NaiveDate> = expand(spec, start, cap.saturating_add(1)).collect();
    let truncated = dates.len() > cap;
    if truncated {
        dates.truncate(cap);
    }
    Preview { dates, truncated }
}

/// Steps a monthly pattern forward, re-anchoring on the configured day of
/// month and clamping to the target month's length (a day-31 anchor lands
/// on Feb 28/29 and back on Mar 31).
fn add_months_anchored(
    current: NaiveDate,
    interval: u32,
    day_of_month: Option<u8>,
) -> Option<NaiveDate> {
    let months0 = current.month0().checked_add(interval)?;
    let year = current.year().checked_add(i32::try_from(months0 / 12).ok()?)?;
    let month = months0 % 12 + 1;
    let anchor = day_of_month.map_or_else(|| current.day(), u32::from);
    let day = anchor.min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Number of days in the given month.
fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map_or(31, |last| last.day())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recur::core::Weekday;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[test]
    fn daily_every_other_day() {
        let spec = RecurrenceSpec::daily().with_interval(2);
        let dates: Vec<_> = expand(&spec, date(2024, 1, 1), 4).collect();
        assert_eq!(
            dates,
            vec![
                date(2024, 1, 1),
                date(2024, 1, 3),
                date(2024, 1, 5),
                date(2024, 1, 7),
            ]
        );
    }

    #[test]
    fn monthly_day31_clamps_in_leap_february() {
        let spec = RecurrenceSpec::monthly().with_day_of_month(31);
        let dates: Vec<_> = expand(&spec, date(2024, 1, 31), 3).collect();
        assert_eq!(
            dates,
            vec![date(2024, 1, 31), date(2024, 2, 29), date(2024, 3, 31)]
        );
    }

    #[test]
    fn monthly_day31_clamps_in_plain_february() {
        let spec = RecurrenceSpec::monthly().with_day_of_month(31);
        let dates: Vec<_> = expand(&spec, date(2023, 1, 31), 2).collect();
        assert_eq!(dates, vec![date(2023, 1, 31), date(2023, 2, 28)]);
    }

    #[test]
    fn occurrence_count_binds_before_preview_cap() {
        let spec = RecurrenceSpec::daily().with_max_occurrences(3);
        let dates: Vec<_> = expand(&spec, date(2024, 1, 1), 8).collect();
        assert_eq!(dates.len(), 3);
    }

    #[test]
    fn end_date_is_inclusive_and_cuts_the_walk() {
        let spec = RecurrenceSpec::yearly().with_end_date(date(2025, 6, 1));
        let dates: Vec<_> = expand(&spec, date(2024, 1, 1), 10).collect();
        assert_eq!(dates, vec![date(2024, 1, 1), date(2025, 1, 1)]);
        assert!(dates.iter().all(|occurrence| *occurrence <= date(2025, 6, 1)));
    }

    #[test]
    fn end_date_before_start_yields_nothing() {
        let spec = RecurrenceSpec::daily().with_end_date(date(2023, 12, 31));
        assert_eq!(expand(&spec, date(2024, 1, 1), 8).count(), 0);
    }

    #[test]
    fn weekly_advances_by_whole_weeks() {
        let spec = RecurrenceSpec::weekly().with_days_of_week(vec![Weekday::Monday]);
        // 2024-01-01 is a Monday
        let start = date(2024, 1, 1);
        assert_eq!(start.weekday(), Weekday::Monday.to_chrono());
        let dates: Vec<_> = expand(&spec, start, 3).collect();
        assert_eq!(dates, vec![date(2024, 1, 1), date(2024, 1, 8), date(2024, 1, 15)]);
    }

    #[test]
    fn yearly_from_leap_day_clamps_to_feb_28() {
        let spec = RecurrenceSpec::yearly();
        let dates: Vec<_> = expand(&spec, date(2024, 2, 29), 2).collect();
        assert_eq!(dates, vec![date(2024, 2, 29), date(2025, 2, 28)]);
    }

    #[test]
    fn dates_are_strictly_ascending() {
        let spec = RecurrenceSpec::monthly().with_day_of_month(31).with_interval(2);
        let dates: Vec<_> = expand(&spec, date(2024, 1, 31), 8).collect();
        for pair in dates.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn expansion_is_deterministic() {
        let spec = RecurrenceSpec::weekly()
            .with_interval(3)
            .with_days_of_week(vec![Weekday::Friday]);
        let first: Vec<_> = expand(&spec, date(2024, 3, 1), 5).collect();
        let second: Vec<_> = expand(&spec, date(2024, 3, 1), 5).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn unusable_pattern_expands_to_nothing() {
        let spec = RecurrenceSpec::new();
        assert_eq!(expand(&spec, date(2024, 1, 1), 8).count(), 0);

        let spec = RecurrenceSpec::daily().with_interval(0);
        assert_eq!(expand(&spec, date(2024, 1, 1), 8).count(), 0);

        let spec = RecurrenceSpec::monthly().with_day_of_month(0);
        assert_eq!(expand(&spec, date(2024, 1, 1), 8).count(), 0);
    }

    #[test]
    fn preview_flags_cap_truncation_only() {
        let start = date(2024, 1, 1);
        let options = PreviewOptions::default().with_max_preview(4);

        // Open-ended pattern keeps producing past the cap
        let open = RecurrenceSpec::daily();
        let result = preview(&open, start, &options);
        assert_eq!(result.dates.len(), 4);
        assert!(result.truncated);

        // The pattern's own count ends the sequence below the cap
        let counted = RecurrenceSpec::daily().with_max_occurrences(3);
        let result = preview(&counted, start, &options);
        assert_eq!(result.dates.len(), 3);
        assert!(!result.truncated);

        // A count landing exactly on the cap is not truncation
        let exact = RecurrenceSpec::daily().with_max_occurrences(4);
        let result = preview(&exact, start, &options);
        assert_eq!(result.dates.len(), 4);
        assert!(!result.truncated);

        // An end date landing exactly on the cap is not truncation either
        let bounded = RecurrenceSpec::daily().with_end_date(date(2024, 1, 4));
        let result = preview(&bounded, start, &options);
        assert_eq!(result.dates.len(), 4);
        assert!(!result.truncated);
    }

    #[test]
    fn monthly_anchor_above_start_day() {
        // The anchor re-asserts itself each month even when the start day
        // is below it
        let spec = RecurrenceSpec::monthly().with_day_of_month(31);
        let dates: Vec<_> = expand(&spec, date(2024, 1, 15), 3).collect();
        assert_eq!(
            dates,
            vec![date(2024, 1, 15), date(2024, 2, 29), date(2024, 3, 31)]
        );
    }

    #[test]
    fn days_in_month_handles_year_boundary_and_leap() {
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 4), 30);
    }
}
