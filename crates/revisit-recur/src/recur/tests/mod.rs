//! End-to-end scenarios run through the public engine surface.


use chrono::NaiveDate;

use super::core::{RecurrenceSpec, Weekday};
use super::{expand, validate};
use cases::{assert_case, expansion_cases};

#[test_log::test]
fn expansion_case_table() {
    for case in expansion_cases() {
        assert_case(&case);
    }
}

#[test]
fn invalid_pattern_is_caught_before_expansion() {
    // The monthly day anchor is out of range; a caller following the
    // validate-then-expand sequence never reaches expand
    let spec = RecurrenceSpec::monthly().with_day_of_month(0);
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid date");

    let result = validate(&spec, today);
    assert!(!result.is_valid());
    assert_eq!(result.messages(), vec!["Day of month must be between 1 and 31"]);

    // The defensive path still yields nothing if expand is reached anyway
    assert_eq!(expand(&spec, today, 8).count(), 0);
}

#[test]
fn edited_pattern_revalidates_to_clean() {
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid date");

    let draft = RecurrenceSpec::weekly();
    assert!(!validate(&draft, today).is_valid());

    let fixed = draft.with_days_of_week(vec![Weekday::Tuesday, Weekday::Thursday]);
    assert!(validate(&fixed, today).is_valid());
}
