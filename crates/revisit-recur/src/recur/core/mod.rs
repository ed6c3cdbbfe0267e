//! Type definitions for recurrence patterns.

pub mod frequency;
pub mod spec;
pub mod weekday;

pub use frequency::Frequency;
pub use spec::{EndCondition, RecurrenceSpec};
pub use weekday::Weekday;
