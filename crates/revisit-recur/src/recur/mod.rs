//! Recurrence pattern model, validation, and expansion.
//!
//! This module provides the complete recurrence engine:
//!
//! - `core`: Type definitions for recurrence patterns
//! - `validate`: Rule checks for candidate patterns
//! - `expand`: Bounded occurrence generation for previews
//! - `wire`: REST payload adapter
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use revisit_recur::recur::{RecurrenceSpec, expand, validate};
//!
//! let spec = RecurrenceSpec::daily().with_interval(2);
//!
//! let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! assert!(validate(&spec, today).is_valid());
//!
//! let dates: Vec<NaiveDate> = expand(&spec, today, 4).collect();
//! assert_eq!(dates.len(), 4);
//! ```

pub mod core;
pub mod expand;
pub mod validate;
pub mod wire;

#[cfg(test)]
mod tests;

// Re-export commonly used items at module level
pub use self::core::{EndCondition, Frequency, RecurrenceSpec, Weekday};
pub use expand::{Occurrences, Preview, PreviewOptions, expand, preview};
pub use validate::{ValidationError, ValidationResult, validate};
pub use wire::RecurrencePayload;
