//! Recurrence engine for recurring-visit scheduling.
//!
//! Validates candidate recurrence patterns and expands validated patterns
//! into bounded, ordered sequences of calendar dates for preview display.
//! The engine is framework-free and side-effect-free; form layers and REST
//! adapters are thin callers that render or ship what it returns.

pub mod error;
pub mod recur;
