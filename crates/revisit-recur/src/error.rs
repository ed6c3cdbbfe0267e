use thiserror::Error;

/// Recurrence pattern parsing and validation errors
#[derive(Error, Debug)]
pub enum RecurError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    CoreError(#[from] revisit_core::error::CoreError),
}

pub type RecurResult<T> = std::result::Result<T, RecurError>;
