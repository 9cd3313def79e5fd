//! Errors raised while normalizing console input

use thiserror::Error;

/// A single rejected answer. Callers re-prompt; these are never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Examples: 10 pm, 6 am, 22, 22:30")]
    UnrecognizedTime(String),

    #[error("Hour must be between 0 and 23")]
    HourOutOfRange(i64),

    #[error("Enter a valid number")]
    NotANumber(String),

    #[error("Must be between {min} and {max}")]
    OutOfRange { value: i64, min: i64, max: i64 },

    #[error("Must be {min} or more")]
    BelowMinimum { value: i64, min: i64 },

    #[error("Invalid {field}")]
    UnknownCategory { field: &'static str, value: String },

    #[error("Invalid option")]
    InvalidChoice(String),
}
