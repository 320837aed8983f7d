//! Error types for the calculation engine

use thiserror::Error;

/// Errors raised by the engine entry points
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A date or time string could not be parsed
    #[error("Invalid {field} '{value}': expected {expected}")]
    InvalidInput {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl Error {
    pub fn invalid_date(value: &str) -> Self {
        Error::InvalidInput {
            field: "date",
            value: value.to_string(),
            expected: "YYYY-MM-DD",
        }
    }

    pub fn invalid_time(value: &str) -> Self {
        Error::InvalidInput {
            field: "time",
            value: value.to_string(),
            expected: "HH:MM (24-hour)",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
