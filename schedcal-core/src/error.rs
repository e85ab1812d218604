//! Error types for schedcal.

use thiserror::Error;

/// Errors that can occur in the scheduling pipeline.
#[derive(Error, Debug)]
pub enum SchedCalError {
    /// A date or time string did not match its required format.
    #[error("Malformed {field} '{value}' (expected {expected})")]
    MalformedTimestamp {
        field: &'static str,
        value: String,
        expected: String,
    },

    /// An event's end did not come strictly after its start.
    #[error("End time {end} is not after start time {start}")]
    OrderViolation { start: String, end: String },

    /// A raw task record was missing a required field or had the wrong type.
    #[error("Invalid task record: {field} {problem}")]
    SchemaError {
        field: &'static str,
        problem: &'static str,
    },

    /// The scheduling service reply was not a single JSON array.
    #[error("Could not decode the service reply as a JSON array. Raw reply:\n{raw}")]
    ParseFailure { raw: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("ICS generation error: {0}")]
    IcsGenerate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for schedcal operations.
pub type SchedCalResult<T> = Result<T, SchedCalError>;
