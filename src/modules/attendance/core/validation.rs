// Validation errors for punch input.
//
// Purpose
// - Describe why an extracted punch could not be turned into a command.
//
// Boundaries
// - Raised before any ledger is loaded or written.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("required field missing: {0}")]
    MissingField(&'static str),

    #[error("malformed date: {0:?}")]
    MalformedDate(String),

    #[error("malformed time: {0:?}")]
    MalformedTime(String),

    #[error("malformed duration: {0:?}")]
    MalformedDuration(String),
}
