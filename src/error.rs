//! Error types for the paceplan engine.

use thiserror::Error;

/// Errors that can occur when parsing time and pace literals.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("empty time value")]
    Empty,

    #[error("missing ':' separator in {0:?}")]
    MissingSeparator(String),

    #[error("unexpected number of ':' parts in {0:?}")]
    WrongPartCount(String),

    #[error("invalid time component {part:?} in {value:?}")]
    BadPart { value: String, part: String },
}

/// Errors returned by the pacing calculation.
///
/// A calculation either fully succeeds or fails with one of these; no
/// partial plan is ever produced.
#[derive(Debug, Error)]
pub enum PacingError {
    /// A value needed for the selected calculation branch was not supplied.
    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),

    /// A time or pace literal did not match the colon-delimited format.
    #[error("invalid time format: {0}")]
    Parse(#[from] ParseError),

    /// A numeric field was non-positive, or an enumerated key was not
    /// recognized.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The speed solver produced a non-finite or negative root.
    #[error("solver domain error: {0}")]
    Domain(String),
}
