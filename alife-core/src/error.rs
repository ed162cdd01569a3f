//! Errors in the library.
use thiserror::Error;

/// Errors raised when reading values out of a [`Record`](crate::record::Record).
#[derive(Error, Debug, PartialEq)]
pub enum CoreError {
    /// The record has no value for the key.
    #[error("Record key error: {0}")]
    RecordKeyError(String),

    /// The value exists but has another type than requested.
    #[error("Record value type error: expected {0}")]
    RecordValueTypeError(String),
}
