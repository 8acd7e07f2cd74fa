//! Analysis Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// An analysis error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The text does not contain a single Hanzi; it is probably not written
    /// in Chinese and there is nothing to analyse.
    #[display("no hanzi found in \"{_0}\"")]
    EmptyBook(#[error(not(source))] String),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // Analysis is a pure function of the text; the same input always
        // produces the same failure.
        false
    }
}
