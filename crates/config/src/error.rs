//! Configuration Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A configuration error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A numeric option lies outside its documented bounds. Values are never
    /// clamped; the user has to pick a valid one.
    #[display("{option} must be between {min} and {max}, found {value}")]
    ConfigurationRange {
        option: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    /// Both the Hanzi and the statistics export are switched off.
    #[display("nothing to export: both hanzi_mode and statistics_mode are \"none\"")]
    NothingToExport,
    /// The configuration sources could not be read or deserialized.
    #[display("could not load configuration")]
    Load,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        false
    }
}
