//! Report Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};
use std::path::PathBuf;

/// A report error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for report operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
///
/// ### Per-book Errors
/// - [`ErrorKind::Read`]
/// - [`ErrorKind::Analysis`]
///
/// These never abort a run; they are collected in the [`RunLog`](crate::RunLog).
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The book's file is missing, unreadable or not valid UTF-8.
    #[display("could not read \"{_0}\"")]
    Read(#[error(not(source))] String),
    /// The book was read but could not be analysed.
    #[display("could not process \"{_0}\"")]
    Analysis(#[error(not(source))] String),
    /// Too few books are selected for the requested export.
    #[display("at least {required} book(s) required, {selected} selected")]
    EmptySelection { required: usize, selected: usize },
    /// The book folder could not be listed.
    #[display("could not list books in {}", _0.display())]
    ListBooks(#[error(not(source))] PathBuf),
    /// A CSV file or the export folder could not be written.
    #[display("could not write {}", _0.display())]
    Write(#[error(not(source))] PathBuf),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Read(_) | Self::ListBooks(_) | Self::Write(_))
    }
}

/// Renders an error and its chain of causes on one line, outermost first:
/// `could not read "x": No such file or directory (os error 2)`.
pub fn describe(err: &Error) -> String {
    let mut frame = err.frame();
    let mut reason = frame.error().to_string();
    while let Some(cause) = frame.children().first() {
        reason.push_str(": ");
        reason.push_str(&cause.error().to_string());
        frame = cause;
    }
    reason
}

#[cfg(test)]
mod tests {
    use super::*;
    use exn::ResultExt;

    #[test]
    fn error_kind_display() {
        assert_eq!(ErrorKind::Read("三国演义".to_string()).to_string(), "could not read \"三国演义\"");
        assert_eq!(
            ErrorKind::EmptySelection { required: 2, selected: 1 }.to_string(),
            "at least 2 book(s) required, 1 selected"
        );
        assert_eq!(ErrorKind::Write(PathBuf::from("out/a.csv")).to_string(), "could not write out/a.csv");
    }

    #[test]
    fn describe_includes_causes() {
        let err = std::fs::read("/nonexistent/三国演义.txt")
            .or_raise(|| ErrorKind::Read("三国演义".to_string()))
            .unwrap_err();
        let reason = describe(&err);
        assert!(reason.starts_with("could not read \"三国演义\": "), "{reason}");
        assert!(reason.len() > "could not read \"三国演义\": ".len());
    }

    #[test]
    fn describe_without_causes() {
        let err = Error::from(ErrorKind::Analysis("空".to_string()));
        assert_eq!(describe(&err), "could not process \"空\"");
    }

    #[test]
    fn error_kind_retryable() {
        assert!(ErrorKind::Read(String::new()).is_retryable());
        assert!(!ErrorKind::Analysis(String::new()).is_retryable());
        assert!(!ErrorKind::EmptySelection { required: 1, selected: 0 }.is_retryable());
    }
}
