//! Command-line Error Types

use derive_more::{Display, Error};

pub type Error = exn::Exn<ErrorKind>;
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The configuration is invalid; nothing was analysed.
    #[display("invalid configuration")]
    Configuration,
    /// The book folder could not be listed.
    #[display("could not select books")]
    Books,
    #[display("export failed")]
    Export,
    /// Not a single selected book could be read and analysed.
    #[display("every selected book failed")]
    AllBooksFailed,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Books)
    }
}
