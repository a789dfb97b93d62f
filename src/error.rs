//! Error types for book club operations and the demo run.

use std::io;

use thiserror::Error;

/// Reason reported when a book to add is absent
pub const MISSING_BOOK: &str = "book must be present";

/// Reason reported when scheduling without a book or a session
pub const MISSING_SCHEDULE_ARGUMENT: &str = "book and session must be present";

/// Errors raised by book club commands
///
/// Queries never fail: a missing book is an ordinary `None` or `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClubError {
    /// A required argument was absent.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Which argument was missing.
        reason: &'static str,
    },
}

impl ClubError {
    /// Returns true if the error was caused by a bad argument.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

/// Errors that can stop the demo run
#[derive(Debug, Error)]
pub enum DemoError {
    /// A club command rejected its arguments.
    #[error(transparent)]
    Club(#[from] ClubError),

    /// Writing the report failed.
    #[error("failed to write demo report: {0}")]
    Io(#[from] io::Error),
}
