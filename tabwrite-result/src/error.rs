use std::{fmt, io};
use thiserror::Error;

/// Unified error type for all tabwrite operations.
///
/// Every failure mode in the workspace maps onto one of these variants. At API
/// boundaries the error is surfaced as a fatal outcome for the invocation that
/// produced it; nothing is retried or recovered internally, and bytes already
/// flushed to the output target before the failing step remain on disk.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while opening, writing, or flushing the output target.
    ///
    /// Wraps the standard library error so the underlying OS error code
    /// (permission denied, disk full, missing directory) stays available.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid caller input.
    ///
    /// Covers malformed descriptor matrices (wrong row count, row-length
    /// mismatch, non-integer width cells), row batches whose rows do not match
    /// the column count, unrecognized output format names, and unsupported
    /// column type strings. The message names the offending row or column.
    ///
    /// These errors are recoverable: fix the input and retry the call.
    #[error("Invalid argument: {0}")]
    InvalidArgumentError(String),

    /// Internal error indicating a bug or unexpected state.
    ///
    /// This should never occur during normal operation. The message records
    /// which invariant was violated.
    #[error("An internal operation failed: {0}")]
    Internal(String),
}

impl Error {
    /// Create an invalid-argument error from any displayable value.
    ///
    /// # Examples
    ///
    /// ```
    /// use tabwrite_result::Error;
    ///
    /// fn parse_width(input: &str) -> Result<usize, Error> {
    ///     input.parse::<usize>().map_err(Error::invalid_argument)
    /// }
    ///
    /// assert_eq!(parse_width("14").unwrap(), 14);
    /// assert!(matches!(parse_width("wide"), Err(Error::InvalidArgumentError(_))));
    /// ```
    #[inline]
    pub fn invalid_argument<E: fmt::Display>(err: E) -> Self {
        Error::InvalidArgumentError(err.to_string())
    }
}
