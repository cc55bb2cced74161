//! Error type for reading routing input and writing reports.

use thiserror::Error;

/// Errors raised at the input and output boundaries.
///
/// Trip construction and metrics cannot fail; only parsing and I/O can.
#[derive(Debug, Error)]
pub enum Error {
    /// A numeric field in a `depot`, `capacity` or `pickup` line did not parse.
    #[error("line {line}: invalid {key} value {value:?}")]
    InvalidNumber {
        /// 1-based input line number.
        line: usize,
        /// Protocol key of the offending line.
        key: &'static str,
        /// The text that failed to parse.
        value: String,
    },
    /// Reading input or writing output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Serializing the report failed.
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
