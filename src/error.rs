//! Error types for running an experiment.

use thiserror::Error;

/// Result type for experiment operations.
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur while configuring or evaluating an experiment.
#[derive(Debug, Error)]
pub enum BenchError {
    /// The configured size list has no entries.
    #[error("size list is empty")]
    EmptySizeList,

    /// A size of zero was configured; its theoretical cost is undefined.
    #[error("input size 0 is not allowed in the size list")]
    ZeroSize,

    /// At least one timed trial per size is required.
    #[error("trial count must be at least 1")]
    ZeroTrials,

    /// No measured size reached the inclusion threshold, so the scaling
    /// constant would be a division by zero.
    #[error("no sample with n >= {threshold} and a positive theoretical cost")]
    NoSamplesAboveThreshold {
        /// The configured inclusion threshold.
        threshold: usize,
    },

    /// Serializing the report failed.
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
