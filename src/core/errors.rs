/*!
 * Error Types
 * Centralized error handling with thiserror
 */

use crate::core::types::Priority;
use thiserror::Error;

/// Workload ingestion result
pub type LoadResult<T> = Result<T, LoadError>;

/// Workload file errors
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read workload file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse workload file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Per-record validation errors during bulk load
///
/// A bad record is skipped, never fatal for the batch.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("unknown status '{0}'")]
    UnknownStatus(String),

    #[error("priority {0} outside valid range")]
    InvalidPriority(Priority),

    #[error("cpu demand {0} outside 0-100")]
    InvalidCpu(f64),

    #[error("negative memory demand {0}")]
    InvalidMemory(f64),

    #[error("invalid start time {0}")]
    InvalidStartTime(f64),
}
