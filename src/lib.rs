/*!
 * schedsim
 * Simulated OS process scheduling and resource-allocation monitoring
 */

pub mod core;
pub mod monitoring;
pub mod process;
pub mod scheduler;
pub mod session;

// Re-exports
pub use crate::core::errors::{LoadError, LoadResult, RecordError};
pub use crate::core::types::{
    validate_priority, Pid, Priority, DEFAULT_PRIORITY, MAX_PRIORITY, MIN_PRIORITY,
};
pub use crate::monitoring::{
    init_tracing, HistoryBuffer, NetworkSampler, ResourceAnalyzer, HISTORY_CAPACITY,
};
pub use crate::process::{load_workload, ProcessRecord, ProcessRegistry, ProcessStatus};
pub use crate::scheduler::{Algorithm, Scheduler, TimeQuantum};
pub use crate::session::{Session, SessionStats};
