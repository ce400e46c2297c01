/*!
 * Process Module
 * Simulated process records, the registry that owns them, and bulk load
 */

pub mod loader;
pub mod registry;
pub mod types;

// Re-export public API
pub use loader::{load_workload, parse_workload};
pub use registry::ProcessRegistry;
pub use types::{ProcessRecord, ProcessStatus};
