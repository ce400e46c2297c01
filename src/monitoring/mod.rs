/*!
 * Monitoring Module
 * Resource accounting, history windows, and synthetic samplers
 */

pub mod analyzer;
pub mod history;
pub mod network;
pub mod tracer;

// Re-export public API
pub use analyzer::ResourceAnalyzer;
pub use history::{HistoryBuffer, HISTORY_CAPACITY};
pub use network::NetworkSampler;
pub use tracer::init_tracing;
