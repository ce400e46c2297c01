/*!
 * Scheduler Module
 * Per-tick scheduling passes over the simulated process set
 */

pub mod types;

// Re-export public API
pub use types::{
    Algorithm, TimeQuantum, DEFAULT_QUANTUM_SECS, MAX_QUANTUM_SECS, MIN_QUANTUM_SECS,
};

use crate::process::{ProcessRecord, ProcessStatus};
use parking_lot::RwLock;
use tracing::{debug, info};

/// Per-tick scheduler
///
/// `schedule` is a pure transformation over a registry snapshot: it
/// reorders the sequence per the selected algorithm and promotes at
/// most one Waiting process to Running. Every other status transition
/// belongs to the control surface.
pub struct Scheduler {
    algorithm: RwLock<Algorithm>,
    quantum: RwLock<TimeQuantum>,
}

impl Scheduler {
    /// Create new scheduler with algorithm
    pub fn new(algorithm: Algorithm) -> Self {
        Self::with_quantum(algorithm, TimeQuantum::default())
    }

    /// Create scheduler with custom quantum
    pub fn with_quantum(algorithm: Algorithm, quantum: TimeQuantum) -> Self {
        info!(
            algorithm = algorithm.as_str(),
            quantum_secs = quantum.as_secs(),
            "scheduler initialized"
        );
        Self {
            algorithm: RwLock::new(algorithm),
            quantum: RwLock::new(quantum),
        }
    }

    /// Get current algorithm
    pub fn algorithm(&self) -> Algorithm {
        *self.algorithm.read()
    }

    /// Change scheduling algorithm
    pub fn set_algorithm(&self, algorithm: Algorithm) {
        info!(algorithm = algorithm.as_str(), "scheduling algorithm changed");
        *self.algorithm.write() = algorithm;
    }

    /// Get configured quantum
    pub fn quantum(&self) -> TimeQuantum {
        *self.quantum.read()
    }

    /// Change quantum
    pub fn set_quantum(&self, quantum: TimeQuantum) {
        *self.quantum.write() = quantum;
    }

    /// Run one scheduling pass
    pub fn schedule(&self, processes: Vec<ProcessRecord>) -> Vec<ProcessRecord> {
        if processes.is_empty() {
            return processes;
        }
        match self.algorithm() {
            Algorithm::RoundRobin => Self::rotate(processes),
            Algorithm::Priority => Self::by_priority(processes),
            Algorithm::Fcfs => Self::first_come(processes),
        }
    }

    /// Round Robin: move the head to the tail. Models coarse time-slice
    /// rotation without tracking the elapsed quantum; no status changes.
    fn rotate(mut processes: Vec<ProcessRecord>) -> Vec<ProcessRecord> {
        processes.rotate_left(1);
        processes
    }

    /// Priority: active processes sorted by descending priority (ties
    /// keep input order), inactive processes unchanged at the tail.
    fn by_priority(processes: Vec<ProcessRecord>) -> Vec<ProcessRecord> {
        let (mut active, inactive) = partition_active(processes);
        active.sort_by(|a, b| b.priority.cmp(&a.priority));
        promote_head(&mut active);
        active.extend(inactive);
        active
    }

    /// FCFS: active processes sorted by ascending start time (ties keep
    /// input order), inactive processes unchanged at the tail.
    fn first_come(processes: Vec<ProcessRecord>) -> Vec<ProcessRecord> {
        let (mut active, inactive) = partition_active(processes);
        active.sort_by_key(|p| p.start_time);
        promote_head(&mut active);
        active.extend(inactive);
        active
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(Algorithm::default())
    }
}

/// Split into (active, inactive), both in input order
fn partition_active(processes: Vec<ProcessRecord>) -> (Vec<ProcessRecord>, Vec<ProcessRecord>) {
    processes.into_iter().partition(|p| p.status.is_active())
}

/// Promote the head of the sorted active list if it is still waiting.
/// At most one Waiting -> Running transition per pass.
fn promote_head(active: &mut [ProcessRecord]) {
    if let Some(head) = active.first_mut() {
        if head.status == ProcessStatus::Waiting {
            head.status = ProcessStatus::Running;
            debug!(pid = head.pid, "promoted to running");
        }
    }
}
