/*!
 * Process Registry
 * Ordered ownership of the simulated process set
 */

use super::types::{ProcessRecord, ProcessStatus};
use crate::core::types::Pid;
use parking_lot::RwLock;
use tracing::debug;

/// Ordered set of simulated processes
///
/// Insertion order is the display order until the scheduler reorders
/// the sequence through `replace`. No pid uniqueness check happens
/// here; callers must supply fresh pids.
pub struct ProcessRegistry {
    processes: RwLock<Vec<ProcessRecord>>,
}

impl ProcessRegistry {
    pub fn new() -> Self {
        Self {
            processes: RwLock::new(Vec::new()),
        }
    }

    /// Append a record
    pub fn add(&self, record: ProcessRecord) {
        debug!(pid = record.pid, name = %record.name, "process added");
        self.processes.write().push(record);
    }

    /// Delete every record matching `pid`. Idempotent.
    pub fn remove(&self, pid: Pid) -> bool {
        let mut processes = self.processes.write();
        let before = processes.len();
        processes.retain(|p| p.pid != pid);
        let removed = processes.len() < before;
        if removed {
            debug!(pid, "process removed");
        }
        removed
    }

    /// First record matching `pid`, if any
    pub fn find(&self, pid: Pid) -> Option<ProcessRecord> {
        self.processes.read().iter().find(|p| p.pid == pid).cloned()
    }

    /// Snapshot of the ordered sequence
    pub fn list(&self) -> Vec<ProcessRecord> {
        self.processes.read().clone()
    }

    /// Persist a (reordered) sequence back into the registry
    pub fn replace(&self, processes: Vec<ProcessRecord>) {
        *self.processes.write() = processes;
    }

    /// Overwrite the status of `pid`. No-op when absent.
    pub fn set_status(&self, pid: Pid, status: ProcessStatus) -> bool {
        let mut processes = self.processes.write();
        match processes.iter_mut().find(|p| p.pid == pid) {
            Some(p) => {
                p.status = status;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.processes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.read().is_empty()
    }
}

impl Default for ProcessRegistry {
    fn default() -> Self {
        Self::new()
    }
}
