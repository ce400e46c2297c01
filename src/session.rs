/*!
 * Simulation Session
 * Owns the registry, scheduler, analyzer, and sampler for one run
 */

use crate::core::types::{Pid, Priority};
use crate::monitoring::{NetworkSampler, ResourceAnalyzer};
use crate::process::{loader, ProcessRecord, ProcessRegistry, ProcessStatus};
use crate::scheduler::{Algorithm, Scheduler};
use serde::Serialize;
use std::path::Path;
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::{info, warn};

/// First pid handed out by the session allocator
const PID_BASE: Pid = 1000;

/// Point-in-time display metrics for the control surface
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SessionStats {
    pub total_processes: usize,
    pub running: usize,
    pub waiting: usize,
    pub avg_waiting_secs: f64,
    pub algorithm: Algorithm,
}

/// One simulation run: all mutable state lives here
///
/// The registry, the per-pid allocation map, and the history buffers
/// persist across ticks; `schedule` and `update` are transformations
/// over them. There are no globals - drop the session, drop the run.
pub struct Session {
    registry: ProcessRegistry,
    scheduler: Scheduler,
    analyzer: ResourceAnalyzer,
    network: NetworkSampler,
    next_pid: AtomicU32,
}

impl Session {
    pub fn new() -> Self {
        info!("simulation session initialized");
        Self {
            registry: ProcessRegistry::new(),
            scheduler: Scheduler::default(),
            analyzer: ResourceAnalyzer::new(),
            network: NetworkSampler::new(),
            next_pid: AtomicU32::new(PID_BASE),
        }
    }

    pub fn registry(&self) -> &ProcessRegistry {
        &self.registry
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn analyzer(&self) -> &ResourceAnalyzer {
        &self.analyzer
    }

    pub fn network(&self) -> &NetworkSampler {
        &self.network
    }

    /// Advance the simulation by one tick: allocate resources over the
    /// current list, then reorder/promote it and persist the result.
    pub fn tick(&self) {
        let mut processes = self.registry.list();
        self.analyzer
            .update(&mut processes, self.scheduler.algorithm());
        let scheduled = self.scheduler.schedule(processes);
        self.registry.replace(scheduled);
        self.network.sample();
    }

    /// Create a process with a fresh pid; returns the pid
    pub fn spawn(
        &self,
        name: String,
        status: ProcessStatus,
        cpu_usage: f64,
        memory_usage: f64,
        priority: Priority,
    ) -> Pid {
        let pid = self.next_pid.fetch_add(1, Ordering::Relaxed);
        info!(pid, name = %name, "process spawned");
        self.registry.add(ProcessRecord::new(
            pid,
            name,
            status,
            cpu_usage,
            memory_usage,
            priority,
        ));
        pid
    }

    /// Remove a process. Idempotent.
    pub fn kill(&self, pid: Pid) -> bool {
        self.registry.remove(pid)
    }

    /// Overwrite a process status. No-op when absent.
    pub fn set_status(&self, pid: Pid, status: ProcessStatus) -> bool {
        self.registry.set_status(pid, status)
    }

    /// Global action: mark every process Running
    pub fn start_all(&self) {
        self.set_all(ProcessStatus::Running);
    }

    /// Global action: mark every process Stopped
    pub fn stop_all(&self) {
        self.set_all(ProcessStatus::Stopped);
    }

    fn set_all(&self, status: ProcessStatus) {
        let mut processes = self.registry.list();
        for p in &mut processes {
            p.status = status;
        }
        self.registry.replace(processes);
    }

    /// Ingest a workload file. Invalid entries are skipped; an
    /// unreadable file loads nothing. Returns how many records landed.
    pub fn load_workload(&self, path: impl AsRef<Path>) -> usize {
        match loader::load_workload(path.as_ref()) {
            Ok(records) => {
                let count = records.len();
                for record in records {
                    self.bump_pid_floor(record.pid);
                    self.registry.add(record);
                }
                info!(count, "workload loaded");
                count
            }
            Err(err) => {
                warn!(%err, "workload load failed");
                0
            }
        }
    }

    /// The built-in fallback workload
    pub fn seed_default_workload(&self) {
        let seeds = [
            ProcessRecord::new(1001, "System".to_string(), ProcessStatus::Running, 25.0, 40.0, 10),
            ProcessRecord::new(1002, "Browser".to_string(), ProcessStatus::Running, 35.0, 60.0, 7),
            ProcessRecord::new(1003, "IDE".to_string(), ProcessStatus::Waiting, 5.0, 30.0, 5),
            ProcessRecord::new(
                1004,
                "Background Service".to_string(),
                ProcessStatus::Stopped,
                0.0,
                15.0,
                3,
            ),
        ];
        for record in seeds {
            self.bump_pid_floor(record.pid);
            self.registry.add(record);
        }
        info!("seeded default workload");
    }

    /// Keep spawned pids clear of workload-assigned ones
    fn bump_pid_floor(&self, pid: Pid) {
        self.next_pid
            .fetch_max(pid.saturating_add(1), Ordering::Relaxed);
    }

    /// Display metrics for the control surface
    pub fn stats(&self) -> SessionStats {
        let processes = self.registry.list();
        let running = processes
            .iter()
            .filter(|p| p.status == ProcessStatus::Running)
            .count();
        let waiting: Vec<&ProcessRecord> = processes
            .iter()
            .filter(|p| p.status == ProcessStatus::Waiting)
            .collect();
        let avg_waiting_secs = if waiting.is_empty() {
            0.0
        } else {
            let total: f64 = waiting
                .iter()
                .map(|p| p.start_time.elapsed().unwrap_or_default().as_secs_f64())
                .sum();
            total / waiting.len() as f64
        };
        SessionStats {
            total_processes: processes.len(),
            running,
            waiting: waiting.len(),
            avg_waiting_secs,
            algorithm: self.scheduler.algorithm(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
