/*!
 * Resource Analyzer
 * Derives per-process CPU allocation and aggregate usage from the
 * scheduler's active algorithm
 */

use crate::core::types::Pid;
use crate::monitoring::history::HistoryBuffer;
use crate::process::{ProcessRecord, ProcessStatus};
use crate::scheduler::Algorithm;
use dashmap::DashMap;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

/// Per-tick resource accounting
///
/// Only Running processes draw CPU and memory in a given pass; a
/// Waiting process the scheduler promotes moments later contributes
/// nothing until the next pass.
pub struct ResourceAnalyzer {
    cpu_history: RwLock<HistoryBuffer<f64>>,
    memory_history: RwLock<HistoryBuffer<f64>>,
    /// Last granted allocation for every pid ever seen. Entries are
    /// never removed, even after a process leaves the registry.
    process_cpu_usage: DashMap<Pid, f64>,
}

impl ResourceAnalyzer {
    pub fn new() -> Self {
        Self {
            cpu_history: RwLock::new(HistoryBuffer::default()),
            memory_history: RwLock::new(HistoryBuffer::default()),
            process_cpu_usage: DashMap::new(),
        }
    }

    /// Run one allocation pass and append the aggregates to history
    pub fn update(&self, processes: &mut [ProcessRecord], algorithm: Algorithm) {
        // Every known pid gets a map entry before allocation
        for p in processes.iter() {
            self.process_cpu_usage.entry(p.pid).or_insert(0.0);
        }

        let total_cpu = match algorithm {
            Algorithm::RoundRobin => self.allocate_equal_shares(processes),
            Algorithm::Priority => self.allocate_by_priority(processes),
            Algorithm::Fcfs => self.allocate_first_come(processes),
        };
        let total_memory: f64 = processes
            .iter()
            .filter(|p| p.status == ProcessStatus::Running)
            .map(|p| p.memory_usage)
            .sum();

        self.cpu_history.write().push(total_cpu);
        self.memory_history.write().push(total_memory);
        debug!(
            algorithm = algorithm.as_str(),
            total_cpu, total_memory, "resource pass complete"
        );
    }

    /// Record one grant on the record and in the cumulative map
    fn grant(&self, process: &mut ProcessRecord, allocation: f64) {
        process.current_cpu = Some(allocation);
        self.process_cpu_usage.insert(process.pid, allocation);
    }

    /// Round Robin: every running process gets an equal share of the
    /// machine, capped by its own demand
    fn allocate_equal_shares(&self, processes: &mut [ProcessRecord]) -> f64 {
        let active = processes
            .iter()
            .filter(|p| p.status == ProcessStatus::Running)
            .count();
        if active == 0 {
            return 0.0;
        }
        let share = 100.0 / active as f64;
        let mut total = 0.0;
        for p in processes
            .iter_mut()
            .filter(|p| p.status == ProcessStatus::Running)
        {
            let allocation = p.cpu_usage.min(share);
            self.grant(p, allocation);
            total += allocation;
        }
        total
    }

    /// Priority: shares proportional to priority weight, capped by demand
    fn allocate_by_priority(&self, processes: &mut [ProcessRecord]) -> f64 {
        let total_priority: u32 = processes
            .iter()
            .filter(|p| p.status == ProcessStatus::Running)
            .map(|p| u32::from(p.priority))
            .sum();
        let mut total = 0.0;
        for p in processes
            .iter_mut()
            .filter(|p| p.status == ProcessStatus::Running)
        {
            let share = if total_priority > 0 {
                f64::from(p.priority) / f64::from(total_priority)
            } else {
                0.0
            };
            let allocation = p.cpu_usage.min(100.0 * share);
            self.grant(p, allocation);
            total += allocation;
        }
        total
    }

    /// FCFS: the earliest-started running process receives its full
    /// demand; every other process keeps its previous allocation.
    fn allocate_first_come(&self, processes: &mut [ProcessRecord]) -> f64 {
        let first = processes
            .iter_mut()
            .filter(|p| p.status == ProcessStatus::Running)
            .min_by_key(|p| p.start_time);
        match first {
            Some(p) => {
                let allocation = p.cpu_usage;
                self.grant(p, allocation);
                allocation
            }
            None => 0.0,
        }
    }

    /// Aggregate CPU history, oldest first
    pub fn cpu_usage(&self) -> Vec<f64> {
        self.cpu_history.read().snapshot()
    }

    /// Aggregate memory history, oldest first
    pub fn memory_usage(&self) -> Vec<f64> {
        self.memory_history.read().snapshot()
    }

    /// Most recent aggregate CPU sample
    pub fn latest_cpu(&self) -> Option<f64> {
        self.cpu_history.read().latest()
    }

    /// Most recent aggregate memory sample
    pub fn latest_memory(&self) -> Option<f64> {
        self.memory_history.read().latest()
    }

    /// Cumulative per-pid allocations. Iteration order is unspecified.
    pub fn process_cpu_usage(&self) -> HashMap<Pid, f64> {
        self.process_cpu_usage
            .iter()
            .map(|e| (*e.key(), *e.value()))
            .collect()
    }
}

impl Default for ResourceAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
