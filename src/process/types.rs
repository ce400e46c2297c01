/*!
 * Process Types
 * The simulated process entity and its status
 */

use crate::core::types::{Pid, Priority};
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// Simulated process status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessStatus {
    /// Process holds CPU time this tick
    Running,
    /// Process is ready and may be promoted by the scheduler
    Waiting,
    /// Process is suspended by the control surface
    Stopped,
}

impl ProcessStatus {
    /// Parse from string representation
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "running" => Ok(Self::Running),
            "waiting" => Ok(Self::Waiting),
            "stopped" => Ok(Self::Stopped),
            _ => Err(format!(
                "Invalid status '{}'. Valid: running, waiting, stopped",
                s
            )),
        }
    }

    /// Convert to string representation
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Waiting => "waiting",
            Self::Stopped => "stopped",
        }
    }

    /// Running and Waiting processes compete for the CPU
    #[inline]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Running | Self::Waiting)
    }
}

/// One simulated process record
///
/// `cpu_usage`, `memory_usage` and `priority` are nominal demands fixed
/// at creation. `current_cpu` is whatever the analyzer granted on its
/// most recent pass and stays `None` until then; when set it never
/// exceeds `cpu_usage`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessRecord {
    pub pid: Pid,
    pub name: String,
    pub status: ProcessStatus,
    pub cpu_usage: f64,
    pub memory_usage: f64,
    pub priority: Priority,
    pub start_time: SystemTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_cpu: Option<f64>,
}

impl ProcessRecord {
    pub fn new(
        pid: Pid,
        name: String,
        status: ProcessStatus,
        cpu_usage: f64,
        memory_usage: f64,
        priority: Priority,
    ) -> Self {
        Self {
            pid,
            name,
            status,
            cpu_usage,
            memory_usage,
            priority,
            start_time: SystemTime::now(),
            current_cpu: None,
        }
    }

    pub fn with_start_time(mut self, start_time: SystemTime) -> Self {
        self.start_time = start_time;
        self
    }
}
