/*!
 * Scheduler Types
 * Algorithm selection and quantum configuration
 */

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Scheduling algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Coarse time-slice rotation
    RoundRobin,
    /// Highest priority runs first
    Priority,
    /// Earliest start time runs first
    Fcfs,
}

impl Algorithm {
    /// Parse from string representation
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "round_robin" | "round robin" | "roundrobin" | "rr" => Ok(Self::RoundRobin),
            "priority" | "prio" => Ok(Self::Priority),
            "first_come_first_served" | "first come first served" | "fcfs" => Ok(Self::Fcfs),
            _ => Err(format!(
                "Invalid algorithm '{}'. Valid: round_robin, priority, fcfs",
                s
            )),
        }
    }

    /// Convert to string representation
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RoundRobin => "round_robin",
            Self::Priority => "priority",
            Self::Fcfs => "fcfs",
        }
    }
}

impl Default for Algorithm {
    fn default() -> Self {
        Self::RoundRobin
    }
}

impl Serialize for Algorithm {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Algorithm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Quantum bounds (seconds)
pub const MIN_QUANTUM_SECS: u64 = 1;
pub const MAX_QUANTUM_SECS: u64 = 10;
pub const DEFAULT_QUANTUM_SECS: u64 = 2;

/// Time quantum configuration (seconds)
///
/// Round Robin metadata only: the per-tick rotation is advisory and
/// does not consume the quantum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeQuantum {
    pub secs: u64,
}

impl TimeQuantum {
    /// Create new time quantum
    pub fn new(secs: u64) -> Result<Self, String> {
        if !(MIN_QUANTUM_SECS..=MAX_QUANTUM_SECS).contains(&secs) {
            return Err(format!(
                "Invalid quantum: {} must be between {}s and {}s",
                secs, MIN_QUANTUM_SECS, MAX_QUANTUM_SECS
            ));
        }
        Ok(Self { secs })
    }

    /// Get seconds
    #[inline]
    pub const fn as_secs(&self) -> u64 {
        self.secs
    }
}

impl Default for TimeQuantum {
    fn default() -> Self {
        Self {
            secs: DEFAULT_QUANTUM_SECS,
        }
    }
}

impl<'de> Deserialize<'de> for TimeQuantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Inner {
            secs: u64,
        }

        let inner = Inner::deserialize(deserializer)?;
        Self::new(inner.secs).map_err(serde::de::Error::custom)
    }
}
