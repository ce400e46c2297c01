/*!
 * Network Sampler
 * Synthetic per-tick network usage for the dashboard charts
 */

use crate::monitoring::history::HistoryBuffer;
use parking_lot::RwLock;
use rand::Rng;

/// Degenerate producer: one uniform sample in [0, 100] per tick
///
/// Shares the bounded-history contract with the analyzer; there is no
/// allocation logic behind the numbers.
pub struct NetworkSampler {
    history: RwLock<HistoryBuffer<u8>>,
}

impl NetworkSampler {
    pub fn new() -> Self {
        Self {
            history: RwLock::new(HistoryBuffer::default()),
        }
    }

    /// Append one synthetic sample and return it
    pub fn sample(&self) -> u8 {
        let usage: u8 = rand::thread_rng().gen_range(0..=100);
        self.history.write().push(usage);
        usage
    }

    /// Usage history, oldest first
    pub fn usage(&self) -> Vec<u8> {
        self.history.read().snapshot()
    }

    /// Most recent sample, if any
    pub fn latest(&self) -> Option<u8> {
        self.history.read().latest()
    }
}

impl Default for NetworkSampler {
    fn default() -> Self {
        Self::new()
    }
}
