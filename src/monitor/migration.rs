//! Migration delay accounting

use super::{AtomicF64, Monitor};

/// Accumulates the total time cost of migrating work between execution sites.
///
/// The simulation engine adds the delay of every completed migration;
/// reporting reads the total at checkpoints. The value is an aggregate sum
/// only, with no breakdown by source or destination. Inputs are not
/// validated: a negative delay decreases the total and is the caller's
/// responsibility.
pub struct MigrationDelayMonitor {
    total: AtomicF64,
}

impl MigrationDelayMonitor {
    /// Create a monitor with a zero total.
    pub fn new() -> Self {
        Self {
            total: AtomicF64::zero(),
        }
    }

    /// Add the delay of one completed migration to the running total.
    pub fn add_delay(&self, delay: f64) {
        self.total.add(delay);
    }

    /// Current accumulated migration delay; pure read.
    pub fn total(&self) -> f64 {
        self.total.get()
    }
}

impl Monitor for MigrationDelayMonitor {
    fn clear(&self) {
        self.total.set(0.0);
    }
}

impl Default for MigrationDelayMonitor {
    fn default() -> Self {
        Self::new()
    }
}
