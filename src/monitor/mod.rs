//! Cost monitors shared across a simulation run
//!
//! Each monitor accumulates one scalar total between run-boundary resets.
//! Monitors are passive: the simulation engine pushes cost events into
//! them, reporting reads the totals, and a run controller clears them
//! through the shared [`Monitor`] capability.

pub mod migration;
pub mod network;

pub use migration::MigrationDelayMonitor;
pub use network::NetworkUsageMonitor;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared reset capability for per-run metric state.
///
/// A run controller holds a collection of `Monitor` trait objects and
/// resets all of them at run boundaries, so per-run totals stay isolated
/// without the controller naming any concrete monitor type.
pub trait Monitor: Send + Sync {
    /// Reset the monitor to its initial (empty) state.
    fn clear(&self);
}

/// Lock-free cell holding an `f64` running total.
///
/// Additions are compare-and-swap read-modify-write operations, so
/// concurrent callers on `Arc`-shared handles never lose updates.
pub(crate) struct AtomicF64 {
    bits: AtomicU64,
}

impl AtomicF64 {
    /// Create a cell holding `0.0`.
    pub(crate) fn zero() -> Self {
        Self {
            bits: AtomicU64::new(0.0f64.to_bits()),
        }
    }

    /// Add `value` to the cell, retrying on contention.
    pub(crate) fn add(&self, value: f64) {
        let mut current = self.bits.load(Ordering::Acquire);
        loop {
            let updated = (f64::from_bits(current) + value).to_bits();
            match self.bits.compare_exchange_weak(
                current,
                updated,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return,
                Err(actual) => current = actual,
            }
        }
    }

    /// Current value; pure read.
    pub(crate) fn get(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Acquire))
    }

    /// Overwrite the cell with `value`.
    pub(crate) fn set(&self, value: f64) {
        self.bits.store(value.to_bits(), Ordering::Release);
    }
}

/// Collection of resettable monitors held by a run controller.
pub struct MonitorRegistry {
    monitors: Vec<Arc<dyn Monitor>>,
}

impl MonitorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Add a monitor that participates in run-boundary resets.
    pub fn register(&mut self, monitor: Arc<dyn Monitor>) {
        self.monitors.push(monitor);
    }

    /// Reset every registered monitor.
    pub fn clear_all(&self) {
        for monitor in &self.monitors {
            monitor.clear();
        }
    }

    /// Number of registered monitors.
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Check whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl Default for MonitorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
