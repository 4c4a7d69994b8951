//! Network usage accounting

use super::{AtomicF64, Monitor};

/// Accumulates the total network cost of transmissions between simulated nodes.
///
/// Two kinds of payloads contribute: data tuples sent between nodes and
/// execution modules relocated during migrations. Each transmission costs
/// `latency * size`; both kinds fold into one undifferentiated total. The
/// record operations stay separate because the two event kinds are distinct
/// at the call site even though the aggregate model does not distinguish
/// them. Inputs are not validated.
pub struct NetworkUsageMonitor {
    total: AtomicF64,
}

impl NetworkUsageMonitor {
    /// Create a monitor with a zero total.
    pub fn new() -> Self {
        Self {
            total: AtomicF64::zero(),
        }
    }

    /// Record the cost of sending one data tuple.
    pub fn record_tuple_transmission(&self, latency: f64, tuple_size: f64) {
        self.total.add(latency * tuple_size);
    }

    /// Record the cost of relocating one execution module.
    ///
    /// Module sizes are integral byte counts, multiplied the same way as
    /// tuple sizes.
    pub fn record_module_transmission(&self, latency: f64, module_size: u64) {
        self.total.add(latency * module_size as f64);
    }

    /// Current accumulated network usage; pure read.
    pub fn total(&self) -> f64 {
        self.total.get()
    }
}

impl Monitor for NetworkUsageMonitor {
    fn clear(&self) {
        self.total.set(0.0);
    }
}

impl Default for NetworkUsageMonitor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fresh_monitor_is_zero() {
        let monitor = NetworkUsageMonitor::new();
        assert_eq!(monitor.total(), 0.0);
    }

    #[test]
    fn test_tuple_transmission_cost() {
        let monitor = NetworkUsageMonitor::new();
        monitor.record_tuple_transmission(2.0, 10.0);
        assert_eq!(monitor.total(), 20.0);
    }

    #[test]
    fn test_module_transmission_cost() {
        let monitor = NetworkUsageMonitor::new();
        monitor.record_module_transmission(3.0, 5);
        assert_eq!(monitor.total(), 15.0);
    }

    #[test]
    fn test_both_kinds_fold_into_one_total() {
        let monitor = NetworkUsageMonitor::new();
        monitor.record_tuple_transmission(2.0, 10.0);
        monitor.record_module_transmission(3.0, 5);
        assert_eq!(monitor.total(), 35.0);
    }

    #[test]
    fn test_clear_resets_total() {
        let monitor = NetworkUsageMonitor::new();
        monitor.record_tuple_transmission(10.0, 10.0);
        assert_eq!(monitor.total(), 100.0);

        monitor.clear();
        assert_eq!(monitor.total(), 0.0);
    }

    #[test]
    fn test_reads_are_idempotent() {
        let monitor = NetworkUsageMonitor::new();
        monitor.record_module_transmission(1.5, 4);

        let first = monitor.total();
        let second = monitor.total();
        assert_eq!(first, second);
    }

    proptest! {
        /// A tuple transmission increases the total by exactly latency * size.
        #[test]
        fn tuple_transmission_adds_exact_cost(
            latency in 0.0f64..1e3,
            tuple_size in 0.0f64..1e6,
        ) {
            let monitor = NetworkUsageMonitor::new();
            monitor.record_tuple_transmission(latency, tuple_size);
            prop_assert_eq!(monitor.total(), latency * tuple_size);
        }

        /// A module transmission increases the total by exactly latency * size.
        #[test]
        fn module_transmission_adds_exact_cost(
            latency in 0.0f64..1e3,
            module_size in 0u64..1_000_000,
        ) {
            let monitor = NetworkUsageMonitor::new();
            monitor.record_module_transmission(latency, module_size);
            prop_assert_eq!(monitor.total(), latency * module_size as f64);
        }

        /// Interleaved transmissions accumulate as the running sum of their costs.
        #[test]
        fn interleaved_costs_accumulate(
            events in proptest::collection::vec((0.0f64..100.0, 0.0f64..1e4, 0u64..10_000), 0..32)
        ) {
            let monitor = NetworkUsageMonitor::new();
            let mut expected = 0.0;
            for &(latency, tuple_size, module_size) in &events {
                monitor.record_tuple_transmission(latency, tuple_size);
                expected += latency * tuple_size;
                monitor.record_module_transmission(latency, module_size);
                expected += latency * module_size as f64;
            }
            prop_assert_eq!(monitor.total(), expected);
        }
    }
}
