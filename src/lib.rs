//! Fog Simulation Metrics
//!
//! Cost accounting for fog/edge computing simulations: process-wide
//! accumulators for migration delay and network usage, a shared reset
//! capability for run-boundary lifecycle control, and JSON run reports.
//!
//! The simulation engine pushes cost events into shared monitor handles,
//! reporting logic reads the totals at checkpoints, and a run controller
//! clears all monitors between runs:
//!
//! ```
//! use fog_sim_metrics::{RunConfig, SimulationRun};
//!
//! let run = SimulationRun::new("placement-experiment", RunConfig::default()).unwrap();
//!
//! let usage = run.network_usage();
//! usage.record_tuple_transmission(2.0, 10.0);
//! run.migration_delay().add_delay(1.5);
//!
//! let report = run.finish();
//! assert_eq!(report.raw_network_usage, 20.0);
//! assert_eq!(report.migration_delay, 1.5);
//!
//! run.reset();
//! assert_eq!(usage.total(), 0.0);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod monitor;
pub mod report;
pub mod run;

// Re-export commonly used types
pub use config::RunConfig;
pub use error::{MetricsError, Result};
pub use logging::{LogFormat, LogLevel, Logger};
pub use monitor::{MigrationDelayMonitor, Monitor, MonitorRegistry, NetworkUsageMonitor};
pub use report::RunReport;
pub use run::SimulationRun;

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// Default configuration values
pub mod defaults {
    /// Normalization constant for reported network usage
    pub const DEFAULT_MAX_SIMULATION_TIME: f64 = 1000.0;

    /// Root directory for per-run result files
    pub const DEFAULT_OUTPUT_DIR: &str = "simulation-results";

    pub const DEFAULT_ENABLE_COLOR: bool = true;
}
