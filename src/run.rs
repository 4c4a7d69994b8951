//! Simulation run context and lifecycle control

use crate::config::RunConfig;
use crate::error::Result;
use crate::logging::Logger;
use crate::monitor::{MigrationDelayMonitor, Monitor, MonitorRegistry, NetworkUsageMonitor};
use crate::report::RunReport;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

/// Owns the cost monitors of one simulation run and drives their lifecycle.
///
/// The context replaces implicit global counters: it is constructed
/// explicitly, hands out shared handles to whichever simulation components
/// report costs, and resets every registered monitor at run boundaries so
/// per-run totals stay isolated.
pub struct SimulationRun {
    name: String,
    run_id: Uuid,
    started_at: DateTime<Utc>,
    config: RunConfig,
    migration_delay: Arc<MigrationDelayMonitor>,
    network_usage: Arc<NetworkUsageMonitor>,
    registry: MonitorRegistry,
    logger: Logger,
}

impl SimulationRun {
    /// Create a run context with validated configuration.
    ///
    /// The built-in migration delay and network usage monitors are
    /// constructed at zero and registered for run-boundary resets.
    pub fn new(name: impl Into<String>, config: RunConfig) -> Result<Self> {
        config.validate()?;

        let migration_delay = Arc::new(MigrationDelayMonitor::new());
        let network_usage = Arc::new(NetworkUsageMonitor::new());

        let mut registry = MonitorRegistry::new();
        registry.register(migration_delay.clone());
        registry.register(network_usage.clone());

        let logger = Logger::with_config("RUN".to_string(), &config);

        Ok(Self {
            name: name.into(),
            run_id: Uuid::new_v4(),
            started_at: Utc::now(),
            config,
            migration_delay,
            network_usage,
            registry,
            logger,
        })
    }

    /// Run name used for report directories.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unique identifier of this run context.
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// When this run context was created.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// The run configuration.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Shared handle for components that report migration delays.
    pub fn migration_delay(&self) -> Arc<MigrationDelayMonitor> {
        self.migration_delay.clone()
    }

    /// Shared handle for components that report network transmissions.
    pub fn network_usage(&self) -> Arc<NetworkUsageMonitor> {
        self.network_usage.clone()
    }

    /// Register an additional monitor that participates in run-boundary
    /// resets alongside the built-in accumulators.
    pub fn register_monitor(&mut self, monitor: Arc<dyn Monitor>) {
        self.registry.register(monitor);
    }

    /// Number of monitors participating in resets.
    pub fn monitor_count(&self) -> usize {
        self.registry.len()
    }

    /// Clear every registered monitor.
    ///
    /// Called at run boundaries to isolate per-run totals; all prior
    /// accumulation is discarded.
    pub fn reset(&self) {
        self.registry.clear_all();
        self.logger
            .debug(&format!("Cleared {} monitors", self.registry.len()))
            .field("run", &self.name)
            .field("run_id", self.run_id.to_string())
            .log();
    }

    /// Snapshot the accumulated totals into a run report.
    pub fn finish(&self) -> RunReport {
        let report = RunReport::from_run(self, Utc::now());
        self.logger
            .info(&format!(
                "Run '{}' finished: network usage {:.3}, migration delay {:.3}",
                self.name, report.network_usage, report.migration_delay
            ))
            .field("run_id", self.run_id.to_string())
            .field("raw_network_usage", report.raw_network_usage)
            .field("migration_delay", report.migration_delay)
            .log();
        report
    }

    /// Snapshot the totals and, when reporting is enabled, write the
    /// results file under the configured output directory.
    pub fn finish_and_report(&self) -> Result<RunReport> {
        let report = self.finish();

        if self.config.reporting_enabled {
            let path = report.write_to(&self.config.output_dir)?;
            self.logger
                .info(&format!("Wrote run report to {}", path.display()))
                .field("run_id", self.run_id.to_string())
                .log();
        }

        Ok(report)
    }
}
