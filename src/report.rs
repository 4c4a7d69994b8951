//! Run report assembly and JSON export

use crate::error::{MetricsError, Result};
use crate::run::SimulationRun;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// End-of-run snapshot of the accumulated cost totals.
///
/// Network usage is carried both raw and normalized by the configured
/// maximum simulation time, so runs of different lengths stay comparable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Run name, also used as the report directory name
    pub run_name: String,

    /// Unique identifier of the run context
    pub run_id: Uuid,

    /// When the run context was created
    pub started_at: DateTime<Utc>,

    /// When the snapshot was taken
    pub completed_at: DateTime<Utc>,

    /// Wall-clock time between creation and snapshot (milliseconds)
    pub execution_time_ms: i64,

    /// Network cost per unit of simulated time
    pub network_usage: f64,

    /// Total accumulated network cost
    pub raw_network_usage: f64,

    /// Total accumulated migration delay
    pub migration_delay: f64,
}

impl RunReport {
    /// Snapshot the totals of a run context.
    pub(crate) fn from_run(run: &SimulationRun, completed_at: DateTime<Utc>) -> Self {
        let raw_network_usage = run.network_usage().total();

        Self {
            run_name: run.name().to_string(),
            run_id: run.run_id(),
            started_at: run.started_at(),
            completed_at,
            execution_time_ms: (completed_at - run.started_at()).num_milliseconds(),
            network_usage: raw_network_usage / run.config().max_simulation_time,
            raw_network_usage,
            migration_delay: run.migration_delay().total(),
        }
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| MetricsError::serialize(format!("Failed to serialize run report: {}", e)))
    }

    /// Write `results.json` under `<root>/<run name>/<timestamp>/`.
    ///
    /// Returns the path of the written file.
    pub fn write_to(&self, root: &Path) -> Result<PathBuf> {
        let timestamp = self.completed_at.format("%Y-%m-%d %H:%M:%S").to_string();
        let directory = root.join(&self.run_name).join(timestamp);

        fs::create_dir_all(&directory).map_err(|e| {
            MetricsError::io(format!(
                "Failed to create report directory {}: {}",
                directory.display(),
                e
            ))
        })?;

        let path = directory.join("results.json");
        fs::write(&path, self.to_json()?).map_err(|e| {
            MetricsError::io(format!("Failed to write {}: {}", path.display(), e))
        })?;

        Ok(path)
    }
}
