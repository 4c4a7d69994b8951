//! Run configuration loading and validation

use crate::error::{MetricsError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Configuration for one simulation run context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Upper bound of simulated time, used to normalize reported network usage
    pub max_simulation_time: f64,

    /// Whether finished runs write a results file
    pub reporting_enabled: bool,

    /// Root directory for per-run result files
    pub output_dir: PathBuf,

    /// Enable debug logging
    pub debug: bool,

    /// Enable verbose logging
    pub verbose: bool,

    /// Enable ANSI colors in console log output
    pub enable_color: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_simulation_time: crate::defaults::DEFAULT_MAX_SIMULATION_TIME,
            reporting_enabled: false,
            output_dir: PathBuf::from(crate::defaults::DEFAULT_OUTPUT_DIR),
            debug: false,
            verbose: false,
            enable_color: crate::defaults::DEFAULT_ENABLE_COLOR,
        }
    }
}

impl RunConfig {
    /// Build a configuration from defaults plus environment overrides.
    ///
    /// Recognized variables: `FOG_SIM_MAX_TIME`, `FOG_SIM_REPORTING`,
    /// `FOG_SIM_OUTPUT_DIR`, `FOG_SIM_DEBUG`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("FOG_SIM_MAX_TIME") {
            if let Ok(parsed) = value.trim().parse::<f64>() {
                self.max_simulation_time = parsed;
            }
        }

        if let Ok(value) = env::var("FOG_SIM_REPORTING") {
            self.reporting_enabled = parse_bool_flag(&value);
        }

        if let Ok(value) = env::var("FOG_SIM_OUTPUT_DIR") {
            if !value.trim().is_empty() {
                self.output_dir = PathBuf::from(value.trim());
            }
        }

        if let Ok(value) = env::var("FOG_SIM_DEBUG") {
            self.debug = parse_bool_flag(&value);
        }
    }

    /// Validate the configuration, rejecting values that would corrupt
    /// report output.
    pub fn validate(&self) -> Result<()> {
        if !self.max_simulation_time.is_finite() || self.max_simulation_time <= 0.0 {
            return Err(MetricsError::config(format!(
                "max_simulation_time must be a positive finite number, got {}",
                self.max_simulation_time
            )));
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err(MetricsError::config("output_dir must not be empty"));
        }

        Ok(())
    }
}

/// Interpret common truthy spellings of a boolean environment flag.
fn parse_bool_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
