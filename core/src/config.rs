//! Configuration module

use crate::error::{BenchError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming the JSON config file
pub const CONFIG_ENV: &str = "RUNTIME_BENCH_CONFIG";

/// Config path used when `RUNTIME_BENCH_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "config/bench.json";

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Workload sizes and math settings
    pub workload: WorkloadConfig,

    /// Report settings
    pub report: ReportConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadConfig {
    pub array_len: usize,
    pub string_len: usize,
    pub math_iterations: u64,
    /// `x` cycles through `0..math_cycle`
    pub math_cycle: u64,
    pub math_modulus: f64,
    pub math_reduction: MathReduction,
}

/// When the math accumulator is reduced by the modulus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MathReduction {
    /// Reduce after every iteration
    #[default]
    EveryIteration,
    /// Reduce only when `i % math_cycle == 0`
    Periodic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Runtime name printed in the header line
    pub label: String,
    pub format: ReportFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json_output: bool,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            array_len: 1_000_000,
            string_len: 100_000,
            math_iterations: 10_000_000,
            math_cycle: 1000,
            math_modulus: 1000.0,
            math_reduction: MathReduction::EveryIteration,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            label: "Go".to_string(),
            format: ReportFormat::Text,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json_output: false,
        }
    }
}

impl Config {
    /// Load config from environment
    ///
    /// Falls back to [`Config::default`] when the file does not exist.
    pub fn from_env() -> Result<Self> {
        let config_path = std::env::var(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

        if config_path.exists() {
            Self::load(&config_path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load and validate config from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| BenchError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config =
            serde_json::from_str(&content).map_err(|source| BenchError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let w = &self.workload;
        if !w.math_modulus.is_finite() || w.math_modulus <= 0.0 {
            return Err(BenchError::InvalidConfig(format!(
                "math_modulus must be finite and positive, got {}",
                w.math_modulus
            )));
        }
        if w.math_cycle == 0 {
            return Err(BenchError::InvalidConfig(
                "math_cycle must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
