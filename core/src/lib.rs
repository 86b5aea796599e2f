//! Runtime Bench
//!
//! Wall-clock timings for three elementary workloads: array growth with
//! summation, single-character string accumulation, and iterative
//! sqrt/sin/fmod math.
//!
//! ## Layout
//! - Config: workload sizes, report and logging options
//! - Bench: the timed workloads
//! - Report: text and JSON rendering

pub mod bench;
pub mod config;
pub mod error;
pub mod report;
pub mod types;

pub use config::Config;
pub use error::{BenchError, Result};
pub use report::write_report;
pub use types::{BenchmarkReport, Checksum, Phase, PhaseResult};

use tracing::{debug, info};

/// Runs the phases in order and builds the report
#[derive(Debug, Clone)]
pub struct BenchmarkRunner {
    config: Config,
}

impl BenchmarkRunner {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Execute array, string and math phases sequentially
    pub fn run(&self) -> BenchmarkReport {
        let workload = &self.config.workload;
        let mut phases = Vec::with_capacity(Phase::ALL.len());

        for phase in Phase::ALL {
            debug!("Starting {}", phase);
            let result = bench::run_phase(phase, workload);
            debug!(
                "{}: {:.3} ms | {}",
                phase, result.elapsed_ms, result.checksum
            );
            phases.push(result);
        }

        let report = BenchmarkReport::new(self.config.report.label.clone(), phases);
        info!("Benchmark complete | total: {:.2} ms", report.total_ms);
        report
    }
}
