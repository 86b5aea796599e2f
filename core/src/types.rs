//! Core types for the benchmark run

use serde::{Deserialize, Serialize};
use std::fmt;

/// Measured phases, in run order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Array,
    String,
    Math,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Array, Phase::String, Phase::Math];

    /// Prefix used on the text report line
    pub fn label(self) -> &'static str {
        match self {
            Phase::Array => "Array operations",
            Phase::String => "String operations",
            Phase::Math => "Math operations",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Value each phase leaves behind so its loop cannot be optimized away
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Checksum {
    /// Sum of the array elements
    Sum(i64),
    /// Final buffer length in bytes
    Length(usize),
    /// Final math accumulator
    Accumulator(f64),
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Checksum::Sum(v) => write!(f, "sum={}", v),
            Checksum::Length(v) => write!(f, "len={}", v),
            Checksum::Accumulator(v) => write!(f, "acc={:.6}", v),
        }
    }
}

/// Timing for one phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseResult {
    pub phase: Phase,
    pub elapsed_ms: f64,
    pub checksum: Checksum,
}

/// Full run report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub label: String,
    pub phases: Vec<PhaseResult>,
    pub total_ms: f64,
}

impl BenchmarkReport {
    /// Build a report, computing the total from the phase timings
    pub fn new(label: impl Into<String>, phases: Vec<PhaseResult>) -> Self {
        let total_ms = phases.iter().map(|p| p.elapsed_ms).sum();
        Self {
            label: label.into(),
            phases,
            total_ms,
        }
    }

    pub fn phase(&self, phase: Phase) -> Option<&PhaseResult> {
        self.phases.iter().find(|p| p.phase == phase)
    }
}
