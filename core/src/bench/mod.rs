//! Benchmark module
//! Timed array, string and math workloads

pub mod array;
pub mod math;
pub mod string;
pub mod timer;

pub use math::MathParams;
pub use timer::{duration_to_ms, time_phase};

use crate::config::WorkloadConfig;
use crate::types::{Checksum, Phase, PhaseResult};
use std::hint::black_box;

/// Run one phase under the timer
pub fn run_phase(phase: Phase, workload: &WorkloadConfig) -> PhaseResult {
    let (checksum, elapsed_ms) = match phase {
        Phase::Array => time_phase(|| Checksum::Sum(array::run(black_box(workload.array_len)))),
        Phase::String => time_phase(|| {
            let s = string::run(black_box(workload.string_len));
            Checksum::Length(black_box(s).len())
        }),
        Phase::Math => {
            let params = MathParams::from(workload);
            time_phase(|| Checksum::Accumulator(math::run(black_box(&params))))
        }
    };

    PhaseResult {
        phase,
        elapsed_ms,
        checksum,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_workload() -> WorkloadConfig {
        WorkloadConfig {
            array_len: 1000,
            string_len: 500,
            math_iterations: 2000,
            ..WorkloadConfig::default()
        }
    }

    #[test]
    fn test_run_phase_checksums() {
        let w = small_workload();

        let array = run_phase(Phase::Array, &w);
        assert_eq!(array.checksum, Checksum::Sum(499_500));

        let string = run_phase(Phase::String, &w);
        assert_eq!(string.checksum, Checksum::Length(500));

        let math = run_phase(Phase::Math, &w);
        match math.checksum {
            Checksum::Accumulator(acc) => assert!(acc > -1000.0 && acc < 1000.0),
            other => panic!("unexpected checksum {:?}", other),
        }

        for r in [array, string, math] {
            assert!(r.elapsed_ms >= 0.0 && r.elapsed_ms.is_finite());
        }
    }
}
