//! Iterative floating-point workload: sqrt, sin and fmod
//!
//! `%` on `f64` keeps the sign of the dividend, so the accumulator may go
//! negative. That is left as-is.

use crate::config::{MathReduction, WorkloadConfig};

/// Parameters for one math run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MathParams {
    pub iterations: u64,
    pub cycle: u64,
    pub modulus: f64,
    pub reduction: MathReduction,
}

impl Default for MathParams {
    fn default() -> Self {
        Self::from(&WorkloadConfig::default())
    }
}

impl From<&WorkloadConfig> for MathParams {
    fn from(w: &WorkloadConfig) -> Self {
        Self {
            iterations: w.math_iterations,
            cycle: w.math_cycle,
            modulus: w.math_modulus,
            reduction: w.math_reduction,
        }
    }
}

/// Accumulate `sqrt(x) * sin(x)` for `x = i % cycle`
#[inline(always)]
pub fn accumulate(acc: f64, i: u64, cycle: u64) -> f64 {
    let x = (i % cycle) as f64;
    acc + x.sqrt() * x.sin()
}

/// One iteration with reduction after every step
#[inline(always)]
pub fn step(acc: f64, i: u64, cycle: u64, modulus: f64) -> f64 {
    accumulate(acc, i, cycle) % modulus
}

/// Run the full loop and return the final accumulator
pub fn run(params: &MathParams) -> f64 {
    let MathParams { iterations, cycle, modulus, reduction } = *params;
    let mut result = 0.0;
    match reduction {
        MathReduction::EveryIteration => {
            for i in 0..iterations {
                result = step(result, i, cycle, modulus);
            }
        }
        MathReduction::Periodic => {
            for i in 0..iterations {
                result = accumulate(result, i, cycle);
                if i % cycle == 0 {
                    result %= modulus;
                }
            }
        }
    }
    result
}
