//! Report rendering

use crate::config::ReportFormat;
use crate::error::Result;
use crate::types::BenchmarkReport;
use std::fmt;
use std::io::Write;

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Benchmark", self.label)?;
        for p in &self.phases {
            writeln!(f, "{}: {:.2} ms", p.phase, p.elapsed_ms)?;
        }
        writeln!(f, "Total execution time: {:.2} ms", self.total_ms)
    }
}

/// Write the report in the requested format
pub fn write_report<W: Write>(report: &BenchmarkReport, format: ReportFormat, mut out: W) -> Result<()> {
    match format {
        ReportFormat::Text => write!(out, "{}", report)?,
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut out, report)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Checksum, Phase, PhaseResult};

    fn sample() -> BenchmarkReport {
        BenchmarkReport::new(
            "Go",
            vec![
                PhaseResult { phase: Phase::Array, elapsed_ms: 1.234, checksum: Checksum::Sum(499_999_500_000) },
                PhaseResult { phase: Phase::String, elapsed_ms: 0.1, checksum: Checksum::Length(100_000) },
                PhaseResult { phase: Phase::Math, elapsed_ms: 42.0, checksum: Checksum::Accumulator(-3.5) },
            ],
        )
    }

    #[test]
    fn test_text_report() {
        let mut buf = Vec::new();
        write_report(&sample(), ReportFormat::Text, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "Go Benchmark\n\
             Array operations: 1.23 ms\n\
             String operations: 0.10 ms\n\
             Math operations: 42.00 ms\n\
             Total execution time: 43.33 ms\n"
        );
    }

    #[test]
    fn test_json_report() {
        let mut buf = Vec::new();
        write_report(&sample(), ReportFormat::Json, &mut buf).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed["label"], "Go");
        assert_eq!(parsed["phases"].as_array().map(|p| p.len()), Some(3));
        assert_eq!(parsed["phases"][0]["phase"], "array");
        assert_eq!(parsed["phases"][0]["checksum"]["value"], 499_999_500_000i64);
        assert_eq!(parsed["phases"][2]["checksum"]["kind"], "accumulator");
        assert!(parsed["total_ms"].as_f64().is_some());
    }
}
