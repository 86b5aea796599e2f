//! Wall-clock phase timer

use std::hint::black_box;
use std::time::{Duration, Instant};

/// Run `f` once and return its output plus elapsed milliseconds.
///
/// The output passes through `black_box` before the clock stops.
pub fn time_phase<F, T>(f: F) -> (T, f64)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let out = black_box(f());
    let elapsed = start.elapsed();
    (out, duration_to_ms(elapsed))
}

/// Whole microseconds, expressed as fractional milliseconds
pub fn duration_to_ms(d: Duration) -> f64 {
    d.as_micros() as f64 / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_to_ms() {
        assert_eq!(duration_to_ms(Duration::from_micros(1500)), 1.5);
        assert_eq!(duration_to_ms(Duration::from_nanos(999)), 0.0);
        assert_eq!(duration_to_ms(Duration::from_millis(2)), 2.0);
    }

    #[test]
    fn test_time_phase_returns_output() {
        let (out, ms) = time_phase(|| {
            std::thread::sleep(Duration::from_millis(2));
            7u32
        });
        assert_eq!(out, 7);
        assert!(ms >= 2.0);
        assert!(ms.is_finite());
    }
}
