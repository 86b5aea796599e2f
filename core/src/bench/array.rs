//! Array growth + summation workload

use std::hint::black_box;

/// Push `0..len` into a pre-sized `Vec` and sum it with an `i64` accumulator.
///
/// Returns the sum. The total over `0..1_000_000` overflows `i32`, hence the
/// wide accumulator.
pub fn run(len: usize) -> i64 {
    let mut arr: Vec<i64> = Vec::with_capacity(len);
    for i in 0..len as i64 {
        arr.push(i);
    }
    let arr = black_box(arr);
    arr.iter().sum()
}

/// Closed form of `0 + 1 + ... + (len - 1)`
pub fn expected_sum(len: usize) -> i64 {
    let n = len as i64;
    n * (n - 1) / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fixed_workload_sum() {
        assert_eq!(run(1_000_000), 499_999_500_000);
    }

    #[test]
    fn test_empty() {
        assert_eq!(run(0), 0);
        assert_eq!(expected_sum(0), 0);
    }

    proptest! {
        #[test]
        fn sum_matches_closed_form(len in 0usize..20_000) {
            prop_assert_eq!(run(len), expected_sum(len));
        }
    }
}
