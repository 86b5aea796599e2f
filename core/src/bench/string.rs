//! Single-character string accumulation workload

/// Push `'a'` into a pre-sized `String` `len` times
pub fn run(len: usize) -> String {
    let mut s = String::with_capacity(len);
    for _ in 0..len {
        s.push('a');
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_workload_buffer() {
        let s = run(100_000);
        assert_eq!(s.len(), 100_000);
        assert!(s.bytes().all(|b| b == b'a'));
    }

    #[test]
    fn test_empty() {
        assert!(run(0).is_empty());
    }
}
