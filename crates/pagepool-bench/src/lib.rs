//! Shared access patterns for pagepool benchmarks.

#![forbid(unsafe_code)]

/// Indices visiting every item once, page by page.
pub fn sequential(total: usize) -> Vec<usize> {
    (0..total).collect()
}

/// Indices jumping by `stride` (wrapping), touching a new page on most
/// accesses when `stride` exceeds the page size.
pub fn strided(total: usize, stride: usize, count: usize) -> Vec<usize> {
    if total == 0 {
        return Vec::new();
    }
    (0..count).map(|i| (i * stride) % total).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strided_wraps_within_bounds() {
        let idx = strided(10, 7, 5);
        assert_eq!(idx, vec![0, 7, 4, 1, 8]);
    }

    #[test]
    fn strided_empty_total() {
        assert!(strided(0, 3, 10).is_empty());
    }
}
