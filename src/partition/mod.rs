//! Balanced line-range partitioning
//!
//! Divides the lines of an input file among a fixed number of workers. The
//! split is contiguous, gap-free, and balanced: when the line count is not
//! evenly divisible, the first `total % workers` ranges receive one extra
//! line, so no two ranges differ in size by more than one.

use std::fmt;

/// An inclusive range of line indices assigned to one worker
///
/// `start` is non-negative for every range the partitioner produces. The
/// range is empty when `end < start`; a zero-line input yields `end = -1`
/// for the first worker. Both bounds are signed so the empty-range encoding
/// survives the trip through worker command-line arguments unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    /// First line of the range, inclusive (0-based)
    pub start: i64,
    /// Last line of the range, inclusive; `start - 1` when empty
    pub end: i64,
}

impl LineRange {
    /// Number of lines in the range
    pub fn len(&self) -> u64 {
        if self.end < self.start {
            0
        } else {
            (self.end - self.start + 1) as u64
        }
    }

    /// Whether the range contains no lines
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Split `total_lines` lines into `num_workers` contiguous ranges
///
/// Range `i` starts at `i*base + min(i, remainder)` and spans
/// `base + 1` lines when `i < remainder`, else `base` lines, where
/// `base = total_lines / num_workers` and
/// `remainder = total_lines % num_workers`. The union of the returned
/// ranges is exactly `[0, total_lines - 1]`.
///
/// Precondition: `num_workers >= 1`. Configuration validation rejects a
/// non-positive worker count before any partitioning happens.
pub fn partition(total_lines: u64, num_workers: usize) -> Vec<LineRange> {
    assert!(num_workers >= 1, "partition requires at least one worker");

    let base = total_lines / num_workers as u64;
    let remainder = total_lines % num_workers as u64;

    (0..num_workers as u64)
        .map(|i| {
            let start = i * base + i.min(remainder);
            let size = base + if i < remainder { 1 } else { 0 };
            LineRange {
                start: start as i64,
                end: start as i64 + size as i64 - 1,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_split() {
        let ranges = partition(12, 4);
        assert_eq!(
            ranges,
            vec![
                LineRange { start: 0, end: 2 },
                LineRange { start: 3, end: 5 },
                LineRange { start: 6, end: 8 },
                LineRange { start: 9, end: 11 },
            ]
        );
    }

    #[test]
    fn test_remainder_goes_to_first_workers() {
        // 10 lines over 3 workers: sizes 4, 3, 3
        let ranges = partition(10, 3);
        assert_eq!(
            ranges,
            vec![
                LineRange { start: 0, end: 3 },
                LineRange { start: 4, end: 6 },
                LineRange { start: 7, end: 9 },
            ]
        );
        assert_eq!(ranges[0].len(), 4);
        assert_eq!(ranges[1].len(), 3);
        assert_eq!(ranges[2].len(), 3);
    }

    #[test]
    fn test_zero_lines_all_ranges_empty() {
        let ranges = partition(0, 4);
        assert_eq!(ranges.len(), 4);
        for range in &ranges {
            assert!(range.is_empty());
            assert_eq!(range.len(), 0);
        }
        // First range encodes empty as end = start - 1
        assert_eq!(ranges[0], LineRange { start: 0, end: -1 });
    }

    #[test]
    fn test_fewer_lines_than_workers() {
        let ranges = partition(2, 5);
        assert_eq!(ranges[0], LineRange { start: 0, end: 0 });
        assert_eq!(ranges[1], LineRange { start: 1, end: 1 });
        for range in &ranges[2..] {
            assert!(range.is_empty());
        }
    }

    #[test]
    fn test_single_worker_gets_everything() {
        let ranges = partition(7, 1);
        assert_eq!(ranges, vec![LineRange { start: 0, end: 6 }]);
    }

    #[test]
    fn test_coverage_disjoint_and_balanced() {
        // Union must be exactly [0, N-1], ranges contiguous, sizes within 1
        for total in 0..50u64 {
            for workers in 1..8usize {
                let ranges = partition(total, workers);
                assert_eq!(ranges.len(), workers);

                let mut next = 0i64;
                for range in &ranges {
                    assert_eq!(range.start, next, "gap at N={} K={}", total, workers);
                    next = range.end + 1;
                }
                assert_eq!(next as u64, total, "coverage at N={} K={}", total, workers);

                let min = ranges.iter().map(|r| r.len()).min().unwrap();
                let max = ranges.iter().map(|r| r.len()).max().unwrap();
                assert!(max - min <= 1, "imbalance at N={} K={}", total, workers);
            }
        }
    }

    #[test]
    fn test_range_display() {
        let range = LineRange { start: 4, end: 6 };
        assert_eq!(range.to_string(), "4..6");
    }

    #[test]
    #[should_panic]
    fn test_zero_workers_panics() {
        partition(10, 0);
    }
}
