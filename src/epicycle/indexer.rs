//! Ordinal → DFT bin mapping.
//!
//! A DFT lists bins 0, 1, …, N-1 with negative frequencies folded above N/2.
//! Epicycles are drawn DC first, then +1, -1, +2, -2, … so each circle adds
//! a term of equal or higher |frequency| than the one before it.

use crate::error::{EpicycleError, EpicycleResult};

/// Map ordinal `i` to its DFT bin, checking `i < n`
pub fn try_map_index(i: usize, n: usize) -> EpicycleResult<usize> {
    if i >= n {
        return Err(EpicycleError::OutOfRangeOrdinal { ordinal: i, len: n });
    }

    Ok(if i == 0 {
        0
    } else if i % 2 == 1 {
        // Next unused positive frequency
        (i + 1) / 2
    } else {
        // Next unused negative frequency, as its folded bin
        n - i / 2
    })
}

/// Map ordinal `i` to its DFT bin
///
/// # Panics
/// If `i >= n`. Callers iterate `0..n`; anything else is a bug.
pub fn map_index(i: usize, n: usize) -> usize {
    match try_map_index(i, n) {
        Ok(k) => k,
        Err(e) => panic!("map_index contract violated: {}", e),
    }
}

/// Reinterpret bin `k` of an `n`-point DFT as a signed cycle rate
pub fn signed_frequency(k: usize, n: usize) -> i64 {
    if k <= n / 2 {
        k as i64
    } else {
        k as i64 - n as i64
    }
}

/// Bins in ordinal (draw) order
pub fn ordinal_bins(n: usize) -> impl Iterator<Item = usize> {
    (0..n).map(move |i| map_index(i, n))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_permutation(n: usize) {
        let mut seen = vec![false; n];
        for k in ordinal_bins(n) {
            assert!(k < n, "bin {} out of range for n={}", k, n);
            assert!(!seen[k], "bin {} produced twice for n={}", k, n);
            seen[k] = true;
        }
        assert!(seen.iter().all(|&s| s), "missing bin for n={}", n);
    }

    #[test]
    fn test_ordinal_bins_cover_every_bin_once() {
        for n in 1..=64 {
            assert_permutation(n);
        }
    }

    #[test]
    fn test_odd_and_even_sizes() {
        assert_eq!(ordinal_bins(5).collect::<Vec<_>>(), vec![0, 1, 4, 2, 3]);
        assert_eq!(
            ordinal_bins(8).collect::<Vec<_>>(),
            vec![0, 1, 7, 2, 6, 3, 5, 4]
        );
        assert_permutation(5);
        assert_permutation(8);
    }

    #[test]
    fn test_dc_is_always_first() {
        for n in 1..=32 {
            assert_eq!(map_index(0, n), 0);
        }
    }

    #[test]
    fn test_nyquist_bin_is_last_for_even_n() {
        for n in (2..=32).step_by(2) {
            assert_eq!(map_index(n - 1, n), n / 2);
        }
    }

    #[test]
    fn test_signed_frequency_folding() {
        assert_eq!(signed_frequency(0, 4), 0);
        assert_eq!(signed_frequency(1, 4), 1);
        assert_eq!(signed_frequency(2, 4), 2);
        assert_eq!(signed_frequency(3, 4), -1);

        assert_eq!(signed_frequency(2, 5), 2);
        assert_eq!(signed_frequency(3, 5), -2);
        assert_eq!(signed_frequency(4, 5), -1);
    }

    #[test]
    fn test_signed_frequency_bounds() {
        for n in 1..=33usize {
            let half = (n / 2) as i64;
            for k in 0..n {
                let f = signed_frequency(k, n);
                assert!(f >= -half && f <= half, "f={} outside ±{} (n={})", f, half, n);
                assert!(f == k as i64 || f == k as i64 - n as i64);
            }
        }
    }

    #[test]
    fn test_try_map_index_rejects_out_of_range() {
        assert_eq!(
            try_map_index(3, 3),
            Err(EpicycleError::OutOfRangeOrdinal { ordinal: 3, len: 3 })
        );
        assert!(try_map_index(0, 0).is_err());
    }

    #[test]
    #[should_panic(expected = "map_index contract violated")]
    fn test_map_index_panics_out_of_range() {
        map_index(10, 4);
    }
}
