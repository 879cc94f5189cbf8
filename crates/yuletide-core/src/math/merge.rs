// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Interval Merge
//!
//! Normalizes a collection of [`Interval`]s into ascending order, coalescing
//! every pair that shares a point. The result covers exactly the same
//! integer points as the input, so merging it again is a no-op.
//!
//! Two intervals merge when the second one starts no later than the first
//! one's inclusive end (`b.start() <= a.end()`). Neighbours that only touch,
//! such as `5..=7` and `8..=10`, stay separate.
//!
//! ```rust
//! use yuletide_core::math::{interval::Interval, merge::merge};
//!
//! // 5..=7 and 7..=10 share the point 7
//! let merged = merge([Interval::new(5, 3), Interval::new(7, 4)]);
//! assert_eq!(merged, vec![Interval::new(5, 6)]);
//! ```

use crate::math::interval::Interval;
use num_traits::PrimInt;

/// Sorts `intervals` by start and coalesces overlapping neighbours.
pub fn merge<T, I>(intervals: I) -> Vec<Interval<T>>
where
    T: PrimInt,
    I: IntoIterator<Item = Interval<T>>,
{
    let mut sorted: Vec<Interval<T>> = intervals.into_iter().collect();
    sorted.sort_unstable_by_key(|iv| iv.start());

    let mut merged: Vec<Interval<T>> = Vec::with_capacity(sorted.len());
    for iv in sorted {
        if let Some(last) = merged.last_mut()
            && let Some(spanned) = last.union(iv)
        {
            *last = spanned;
        } else {
            merged.push(iv);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn points(intervals: &[Interval<i32>]) -> BTreeSet<i32> {
        intervals.iter().flat_map(|iv| iv.iter()).collect()
    }

    #[test]
    fn test_merge_overlapping_pair() {
        let merged = merge([Interval::new(5, 3), Interval::new(7, 4)]);
        assert_eq!(merged, vec![Interval::new(5, 6)]);
    }

    #[test]
    fn test_merge_sorts_output() {
        let merged = merge([Interval::new(20, 2), Interval::new(1, 2), Interval::new(10, 1)]);
        assert_eq!(
            merged,
            vec![Interval::new(1, 2), Interval::new(10, 1), Interval::new(20, 2)]
        );
    }

    #[test]
    fn test_merge_keeps_touching_intervals_apart() {
        // 5..=7 and 8..=10 share no point
        let merged = merge([Interval::new(8, 3), Interval::new(5, 3)]);
        assert_eq!(merged, vec![Interval::new(5, 3), Interval::new(8, 3)]);
    }

    #[test]
    fn test_merge_joins_single_shared_point() {
        // 5..=7 and 7..=10
        let merged = merge([Interval::new(7, 4), Interval::new(5, 3)]);
        assert_eq!(merged, vec![Interval::new(5, 6)]);
    }

    #[test]
    fn test_merge_keeps_gapped_intervals_apart() {
        // 5..=7 and 9..=11 leave 8 uncovered
        let merged = merge([Interval::new(9, 3), Interval::new(5, 3)]);
        assert_eq!(merged, vec![Interval::new(5, 3), Interval::new(9, 3)]);
    }

    #[test]
    fn test_merge_at_type_maximum() {
        let merged = merge([Interval::new(250u8, 6), Interval::new(252u8, 2)]);
        assert_eq!(merged, vec![Interval::new(250, 6)]);
    }

    #[test]
    fn test_merge_contained_and_chained() {
        let merged = merge([
            Interval::new(0, 10),
            Interval::new(2, 3),
            Interval::new(9, 5),
            Interval::new(13, 1),
        ]);
        assert_eq!(merged, vec![Interval::new(0, 14)]);
    }

    #[test]
    fn test_merge_empty() {
        let merged: Vec<Interval<u64>> = merge(Vec::new());
        assert!(merged.is_empty());
    }

    fn arb_intervals() -> impl Strategy<Value = Vec<Interval<i32>>> {
        prop::collection::vec((-50i32..50, 1i32..15), 0..12)
            .prop_map(|raw| raw.into_iter().map(|(s, l)| Interval::new(s, l)).collect())
    }

    proptest! {
        #[test]
        fn prop_merge_is_idempotent(intervals in arb_intervals()) {
            let once = merge(intervals);
            let twice = merge(once.clone());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_merge_preserves_points(intervals in arb_intervals()) {
            let merged = merge(intervals.clone());
            prop_assert_eq!(points(&merged), points(&intervals));
        }

        #[test]
        fn prop_merge_output_is_ascending_and_disjoint(intervals in arb_intervals()) {
            let merged = merge(intervals);
            for pair in merged.windows(2) {
                prop_assert!(pair[0].end() < pair[1].start());
            }
        }
    }
}
