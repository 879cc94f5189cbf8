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

//! Mapping stages.
//!
//! A `MappingStage` holds every range mapping between one category and the
//! next. Mappings are tried in input order: whatever a mapping does not cover
//! is handed to the following mappings, and whatever no mapping covers
//! passes through the stage unchanged. The stage output is merged.
//!
//! Mappings within a stage are assumed not to overlap. When they do, the
//! first mapping in input order wins for the shared points; the chain builder
//! can be configured to reject such stages instead.

use crate::{category::CategoryId, mapping::RangeMapping};
use log::trace;
use num_traits::PrimInt;
use yuletide_core::math::{interval::Interval, merge::merge};

/// All range mappings from a source category to a destination category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingStage<T>
where
    T: PrimInt,
{
    source: CategoryId,
    destination: CategoryId,
    mappings: Vec<RangeMapping<T>>,
}

impl<T> MappingStage<T>
where
    T: PrimInt,
{
    /// Creates a stage from its categories and mappings (in input order).
    #[inline]
    pub fn new(source: CategoryId, destination: CategoryId, mappings: Vec<RangeMapping<T>>) -> Self {
        Self {
            source,
            destination,
            mappings,
        }
    }

    /// The category this stage maps from.
    #[inline]
    pub fn source(&self) -> CategoryId {
        self.source
    }

    /// The category this stage maps to.
    #[inline]
    pub fn destination(&self) -> CategoryId {
        self.destination
    }

    /// The range mappings in input order.
    #[inline]
    pub fn mappings(&self) -> &[RangeMapping<T>] {
        &self.mappings
    }

    /// Returns the positions of the first pair of mappings whose source
    /// windows overlap, if any.
    pub fn find_overlap(&self) -> Option<(usize, usize)> {
        let mut order: Vec<usize> = (0..self.mappings.len()).collect();
        order.sort_unstable_by_key(|&i| self.mappings[i].source());
        order.windows(2).find_map(|pair| {
            let (a, b) = (pair[0], pair[1]);
            self.mappings[a]
                .overlaps(&self.mappings[b])
                .then(|| (a.min(b), a.max(b)))
        })
    }

    /// Maps a single value through the stage.
    ///
    /// Values outside every mapping keep their number.
    pub fn map_point(&self, value: T) -> T {
        self.mappings
            .iter()
            .find_map(|m| m.map_point(value))
            .unwrap_or(value)
    }

    /// Resolves `intervals` through the stage and merges the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use yuletide_almanac::{category::CategoryId, mapping::RangeMapping, stage::MappingStage};
    /// # use yuletide_core::math::interval::Interval;
    ///
    /// let stage = MappingStage::new(
    ///     CategoryId::new(0),
    ///     CategoryId::new(1),
    ///     vec![
    ///         RangeMapping::new(98, 50, 2).unwrap(),
    ///         RangeMapping::new(50, 52, 48).unwrap(),
    ///     ],
    /// );
    ///
    /// // 79..=92 lies inside the second mapping
    /// assert_eq!(stage.resolve(&[Interval::new(79, 14)]), vec![Interval::new(81, 14)]);
    /// ```
    pub fn resolve(&self, intervals: &[Interval<T>]) -> Vec<Interval<T>> {
        let mut resolved: Vec<Interval<T>> = Vec::with_capacity(intervals.len());
        let mut pending: Vec<Interval<T>> = intervals.to_vec();
        let mut leftover: Vec<Interval<T>> = Vec::new();

        for mapping in &self.mappings {
            if pending.is_empty() {
                break;
            }
            for interval in pending.drain(..) {
                let resolution = mapping.resolve(interval);
                resolved.extend(resolution.mapped);
                leftover.extend(resolution.unmapped);
            }
            std::mem::swap(&mut pending, &mut leftover);
        }

        trace!(
            "stage {} -> {}: {} input, {} mapped, {} passed through",
            self.source,
            self.destination,
            intervals.len(),
            resolved.len(),
            pending.len()
        );

        resolved.append(&mut pending);
        merge(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn stage(mappings: &[(i64, i64, i64)]) -> MappingStage<i64> {
        MappingStage::new(
            CategoryId::new(0),
            CategoryId::new(1),
            mappings
                .iter()
                .map(|&(s, d, l)| RangeMapping::new(s, d, l).unwrap())
                .collect(),
        )
    }

    #[test]
    fn test_resolve_without_mappings_passes_through() {
        let st = stage(&[]);
        let input = [Interval::new(10, 5), Interval::new(1, 2)];
        assert_eq!(st.resolve(&input), vec![Interval::new(1, 2), Interval::new(10, 5)]);
    }

    #[test]
    fn test_resolve_splits_across_mappings() {
        // seed-to-soil from the well-known example
        let st = stage(&[(98, 50, 2), (50, 52, 48)]);

        // 45..=100 -> 45..=49 unmapped, 50..=97 -> 52..=99, 98..=99 -> 50..=51, 100 unmapped
        let out = st.resolve(&[Interval::new(45, 56)]);
        assert_eq!(
            out,
            vec![
                Interval::new(45, 5),
                Interval::new(50, 2),
                Interval::new(52, 48),
                Interval::new(100, 1),
            ]
        );

        // 79..=99 -> 81..=99 and 50..=51
        let out = st.resolve(&[Interval::new(79, 21)]);
        assert_eq!(out, vec![Interval::new(50, 2), Interval::new(81, 19)]);
    }

    #[test]
    fn test_resolve_leftovers_reach_later_mappings() {
        let st = stage(&[(10, 110, 5), (0, 200, 10), (15, 300, 5)]);
        let out = st.resolve(&[Interval::new(0, 20)]);
        assert_eq!(
            out,
            vec![Interval::new(110, 5), Interval::new(200, 10), Interval::new(300, 5)]
        );
    }

    #[test]
    fn test_first_mapping_wins_on_overlap() {
        let st = stage(&[(0, 100, 10), (5, 500, 10)]);
        let out = st.resolve(&[Interval::new(0, 15)]);
        // 0..=9 via the first mapping, 10..=14 via the second
        assert_eq!(out, vec![Interval::new(100, 10), Interval::new(505, 5)]);
        assert_eq!(st.find_overlap(), Some((0, 1)));
    }

    #[test]
    fn test_mapped_piece_next_to_remainder_stays_separate() {
        // 0..=4 -> 10..=14 lands right before the unmapped 5..=9
        let st = stage(&[(0, 10, 5)]);
        let out = st.resolve(&[Interval::new(0, 10)]);
        assert_eq!(out, vec![Interval::new(5, 5), Interval::new(10, 5)]);
    }

    #[test]
    fn test_find_overlap_none_for_disjoint_mappings() {
        let st = stage(&[(98, 50, 2), (50, 52, 48)]);
        assert_eq!(st.find_overlap(), None);
    }

    #[test]
    fn test_map_point() {
        let st = stage(&[(98, 50, 2), (50, 52, 48)]);
        assert_eq!(st.map_point(79), 81);
        assert_eq!(st.map_point(14), 14);
        assert_eq!(st.map_point(99), 51);
    }

    fn arb_disjoint_stage() -> impl Strategy<Value = MappingStage<i64>> {
        // Consecutive, gapped windows guarantee disjoint sources.
        prop::collection::vec((0i64..10, 1i64..20, -300i64..300), 0..6).prop_map(|raw| {
            let mut cursor = -100;
            let mappings = raw
                .into_iter()
                .map(|(gap, len, dest)| {
                    let source = cursor + gap;
                    cursor = source + len;
                    (source, dest, len)
                })
                .collect::<Vec<_>>();
            stage(&mappings)
        })
    }

    proptest! {
        #[test]
        fn prop_resolve_matches_pointwise_mapping(
            st in arb_disjoint_stage(),
            start in -120i64..120,
            length in 1i64..80,
        ) {
            let out = st.resolve(&[Interval::new(start, length)]);
            let expected: BTreeSet<i64> =
                Interval::new(start, length).iter().map(|p| st.map_point(p)).collect();
            let actual: BTreeSet<i64> = out.iter().flat_map(|iv| iv.iter()).collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
