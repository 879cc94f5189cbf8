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

//! Single range mappings.
//!
//! A `RangeMapping` shifts the window `[source, source + length - 1]` onto
//! `[destination, destination + length - 1]`. Resolving an interval against
//! it yields at most one mapped piece (the shifted intersection) and at most
//! two unmapped pieces (the parts before and after the window). Shifting the
//! mapped piece back and joining it with the unmapped pieces reproduces the
//! input exactly.

use num_traits::PrimInt;
use smallvec::SmallVec;
use yuletide_core::math::interval::{Interval, IntervalError};

/// The error type for range mapping construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MappingError {
    /// The mapping covers zero or a negative number of points.
    #[error("range mapping length must be positive")]
    NonPositiveLength,
    /// `source + length - 1` does not fit the integer type.
    #[error("range mapping source window overflows the integer type")]
    SourceOverflow,
    /// `destination + length - 1` does not fit the integer type.
    #[error("range mapping destination window overflows the integer type")]
    DestinationOverflow,
}

/// The pieces of one interval after resolving it against a `RangeMapping`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<T>
where
    T: PrimInt,
{
    /// The part inside the source window, already shifted to the destination.
    pub mapped: Option<Interval<T>>,
    /// The parts before and after the source window, unchanged.
    pub unmapped: SmallVec<[Interval<T>; 2]>,
}

/// A contiguous shift rule between two integer windows of equal length.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeMapping<T>
where
    T: PrimInt,
{
    source: Interval<T>,
    destination: T,
}

impl<T> RangeMapping<T>
where
    T: PrimInt,
{
    /// Creates a mapping of `length` points from `source` to `destination`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use yuletide_almanac::mapping::{MappingError, RangeMapping};
    ///
    /// assert!(RangeMapping::new(98, 50, 2).is_ok());
    /// assert_eq!(RangeMapping::new(98, 50, 0), Err(MappingError::NonPositiveLength));
    /// ```
    pub fn new(source: T, destination: T, length: T) -> Result<Self, MappingError> {
        let window = Interval::try_new(source, length).map_err(|e| match e {
            IntervalError::NonPositiveLength => MappingError::NonPositiveLength,
            _ => MappingError::SourceOverflow,
        })?;
        Interval::try_new(destination, length).map_err(|_| MappingError::DestinationOverflow)?;

        Ok(Self {
            source: window,
            destination,
        })
    }

    /// Returns the first source point.
    #[inline]
    pub fn source(&self) -> T {
        self.source.start()
    }

    /// Returns the first destination point.
    #[inline]
    pub fn destination(&self) -> T {
        self.destination
    }

    /// Returns the number of points shifted.
    #[inline]
    pub fn len(&self) -> T {
        self.source.len()
    }

    /// Always `false`; construction rejects empty mappings.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the source window.
    #[inline]
    pub fn source_window(&self) -> Interval<T> {
        self.source
    }

    /// Returns the destination window.
    #[inline]
    pub fn destination_window(&self) -> Interval<T> {
        Interval::new(self.destination, self.source.len())
    }

    /// Returns `true` if the source windows of both mappings share a point.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.source.intersects(other.source)
    }

    /// Maps a single value, or returns `None` if it lies outside the window.
    #[inline]
    pub fn map_point(&self, value: T) -> Option<T> {
        self.source
            .contains_point(value)
            .then(|| self.destination + (value - self.source.start()))
    }

    /// Splits `interval` into the shifted part inside the source window and
    /// the untouched parts before and after it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use yuletide_almanac::mapping::RangeMapping;
    /// # use yuletide_core::math::interval::Interval;
    ///
    /// let mapping = RangeMapping::new(98, 50, 2).unwrap();
    /// let res = mapping.resolve(Interval::new(97, 4)); // 97..=100
    ///
    /// assert_eq!(res.mapped, Some(Interval::new(50, 2)));
    /// assert_eq!(res.unmapped.as_slice(), &[Interval::new(97, 1), Interval::new(100, 1)]);
    /// ```
    pub fn resolve(&self, interval: Interval<T>) -> Resolution<T> {
        // Offsets stay inside the validated destination window.
        let mapped = interval.intersection(self.source).map(|inside| {
            let start = self.destination + (inside.start() - self.source.start());
            Interval::new(start, inside.len())
        });

        Resolution {
            mapped,
            unmapped: interval.difference(self.source),
        }
    }
}

impl<T> std::fmt::Debug for RangeMapping<T>
where
    T: PrimInt + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeMapping")
            .field("source", &self.source.start())
            .field("destination", &self.destination)
            .field("length", &self.source.len())
            .finish()
    }
}

impl<T> std::fmt::Display for RangeMapping<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination_window())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_rejects_invalid_mappings() {
        assert_eq!(
            RangeMapping::new(0i64, 10, 0),
            Err(MappingError::NonPositiveLength)
        );
        assert_eq!(
            RangeMapping::new(0i64, 10, -4),
            Err(MappingError::NonPositiveLength)
        );
        assert_eq!(
            RangeMapping::new(250u8, 0, 10),
            Err(MappingError::SourceOverflow)
        );
        assert_eq!(
            RangeMapping::new(0u8, 250, 10),
            Err(MappingError::DestinationOverflow)
        );
    }

    #[test]
    fn test_resolve_interval_straddling_window() {
        let mapping = RangeMapping::new(98, 50, 2).unwrap();
        let res = mapping.resolve(Interval::new(97, 4));

        assert_eq!(res.mapped, Some(Interval::new(50, 2)));
        assert_eq!(
            res.unmapped.as_slice(),
            &[Interval::new(97, 1), Interval::new(100, 1)]
        );
    }

    #[test]
    fn test_resolve_disjoint_interval_passes_through() {
        let mapping = RangeMapping::new(10, 100, 5).unwrap();

        let before = mapping.resolve(Interval::new(0, 10));
        assert_eq!(before.mapped, None);
        assert_eq!(before.unmapped.as_slice(), &[Interval::new(0, 10)]);

        let after = mapping.resolve(Interval::new(15, 3));
        assert_eq!(after.mapped, None);
        assert_eq!(after.unmapped.as_slice(), &[Interval::new(15, 3)]);
    }

    #[test]
    fn test_resolve_interval_inside_window() {
        let mapping = RangeMapping::new(50, 52, 48).unwrap();
        let res = mapping.resolve(Interval::new(79, 14));

        assert_eq!(res.mapped, Some(Interval::new(81, 14)));
        assert!(res.unmapped.is_empty());
    }

    #[test]
    fn test_resolve_shifts_downwards_with_unsigned_values() {
        let mapping = RangeMapping::new(100u64, 0, 10).unwrap();
        let res = mapping.resolve(Interval::new(105, 10));

        assert_eq!(res.mapped, Some(Interval::new(5, 5)));
        assert_eq!(res.unmapped.as_slice(), &[Interval::new(110, 5)]);
    }

    #[test]
    fn test_map_point() {
        let mapping = RangeMapping::new(98, 50, 2).unwrap();
        assert_eq!(mapping.map_point(98), Some(50));
        assert_eq!(mapping.map_point(99), Some(51));
        assert_eq!(mapping.map_point(100), None);
        assert_eq!(mapping.map_point(97), None);
    }

    #[test]
    fn test_overlaps() {
        let a = RangeMapping::new(0, 100, 10).unwrap();
        assert!(a.overlaps(&RangeMapping::new(9, 0, 3).unwrap()));
        assert!(!a.overlaps(&RangeMapping::new(10, 0, 3).unwrap()));
    }

    #[test]
    fn test_display() {
        let mapping = RangeMapping::new(98, 50, 2).unwrap();
        assert_eq!(format!("{}", mapping), "[98, 99] -> [50, 51]");
    }

    proptest! {
        #[test]
        fn prop_resolution_reconstructs_interval(
            start in -100i64..100,
            length in 1i64..60,
            source in -100i64..100,
            destination in -200i64..200,
            window in 1i64..60,
        ) {
            let mapping = RangeMapping::new(source, destination, window).unwrap();
            let interval = Interval::new(start, length);
            let res = mapping.resolve(interval);

            let mut covered: Vec<i64> = res.unmapped.iter().flat_map(|iv| iv.iter()).collect();
            if let Some(mapped) = res.mapped {
                covered.extend(mapped.iter().map(|p| p - destination + source));
            }
            let unique: BTreeSet<i64> = covered.iter().copied().collect();

            // Nothing duplicated and nothing lost.
            prop_assert_eq!(unique.len(), covered.len());
            prop_assert_eq!(unique, interval.iter().collect::<BTreeSet<_>>());
        }
    }
}
