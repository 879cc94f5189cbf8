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

use num_traits::PrimInt;
use smallvec::{SmallVec, smallvec};
use std::{
    cmp::{max, min},
    iter::FusedIterator,
};

/// The error type for interval construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntervalError {
    /// The requested length was zero or negative.
    #[error("interval length must be positive")]
    NonPositiveLength,
    /// The inclusive end `start + length - 1` does not fit the integer type.
    #[error("interval end overflows the integer type")]
    EndOverflow,
}

/// A non-empty, contiguous range of integers stored as `(start, length)`.
///
/// The interval covers the inclusive range `[start, start + length - 1]`.
/// Intervals are immutable: splitting, shifting and merging always produce
/// new values.
///
/// # Invariants
/// `length > 0` and `start + length - 1` is representable in `T`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval<T>
where
    T: PrimInt,
{
    start: T,
    length: T,
}

/// An iterator over the integer points contained within an `Interval`.
///
/// # Examples
///
/// ```rust
/// # use yuletide_core::math::interval::Interval;
///
/// let iv = Interval::new(1, 4);
/// let points: Vec<_> = iv.iter().collect();
/// assert_eq!(points, vec![1, 2, 3, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct IntervalIterator<T>
where
    T: PrimInt,
{
    next: Option<T>,
    last: T,
}

impl<T> Iterator for IntervalIterator<T>
where
    T: PrimInt,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if current < self.last {
            Some(current + T::one())
        } else {
            None
        };
        Some(current)
    }
}

impl<T> FusedIterator for IntervalIterator<T> where T: PrimInt {}

impl<T> Interval<T>
where
    T: PrimInt,
{
    /// Creates a new `Interval` starting at `start` with `length` points.
    ///
    /// # Panics
    ///
    /// Panics if `length <= 0` or if the inclusive end overflows `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use yuletide_core::math::interval::Interval;
    ///
    /// let iv = Interval::new(97, 4);
    /// assert_eq!(iv.end(), 100);
    /// ```
    #[inline]
    pub fn new(start: T, length: T) -> Self {
        match Self::try_new(start, length) {
            Ok(iv) => iv,
            Err(e) => panic!("Invalid interval: {e}"),
        }
    }

    /// Creates a new `Interval` if the inputs are valid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use yuletide_core::math::interval::{Interval, IntervalError};
    ///
    /// assert!(Interval::try_new(0, 10).is_ok());
    /// assert_eq!(Interval::try_new(0, 0), Err(IntervalError::NonPositiveLength));
    /// assert_eq!(Interval::try_new(u8::MAX, 2), Err(IntervalError::EndOverflow));
    /// ```
    #[inline]
    pub fn try_new(start: T, length: T) -> Result<Self, IntervalError> {
        if length <= T::zero() {
            return Err(IntervalError::NonPositiveLength);
        }
        start
            .checked_add(&(length - T::one()))
            .ok_or(IntervalError::EndOverflow)?;
        Ok(Self { start, length })
    }

    /// Creates an interval from inclusive bounds without checking invariants
    /// in release builds.
    #[inline]
    pub(crate) fn from_bounds_unchecked(first: T, last: T) -> Self {
        debug_assert!(first <= last, "Invalid interval: first must be <= last");
        Self {
            start: first,
            length: last - first + T::one(),
        }
    }

    /// Returns the first point of the interval.
    #[inline]
    pub const fn start(&self) -> T {
        self.start
    }

    /// Returns the number of points covered.
    #[inline]
    pub const fn len(&self) -> T {
        self.length
    }

    /// Always `false`; an interval covers at least one point.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the last point of the interval (inclusive).
    #[inline]
    pub fn end(&self) -> T {
        self.start + (self.length - T::one())
    }

    /// Returns `true` if `value` lies within the interval.
    #[inline]
    pub fn contains_point(&self, value: T) -> bool {
        self.start <= value && value <= self.end()
    }

    /// Returns `true` if the intervals share at least one point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use yuletide_core::math::interval::Interval;
    ///
    /// let a = Interval::new(0, 5); // 0..=4
    /// assert!(a.intersects(Interval::new(4, 2)));
    /// assert!(!a.intersects(Interval::new(5, 2)));
    /// ```
    #[inline]
    pub fn intersects(&self, other: Self) -> bool {
        self.start <= other.end() && other.start <= self.end()
    }

    /// Returns the points shared by both intervals, if any.
    #[inline]
    pub fn intersection(&self, other: Self) -> Option<Self> {
        let first = max(self.start, other.start);
        let last = min(self.end(), other.end());
        if first <= last {
            Some(Self::from_bounds_unchecked(first, last))
        } else {
            None
        }
    }

    /// Returns the smallest interval spanning both, if they share a point.
    #[inline]
    pub fn union(&self, other: Self) -> Option<Self> {
        if self.intersects(other) {
            Some(Self::from_bounds_unchecked(
                min(self.start, other.start),
                max(self.end(), other.end()),
            ))
        } else {
            None
        }
    }

    /// Returns the parts of `self` lying strictly before and strictly after
    /// `other`, in that order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use yuletide_core::math::interval::Interval;
    ///
    /// let base = Interval::new(0, 10); // 0..=9
    /// let diff = base.difference(Interval::new(4, 2)); // remove 4..=5
    /// assert_eq!(diff.as_slice(), &[Interval::new(0, 4), Interval::new(6, 4)]);
    /// ```
    pub fn difference(&self, other: Self) -> SmallVec<[Self; 2]> {
        if !self.intersects(other) {
            return smallvec![*self];
        }

        let mut result = SmallVec::new();
        if self.start < other.start {
            result.push(Self::from_bounds_unchecked(
                self.start,
                other.start - T::one(),
            ));
        }
        if self.end() > other.end() {
            result.push(Self::from_bounds_unchecked(
                other.end() + T::one(),
                self.end(),
            ));
        }
        result
    }

    /// Returns an iterator over the points of the interval.
    #[inline]
    pub fn iter(&self) -> IntervalIterator<T> {
        IntervalIterator {
            next: Some(self.start),
            last: self.end(),
        }
    }
}

impl<T> std::fmt::Debug for Interval<T>
where
    T: PrimInt + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interval")
            .field("start", &self.start)
            .field("length", &self.length)
            .finish()
    }
}

impl<T> std::fmt::Display for Interval<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end())
    }
}

impl<T> IntoIterator for Interval<T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = IntervalIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_valid() {
        let iv = Interval::new(10, 5);
        assert_eq!(iv.start(), 10);
        assert_eq!(iv.len(), 5);
        assert_eq!(iv.end(), 14);
        assert!(!iv.is_empty());
    }

    #[test]
    fn test_try_new_rejects_non_positive_length() {
        assert_eq!(
            Interval::try_new(5, 0),
            Err(IntervalError::NonPositiveLength)
        );
        assert_eq!(
            Interval::try_new(5i64, -3),
            Err(IntervalError::NonPositiveLength)
        );
    }

    #[test]
    fn test_try_new_rejects_overflowing_end() {
        assert_eq!(
            Interval::try_new(i32::MAX, 2),
            Err(IntervalError::EndOverflow)
        );
        // The last representable point is fine.
        assert!(Interval::try_new(i32::MAX, 1).is_ok());
    }

    #[test]
    #[should_panic(expected = "Invalid interval")]
    fn test_new_panic() {
        Interval::new(10, 0);
    }

    #[test]
    fn test_intersects() {
        let a = Interval::new(0, 10); // 0..=9

        assert!(!a.intersects(Interval::new(-5, 5))); // -5..=-1
        assert!(a.intersects(Interval::new(-5, 6))); // touches 0
        assert!(a.intersects(Interval::new(2, 3)));
        assert!(a.intersects(a));
        assert!(a.intersects(Interval::new(9, 4)));
        assert!(!a.intersects(Interval::new(10, 4)));
    }

    #[test]
    fn test_contains() {
        let a = Interval::new(0, 10);
        assert!(a.contains_point(0));
        assert!(a.contains_point(9));
        assert!(!a.contains_point(10));
        assert!(!a.contains_point(-1));
    }

    #[test]
    fn test_intersection() {
        let a = Interval::new(0, 10);
        assert_eq!(a.intersection(Interval::new(5, 10)), Some(Interval::new(5, 5)));
        assert_eq!(a.intersection(Interval::new(2, 3)), Some(Interval::new(2, 3)));
        assert_eq!(a.intersection(Interval::new(10, 3)), None);
    }

    #[test]
    fn test_union() {
        let a = Interval::new(0, 10);
        assert_eq!(a.union(Interval::new(5, 10)), Some(Interval::new(0, 15)));
        assert_eq!(a.union(Interval::new(2, 2)), Some(a));
        // Adjacent but not sharing a point
        assert_eq!(a.union(Interval::new(10, 5)), None);
    }

    #[test]
    fn test_difference() {
        let base = Interval::new(0, 10);

        // Disjoint
        let diff = base.difference(Interval::new(12, 3));
        assert_eq!(diff.as_slice(), &[base]);

        // Full cover
        assert!(base.difference(Interval::new(-5, 20)).is_empty());

        // Clip right
        let diff = base.difference(Interval::new(8, 10));
        assert_eq!(diff.as_slice(), &[Interval::new(0, 8)]);

        // Clip left
        let diff = base.difference(Interval::new(-5, 7));
        assert_eq!(diff.as_slice(), &[Interval::new(2, 8)]);

        // Hole
        let diff = base.difference(Interval::new(4, 2));
        assert_eq!(diff.as_slice(), &[Interval::new(0, 4), Interval::new(6, 4)]);
    }

    #[test]
    fn test_iterator() {
        let collected: Vec<i32> = Interval::new(1, 3).iter().collect();
        assert_eq!(collected, vec![1, 2, 3]);

        // Ends at the type maximum without overflowing
        let collected: Vec<u8> = Interval::new(254u8, 2).into_iter().collect();
        assert_eq!(collected, vec![254, 255]);
    }

    #[test]
    fn test_traits_display_debug() {
        let a = Interval::new(10, 11);
        assert_eq!(format!("{}", a), "[10, 20]");
        assert_eq!(format!("{:?}", a), "Interval { start: 10, length: 11 }");
    }
}
