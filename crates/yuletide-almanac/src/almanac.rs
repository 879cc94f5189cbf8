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

//! A loaded almanac: the seed list plus the stage chain it is resolved through.

use crate::chain::StageChain;
use num_traits::PrimInt;
use yuletide_core::math::interval::{Interval, IntervalError};

/// The error type for interpreting the seed list as `(start, length)` pairs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeedRangeError {
    /// The seed list cannot be split into pairs.
    #[error("seed list has {count} values; ranges need an even count")]
    OddSeedCount { count: usize },
    /// A pair does not describe a valid interval.
    #[error("seed range {index} is invalid: {error}")]
    InvalidRange {
        index: usize,
        #[source]
        error: IntervalError,
    },
}

/// Seeds together with the validated chain from the initial category.
#[derive(Debug, Clone)]
pub struct Almanac<T>
where
    T: PrimInt,
{
    seeds: Vec<T>,
    chain: StageChain<T>,
}

impl<T> Almanac<T>
where
    T: PrimInt,
{
    /// Creates an almanac from its parts.
    #[inline]
    pub fn new(seeds: Vec<T>, chain: StageChain<T>) -> Self {
        Self { seeds, chain }
    }

    /// The seed values in input order.
    #[inline]
    pub fn seeds(&self) -> &[T] {
        &self.seeds
    }

    /// The validated stage chain seeds are resolved through.
    #[inline]
    pub fn chain(&self) -> &StageChain<T> {
        &self.chain
    }

    /// Lowest terminal value over the individual seeds.
    ///
    /// Returns `None` for an empty seed list.
    pub fn lowest_location(&self) -> Option<T> {
        self.seeds
            .iter()
            .map(|&seed| self.chain.resolve_point(seed))
            .min()
    }

    /// Reads the seed list as consecutive `(start, length)` pairs.
    ///
    /// # Errors
    ///
    /// Returns `SeedRangeError::OddSeedCount` if the list has an odd number
    /// of values and `SeedRangeError::InvalidRange` for a pair with a
    /// non-positive length or an overflowing end.
    pub fn seed_ranges(&self) -> Result<Vec<Interval<T>>, SeedRangeError> {
        if self.seeds.len() % 2 != 0 {
            return Err(SeedRangeError::OddSeedCount {
                count: self.seeds.len(),
            });
        }
        self.seeds
            .chunks_exact(2)
            .enumerate()
            .map(|(index, pair)| {
                Interval::try_new(pair[0], pair[1])
                    .map_err(|error| SeedRangeError::InvalidRange { index, error })
            })
            .collect()
    }

    /// Lowest terminal value over every seed in every seed range.
    ///
    /// Each range is resolved as a whole, so the cost depends on the number
    /// of interval pieces and never on the range lengths.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`Almanac::seed_ranges`].
    pub fn lowest_location_for_ranges(&self) -> Result<Option<T>, SeedRangeError> {
        let lowest = self
            .seed_ranges()?
            .into_iter()
            .flat_map(|range| self.chain.resolve(range))
            .map(|iv| iv.start())
            .min();
        Ok(lowest)
    }
}
