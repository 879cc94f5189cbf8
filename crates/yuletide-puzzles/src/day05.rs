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

//! Day 5: the seed almanac.
//!
//! Both parts load the almanac and query its chain; part two resolves the
//! seed ranges as whole intervals.

use crate::error::{PuzzleError, Result};
use yuletide_almanac::loading::AlmanacLoader;

/// Lowest location over the individual seeds.
pub fn part_one(input: &str) -> Result<u64> {
    AlmanacLoader::new()
        .from_str::<u64>(input)?
        .lowest_location()
        .ok_or(PuzzleError::EmptyInput)
}

/// Lowest location over all seeds described by the seed ranges.
pub fn part_two(input: &str) -> Result<u64> {
    AlmanacLoader::new()
        .from_str::<u64>(input)?
        .lowest_location_for_ranges()?
        .ok_or(PuzzleError::EmptyInput)
}
