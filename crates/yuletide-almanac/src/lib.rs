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

//! # Yuletide Almanac
//!
//! **Interval remapping through chained piecewise range mappings.**
//!
//! An almanac describes how numbers of one category (seeds) translate into
//! numbers of the next (soil, fertilizer, ...) until a terminal category is
//! reached. Each translation step is a set of contiguous shift rules. This
//! crate resolves whole integer intervals through those steps without ever
//! enumerating their points, so ranges spanning billions of values cost no
//! more than a handful of splits.
//!
//! ## Architecture
//!
//! * **`mapping`**: `RangeMapping`, a single shift rule, and its three-way
//!   split of an interval into a mapped piece and unmapped remainders.
//! * **`stage`**: `MappingStage`, every rule between two categories, applied
//!   with pass-through for uncovered points and merging of the output.
//! * **`category`**: Interned category names addressed by `CategoryId`.
//! * **`chain`**: `StageChain` and its builder, which validates that stages
//!   form a simple path from the initial category.
//! * **`loading`**: `AlmanacLoader`, the text parser producing an `Almanac`.
//! * **`almanac`**: Seeds plus chain, with the lowest-location queries.
//!
//! ## Example
//!
//! ```rust
//! use yuletide_almanac::loading::AlmanacLoader;
//!
//! let text = "seeds: 79 14 55 13\n\nseed-to-soil map:\n50 98 2\n52 50 48\n";
//! let almanac = AlmanacLoader::new().from_str::<i64>(text).unwrap();
//!
//! assert_eq!(almanac.lowest_location(), Some(13));
//! assert_eq!(almanac.lowest_location_for_ranges(), Ok(Some(57)));
//! ```

pub mod almanac;
pub mod category;
pub mod chain;
pub mod loading;
pub mod mapping;
pub mod stage;
