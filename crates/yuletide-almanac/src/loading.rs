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

//! Almanac loader.
//!
//! Turns the line-oriented almanac text into seeds and a validated
//! `StageChain`:
//!
//! ```text
//! seeds: 79 14 55 13
//!
//! seed-to-soil map:
//! 50 98 2          (destination start, source start, length)
//! 52 50 48
//!
//! soil-to-fertilizer map:
//! ...
//! ```
//!
//! Blank lines are ignored. Every other line must be the seeds line (first),
//! a `<source>-to-<destination> map:` header, or a range line belonging to
//! the most recent header. Errors carry the 1-based line number.
//!
//! The loader accepts any `BufRead`, raw reader, file path, or string slice.

use crate::{
    almanac::Almanac,
    chain::{ChainError, StageChainBuilder},
    mapping::{MappingError, RangeMapping},
};
use log::debug;
use num_traits::PrimInt;
use once_cell::sync::Lazy;
use regex::Regex;
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
    str::FromStr,
};
use yuletide_core::text::{ParseIntegerError, parse_integers};

static SEEDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^seeds:(?<seeds>.*)$").expect("valid seeds regex"));

static HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?<source>[a-zA-Z]+)-to-(?<destination>[a-zA-Z]+)\s+map:$")
        .expect("valid header regex")
});

/// The error type for the almanac loading process.
#[derive(Debug, thiserror::Error)]
pub enum AlmanacLoaderError {
    /// An I/O error occurred while reading the input stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The input contains no `seeds:` line.
    #[error("missing 'seeds:' line")]
    MissingSeeds,
    /// A token could not be parsed into the expected numeric type.
    #[error("line {line}: {error}")]
    Parse {
        line: usize,
        #[source]
        error: ParseIntegerError,
    },
    /// A range line does not hold exactly three integers.
    #[error("line {line}: expected '<destination> <source> <length>', found {found} values")]
    MalformedRange { line: usize, found: usize },
    /// A range line appears before any map header.
    #[error("line {line}: range line outside of a map block")]
    RangeOutsideMap { line: usize },
    /// A line matches none of the accepted shapes.
    #[error("line {line}: unexpected content '{content}'")]
    UnexpectedLine { line: usize, content: String },
    /// A range mapping is invalid.
    #[error("line {line}: {error}")]
    Mapping {
        line: usize,
        #[source]
        error: MappingError,
    },
    /// The stages do not form a valid chain.
    #[error("invalid stage chain: {0}")]
    Chain(#[from] ChainError),
}

/// A configurable loader for almanac texts.
///
/// # Configuration
/// * `initial_category`: The category resolution starts from (`seed` by default).
/// * `reject_overlapping_mappings`: If true, a map block whose range lines
///   overlap is rejected instead of letting earlier lines take precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlmanacLoader {
    initial_category: String,
    reject_overlapping_mappings: bool,
}

impl Default for AlmanacLoader {
    fn default() -> Self {
        Self {
            initial_category: "seed".to_owned(),
            reject_overlapping_mappings: false,
        }
    }
}

/// One map block under construction.
struct PendingStage<T>
where
    T: PrimInt,
{
    source: String,
    destination: String,
    mappings: Vec<RangeMapping<T>>,
}

impl AlmanacLoader {
    /// Creates a new `AlmanacLoader` with default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the category resolution starts from.
    #[inline]
    pub fn initial_category(mut self, name: impl Into<String>) -> Self {
        self.initial_category = name.into();
        self
    }

    /// Configures whether overlapping range lines within one map are an error.
    #[inline]
    pub fn reject_overlapping_mappings(mut self, yes: bool) -> Self {
        self.reject_overlapping_mappings = yes;
        self
    }

    /// Loads an almanac from a type implementing `BufRead`.
    pub fn from_bufread<T, R>(&self, rdr: R) -> Result<Almanac<T>, AlmanacLoaderError>
    where
        T: PrimInt + FromStr,
        R: BufRead,
    {
        let mut seeds: Option<Vec<T>> = None;
        let mut stages: Vec<PendingStage<T>> = Vec::new();

        for (index, line) in rdr.lines().enumerate() {
            let line_no = index + 1;
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if seeds.is_none() {
                let caps = SEEDS.captures(line).ok_or(AlmanacLoaderError::MissingSeeds)?;
                let values = parse_integers(&caps["seeds"]).map_err(|error| {
                    AlmanacLoaderError::Parse {
                        line: line_no,
                        error,
                    }
                })?;
                seeds = Some(values);
                continue;
            }

            if let Some(caps) = HEADER.captures(line) {
                stages.push(PendingStage {
                    source: caps["source"].to_owned(),
                    destination: caps["destination"].to_owned(),
                    mappings: Vec::new(),
                });
                continue;
            }

            if !line.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '+') {
                return Err(AlmanacLoaderError::UnexpectedLine {
                    line: line_no,
                    content: line.to_owned(),
                });
            }

            let stage = stages
                .last_mut()
                .ok_or(AlmanacLoaderError::RangeOutsideMap { line: line_no })?;
            stage.mappings.push(parse_range(line, line_no)?);
        }

        let seeds = seeds.ok_or(AlmanacLoaderError::MissingSeeds)?;

        let mut builder = StageChainBuilder::new(&self.initial_category)
            .reject_overlapping_mappings(self.reject_overlapping_mappings);
        for stage in stages {
            builder.add_stage(&stage.source, &stage.destination, stage.mappings);
        }
        debug!(
            "parsed almanac with {} seeds and {} map blocks",
            seeds.len(),
            builder.num_stages()
        );

        Ok(Almanac::new(seeds, builder.build()?))
    }

    /// Loads an almanac from a file path.
    #[inline]
    pub fn from_path<T, P>(&self, path: P) -> Result<Almanac<T>, AlmanacLoaderError>
    where
        T: PrimInt + FromStr,
        P: AsRef<Path>,
    {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads an almanac from a generic reader.
    #[inline]
    pub fn from_reader<T, R>(&self, r: R) -> Result<Almanac<T>, AlmanacLoaderError>
    where
        T: PrimInt + FromStr,
        R: Read,
    {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads an almanac from a string slice.
    #[inline]
    pub fn from_str<T>(&self, s: &str) -> Result<Almanac<T>, AlmanacLoaderError>
    where
        T: PrimInt + FromStr,
    {
        self.from_bufread(s.as_bytes())
    }
}

/// Parses `<destination> <source> <length>`.
fn parse_range<T>(line: &str, line_no: usize) -> Result<RangeMapping<T>, AlmanacLoaderError>
where
    T: PrimInt + FromStr,
{
    let values: Vec<T> = parse_integers(line).map_err(|error| AlmanacLoaderError::Parse {
        line: line_no,
        error,
    })?;
    let &[destination, source, length] = values.as_slice() else {
        return Err(AlmanacLoaderError::MalformedRange {
            line: line_no,
            found: values.len(),
        });
    };
    RangeMapping::new(source, destination, length).map_err(|error| AlmanacLoaderError::Mapping {
        line: line_no,
        error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use yuletide_core::math::interval::Interval;

    const SMALL: &str = indoc! {"
        seeds: 79 14 55 13

        seed-to-soil map:
        50 98 2
        52 50 48

        soil-to-location map:
        0 15 37
    "};

    #[test]
    fn test_loads_seeds_and_chain() {
        let almanac: Almanac<i64> = AlmanacLoader::new().from_str(SMALL).expect("Failed to load");

        assert_eq!(almanac.seeds(), &[79, 14, 55, 13]);
        assert_eq!(almanac.chain().path(), vec!["seed", "soil", "location"]);
        assert_eq!(almanac.chain().stages()[0].mappings().len(), 2);

        // 79 -> 81 -> 81; 14 -> 14 -> 14; 15 -> 15 -> 0
        assert_eq!(almanac.chain().resolve_point(79), 81);
        assert_eq!(almanac.chain().resolve_point(14), 14);
        assert_eq!(almanac.chain().resolve_point(15), 0);
        assert_eq!(
            almanac.chain().resolve(Interval::new(13, 3)),
            vec![Interval::new(0, 1), Interval::new(13, 2)]
        );
    }

    #[test]
    fn test_empty_seed_list_is_allowed() {
        let almanac: Almanac<u64> = AlmanacLoader::new()
            .from_str("seeds:\nseed-to-soil map:\n1 2 3\n")
            .unwrap();
        assert!(almanac.seeds().is_empty());
    }

    #[test]
    fn test_missing_seeds() {
        let res: Result<Almanac<i64>, _> = AlmanacLoader::new().from_str("seed-to-soil map:\n1 2 3");
        assert!(matches!(res, Err(AlmanacLoaderError::MissingSeeds)));

        let res: Result<Almanac<i64>, _> = AlmanacLoader::new().from_str("\n\n");
        assert!(matches!(res, Err(AlmanacLoaderError::MissingSeeds)));
    }

    #[test]
    fn test_parse_error_structure() {
        let res: Result<Almanac<i64>, _> =
            AlmanacLoader::new().from_str("seeds: 1 2\nseed-to-soil map:\n1 x 3\n");
        match res {
            Err(AlmanacLoaderError::Parse { line, error }) => {
                assert_eq!(line, 3);
                assert_eq!(error.token, "x");
                assert!(error.type_name.contains("i64"));
            }
            other => panic!("Expected Parse error with context, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_range() {
        let res: Result<Almanac<i64>, _> =
            AlmanacLoader::new().from_str("seeds: 1\nseed-to-soil map:\n1 2\n");
        assert!(matches!(
            res,
            Err(AlmanacLoaderError::MalformedRange { line: 3, found: 2 })
        ));
    }

    #[test]
    fn test_zero_length_range_is_rejected() {
        let res: Result<Almanac<i64>, _> =
            AlmanacLoader::new().from_str("seeds: 1\nseed-to-soil map:\n1 2 0\n");
        assert!(matches!(
            res,
            Err(AlmanacLoaderError::Mapping {
                line: 3,
                error: MappingError::NonPositiveLength
            })
        ));
    }

    #[test]
    fn test_range_before_header() {
        let res: Result<Almanac<i64>, _> = AlmanacLoader::new().from_str("seeds: 1\n1 2 3\n");
        assert!(matches!(
            res,
            Err(AlmanacLoaderError::RangeOutsideMap { line: 2 })
        ));
    }

    #[test]
    fn test_unexpected_line() {
        let res: Result<Almanac<i64>, _> =
            AlmanacLoader::new().from_str("seeds: 1\nseed to soil:\n1 2 3\n");
        match res {
            Err(AlmanacLoaderError::UnexpectedLine { line, content }) => {
                assert_eq!(line, 2);
                assert_eq!(content, "seed to soil:");
            }
            other => panic!("Expected UnexpectedLine, got {other:?}"),
        }
    }

    #[test]
    fn test_header_without_ranges() {
        let res: Result<Almanac<i64>, _> =
            AlmanacLoader::new().from_str("seeds: 1\nseed-to-soil map:\n\nsoil-to-water map:\n1 2 3\n");
        assert!(matches!(
            res,
            Err(AlmanacLoaderError::Chain(ChainError::EmptyStage { .. }))
        ));
    }

    #[test]
    fn test_cycle_is_rejected() {
        let text = indoc! {"
            seeds: 1
            seed-to-soil map:
            1 2 3
            soil-to-seed map:
            1 2 3
        "};
        let res: Result<Almanac<i64>, _> = AlmanacLoader::new().from_str(text);
        assert!(matches!(
            res,
            Err(AlmanacLoaderError::Chain(ChainError::Cycle { .. }))
        ));
    }

    #[test]
    fn test_custom_initial_category() {
        let text = "seeds: 3\nsoil-to-water map:\n10 0 5\n";
        let res: Result<Almanac<i64>, _> = AlmanacLoader::new().from_str(text);
        assert!(matches!(
            res,
            Err(AlmanacLoaderError::Chain(ChainError::Unreachable { .. }))
        ));

        let almanac: Almanac<i64> = AlmanacLoader::new()
            .initial_category("soil")
            .from_str(text)
            .unwrap();
        assert_eq!(almanac.chain().resolve_point(3), 13);
    }

    #[test]
    fn test_overlap_policy() {
        let text = "seeds: 3\nseed-to-soil map:\n100 0 10\n500 5 10\n";
        let lenient: Almanac<i64> = AlmanacLoader::new().from_str(text).unwrap();
        assert_eq!(lenient.chain().resolve_point(7), 107);

        let strict: Result<Almanac<i64>, _> = AlmanacLoader::new()
            .reject_overlapping_mappings(true)
            .from_str(text);
        assert!(matches!(
            strict,
            Err(AlmanacLoaderError::Chain(ChainError::OverlappingMappings { .. }))
        ));
    }

    #[test]
    fn test_error_messages_carry_line_numbers() {
        let err = AlmanacLoader::new()
            .from_str::<i64>("seeds: 1\nseed-to-soil map:\n1 2 0\n")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "line 3: range mapping length must be positive"
        );
    }
}
