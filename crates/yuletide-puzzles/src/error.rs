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

//! Error type shared by all puzzle solvers.

use yuletide_almanac::{almanac::SeedRangeError, loading::AlmanacLoaderError};
use yuletide_core::text::{CaptureError, ParseIntegerError};

/// The error type for solving a puzzle.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    /// The input holds nothing to solve.
    #[error("input is empty")]
    EmptyInput,
    /// A line does not have the expected shape.
    #[error("line {line}: {reason}: '{content}'")]
    Malformed {
        line: usize,
        reason: &'static str,
        content: String,
    },
    /// A token could not be parsed as an integer.
    #[error(transparent)]
    Parse(#[from] ParseIntegerError),
    /// A named group was captured more than once.
    #[error(transparent)]
    Capture(#[from] CaptureError),
    /// The almanac could not be loaded.
    #[error(transparent)]
    Almanac(#[from] AlmanacLoaderError),
    /// The seed list cannot be read as ranges.
    #[error(transparent)]
    SeedRange(#[from] SeedRangeError),
    /// The number of race times and records differ.
    #[error("{times} race times but {records} records")]
    RaceCountMismatch { times: usize, records: usize },
    /// No hold time beats the record.
    #[error("race of {time} ms cannot beat the record of {record} mm")]
    UnbeatableRace { time: u64, record: u64 },
    /// A node is referenced but never defined.
    #[error("unknown node '{0}'")]
    UnknownNode(String),
    /// Walking from a start node never reaches an end node.
    #[error("no end node is reachable from '{0}'")]
    EndUnreachable(String),
    /// An intermediate value does not fit the integer type.
    #[error("arithmetic overflow")]
    Overflow,
}

impl PuzzleError {
    /// Creates a `Malformed` error for the 1-based `line`.
    pub(crate) fn malformed(line: usize, reason: &'static str, content: &str) -> Self {
        Self::Malformed {
            line,
            reason,
            content: content.to_owned(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
