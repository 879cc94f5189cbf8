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

//! Day 1: calibration values.
//!
//! Every line holds a calibration value made of its first and last digit.
//! Part two also accepts digits spelled out as words; words may share
//! letters (`twone` contains both `two` and `one`).

use crate::error::{PuzzleError, Result};
use yuletide_core::text::lines;

const WORDS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Returns the digit starting at the beginning of `rest`, if any.
fn digit_at(rest: &str, spelled: bool) -> Option<u32> {
    if let Some(d) = rest.chars().next().and_then(|c| c.to_digit(10)) {
        return Some(d);
    }
    if !spelled {
        return None;
    }
    WORDS
        .iter()
        .position(|word| rest.starts_with(word))
        .map(|i| i as u32 + 1)
}

/// Combines the first and last digit of `line` into a two-digit number.
fn calibration_value(line: &str, spelled: bool) -> Option<u32> {
    let mut digits = line
        .char_indices()
        .filter_map(|(i, _)| digit_at(&line[i..], spelled));
    let first = digits.next()?;
    let last = digits.last().unwrap_or(first);
    Some(first * 10 + last)
}

fn solve(input: &str, spelled: bool) -> Result<u64> {
    lines(input)
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(i, line)| {
            calibration_value(line, spelled)
                .map(u64::from)
                .ok_or_else(|| PuzzleError::malformed(i + 1, "line contains no digit", line))
        })
        .sum()
}

/// Sums the calibration values using numeric digits only.
pub fn part_one(input: &str) -> Result<u64> {
    solve(input, false)
}

/// Sums the calibration values using numeric and spelled digits.
pub fn part_two(input: &str) -> Result<u64> {
    solve(input, true)
}
