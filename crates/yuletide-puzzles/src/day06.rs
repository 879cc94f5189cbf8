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

//! Day 6: boat races.
//!
//! Holding the button for `h` ms of a `time` ms race travels `(time - h) * h`
//! mm. The distance is symmetric around `time / 2` and increases up to it, so
//! the winning hold times form one contiguous range found by binary search.

use crate::error::{PuzzleError, Result};
use yuletide_core::text::{lines, parse_integer, parse_integers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Race {
    pub time: u64,
    pub record: u64,
}

impl Race {
    /// `true` if holding for `hold` ms beats the record.
    #[inline]
    fn wins(&self, hold: u64) -> bool {
        // An overflowing product is larger than any record.
        hold.checked_mul(self.time - hold)
            .is_none_or(|distance| distance > self.record)
    }

    /// Number of hold times that beat the record.
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::UnbeatableRace` if no hold time wins.
    pub fn winning_hold_times(&self) -> Result<u64> {
        let peak = self.time / 2;
        if !self.wins(peak) {
            return Err(PuzzleError::UnbeatableRace {
                time: self.time,
                record: self.record,
            });
        }

        // Smallest winning hold in [0, peak].
        let (mut lo, mut hi) = (0, peak);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.wins(mid) {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        Ok(self.time - 2 * lo + 1)
    }
}

/// Strips `label` off a numbered line.
fn strip_label<'a>(row: Option<(usize, &'a str)>, label: &str) -> Result<&'a str> {
    let (i, line) = row.ok_or(PuzzleError::EmptyInput)?;
    line.strip_prefix(label)
        .ok_or_else(|| PuzzleError::malformed(i + 1, "unexpected label", line))
}

/// Splits the `Time:` and `Distance:` lines off their labels.
fn labelled_lines(input: &str) -> Result<(&str, &str)> {
    let mut rows = lines(input).enumerate().filter(|(_, l)| !l.is_empty());
    let times = strip_label(rows.next(), "Time:")?;
    let records = strip_label(rows.next(), "Distance:")?;
    Ok((times, records))
}

/// Reads one race per column.
pub fn parse_races(input: &str) -> Result<Vec<Race>> {
    let (times, records) = labelled_lines(input)?;
    let times: Vec<u64> = parse_integers(times)?;
    let records: Vec<u64> = parse_integers(records)?;
    if times.len() != records.len() {
        return Err(PuzzleError::RaceCountMismatch {
            times: times.len(),
            records: records.len(),
        });
    }
    Ok(times
        .into_iter()
        .zip(records)
        .map(|(time, record)| Race { time, record })
        .collect())
}

/// Reads a single race with the digits of each line joined.
pub fn parse_joined_race(input: &str) -> Result<Race> {
    let (times, records) = labelled_lines(input)?;
    let join = |text: &str| text.split_whitespace().collect::<String>();
    Ok(Race {
        time: parse_integer(&join(times))?,
        record: parse_integer(&join(records))?,
    })
}

/// Multiplies the number of ways to win each race.
pub fn part_one(input: &str) -> Result<u64> {
    parse_races(input)?
        .iter()
        .try_fold(1u64, |acc, race| -> Result<u64> {
            acc.checked_mul(race.winning_hold_times()?)
                .ok_or(PuzzleError::Overflow)
        })
}

/// Number of ways to win the single long race.
pub fn part_two(input: &str) -> Result<u64> {
    parse_joined_race(input)?.winning_hold_times()
}
