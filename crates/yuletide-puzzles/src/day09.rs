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

//! Day 9: mirage maintenance.

use crate::error::{PuzzleError, Result};
use yuletide_core::text::{lines, parse_integers};

/// Predicts the value following `history` by summing the last value of
/// every difference row until a row is all zeros.
pub fn extrapolate(history: &[i64]) -> Result<i64> {
    let mut row = history.to_vec();
    let mut prediction = 0i64;

    while row.iter().any(|&v| v != 0) {
        if let Some(&last) = row.last() {
            prediction = prediction.checked_add(last).ok_or(PuzzleError::Overflow)?;
        }
        row = row
            .windows(2)
            .map(|pair| pair[1].checked_sub(pair[0]))
            .collect::<Option<Vec<_>>>()
            .ok_or(PuzzleError::Overflow)?;
    }
    Ok(prediction)
}

fn histories(input: &str) -> Result<Vec<Vec<i64>>> {
    lines(input)
        .filter(|line| !line.is_empty())
        .map(|line| parse_integers(line).map_err(PuzzleError::from))
        .collect()
}

fn sum_predictions<'a, I>(histories: I) -> Result<i64>
where
    I: IntoIterator<Item = &'a [i64]>,
{
    histories.into_iter().try_fold(0i64, |acc, history| -> Result<i64> {
        acc.checked_add(extrapolate(history)?)
            .ok_or(PuzzleError::Overflow)
    })
}

/// Sums the predicted next values.
pub fn part_one(input: &str) -> Result<i64> {
    let histories = histories(input)?;
    sum_predictions(histories.iter().map(Vec::as_slice))
}

/// Sums the predicted previous values.
pub fn part_two(input: &str) -> Result<i64> {
    let reversed: Vec<Vec<i64>> = histories(input)?
        .into_iter()
        .map(|mut h| {
            h.reverse();
            h
        })
        .collect();
    sum_predictions(reversed.iter().map(Vec::as_slice))
}
