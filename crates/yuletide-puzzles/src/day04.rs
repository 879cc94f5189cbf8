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

//! Day 4: scratchcards.

use crate::error::{PuzzleError, Result};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;
use yuletide_core::text::{lines, parse_integers};

static CARD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Card\s+\d+:(?<winning>[0-9 ]*)\|(?<have>[0-9 ]*)$").expect("valid card regex")
});

/// Number of matching numbers on each card, in card order.
fn parse_matches(input: &str) -> Result<Vec<usize>> {
    lines(input)
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(i, line)| -> Result<usize> {
            let caps = CARD.captures(line).ok_or_else(|| {
                PuzzleError::malformed(i + 1, "expected 'Card <n>: <winning> | <have>'", line)
            })?;
            let winning: FxHashSet<u32> = parse_integers(&caps["winning"])?.into_iter().collect();
            let have: Vec<u32> = parse_integers(&caps["have"])?;
            Ok(have.iter().filter(|&n| winning.contains(n)).count())
        })
        .collect()
}

/// Sums the card scores, doubling for every match after the first.
pub fn part_one(input: &str) -> Result<u64> {
    parse_matches(input)?
        .into_iter()
        .filter(|&m| m > 0)
        .map(|m| {
            u32::try_from(m - 1)
                .ok()
                .and_then(|shift| 1u64.checked_shl(shift))
                .ok_or(PuzzleError::Overflow)
        })
        .sum()
}

/// Counts all cards after every card wins copies of the cards following it.
pub fn part_two(input: &str) -> Result<u64> {
    let matches = parse_matches(input)?;
    let mut copies = vec![1u64; matches.len()];

    for (i, &m) in matches.iter().enumerate() {
        let won = copies[i];
        let last = (i + m).min(matches.len() - 1);
        for count in &mut copies[i + 1..=last] {
            *count = count.checked_add(won).ok_or(PuzzleError::Overflow)?;
        }
    }

    let total = copies
        .into_iter()
        .try_fold(0u64, |acc, c| acc.checked_add(c))
        .ok_or(PuzzleError::Overflow)?;
    debug!("scratchcards: {} originals, {} in total", matches.len(), total);
    Ok(total)
}
