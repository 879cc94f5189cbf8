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

//! Day 7: camel cards.
//!
//! A hand is ranked by its largest and second largest label counts, then by
//! its labels compared one by one in the order they were dealt.

use crate::error::{PuzzleError, Result};
use log::debug;
use yuletide_core::text::{lines, parse_integer};

const HAND_SIZE: usize = 5;

/// Label order and joker handling for one game variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Labels from strongest to weakest.
    pub labels: &'static str,
    /// A label that joins the most frequent other label and ranks lowest.
    pub joker: Option<char>,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            labels: "AKQJT98765432",
            joker: None,
        }
    }
}

impl Rules {
    /// The rules of part two: `J` is a joker and the weakest label.
    pub fn with_jokers() -> Self {
        Self {
            labels: "AKQT98765432J",
            joker: Some('J'),
        }
    }

    /// Strength of `label`, starting at 1 for the weakest.
    ///
    /// Labels beyond the 255 weakest have no strength.
    #[inline]
    fn strength(&self, label: char) -> Option<u8> {
        let weaker = self.labels.chars().rev().position(|l| l == label)?;
        u8::try_from(weaker + 1).ok()
    }
}

/// A hand reduced to what ranking needs, ordered weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct HandKey {
    largest: u8,
    second: u8,
    strengths: [u8; HAND_SIZE],
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Round {
    key: HandKey,
    bid: u64,
}

fn hand_key(cards: &str, rules: &Rules) -> Option<HandKey> {
    let mut strengths = [0u8; HAND_SIZE];
    // Indexed by strength, so every `u8` is a valid slot.
    let mut counts = [0u8; u8::MAX as usize + 1];
    let mut jokers = 0u8;
    let mut dealt = 0;

    for (slot, card) in cards.chars().enumerate() {
        if slot >= HAND_SIZE {
            return None;
        }
        let strength = rules.strength(card)?;
        strengths[slot] = strength;
        if rules.joker == Some(card) {
            jokers += 1;
        } else {
            counts[strength as usize] += 1;
        }
        dealt += 1;
    }
    if dealt != HAND_SIZE {
        return None;
    }

    counts.sort_unstable_by(|a, b| b.cmp(a));
    Some(HandKey {
        largest: counts[0] + jokers,
        second: counts[1],
        strengths,
    })
}

fn parse_round(line_no: usize, line: &str, rules: &Rules) -> Result<Round> {
    let mut tokens = line.split_whitespace();
    let (Some(cards), Some(bid), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(PuzzleError::malformed(line_no, "expected '<hand> <bid>'", line));
    };
    let key = hand_key(cards, rules)
        .ok_or_else(|| PuzzleError::malformed(line_no, "hand must be five known labels", line))?;
    Ok(Round {
        key,
        bid: parse_integer(bid)?,
    })
}

/// Total winnings: every bid multiplied by the rank of its hand.
pub fn total_winnings(input: &str, rules: &Rules) -> Result<u64> {
    let mut rounds = lines(input)
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(i, line)| parse_round(i + 1, line, rules))
        .collect::<Result<Vec<_>>>()?;
    rounds.sort_by_key(|round| round.key);
    debug!("ranked {} hands", rounds.len());

    rounds
        .iter()
        .zip(1u64..)
        .try_fold(0u64, |acc, (round, rank)| {
            round
                .bid
                .checked_mul(rank)
                .and_then(|winnings| acc.checked_add(winnings))
        })
        .ok_or(PuzzleError::Overflow)
}

/// Total winnings under the standard rules.
pub fn part_one(input: &str) -> Result<u64> {
    total_winnings(input, &Rules::default())
}

/// Total winnings with `J` as a joker.
pub fn part_two(input: &str) -> Result<u64> {
    total_winnings(input, &Rules::with_jokers())
}
