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

//! Day 2: the cube game.
//!
//! Lines look like `Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red`. Each
//! `;`-separated record is one handful of cubes drawn from a bag.

use crate::error::{PuzzleError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use yuletide_core::text::{capture_groups, lines, parse_integer};

static GAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Game (?<id>\d+):(?<records>.*)$").expect("valid game regex")
});

static COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?<red>\d+) red|(?<green>\d+) green|(?<blue>\d+) blue")
        .expect("valid color regex")
});

/// Cube counts per color, used both for a single handful and for a bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cubes {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl Cubes {
    /// `true` if every count fits into `bag`.
    #[inline]
    pub fn fits_into(&self, bag: &Cubes) -> bool {
        self.red <= bag.red && self.green <= bag.green && self.blue <= bag.blue
    }

    /// Per-color maximum of both counts.
    #[inline]
    pub fn max(self, other: Cubes) -> Cubes {
        Cubes {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    /// Product of the three counts, or `None` on overflow.
    #[inline]
    pub fn power(&self) -> Option<u64> {
        u64::from(self.red)
            .checked_mul(u64::from(self.green))?
            .checked_mul(u64::from(self.blue))
    }
}

/// The bag contents part one checks games against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bag(pub Cubes);

impl Default for Bag {
    fn default() -> Self {
        Self(Cubes {
            red: 12,
            green: 13,
            blue: 14,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: u64,
    pub handfuls: Vec<Cubes>,
}

impl Game {
    /// The fewest cubes of each color that make the game possible.
    pub fn minimum_bag(&self) -> Cubes {
        self.handfuls
            .iter()
            .fold(Cubes::default(), |acc, &handful| acc.max(handful))
    }
}

fn parse_handful(record: &str) -> Result<Cubes> {
    let groups = capture_groups(&COLOR, record)?;
    let count = |color: &str| -> Result<u32> {
        groups
            .get(color)
            .map_or(Ok(0), |token| parse_integer(token).map_err(PuzzleError::from))
    };
    Ok(Cubes {
        red: count("red")?,
        green: count("green")?,
        blue: count("blue")?,
    })
}

fn parse_game(line_no: usize, line: &str) -> Result<Game> {
    let caps = GAME
        .captures(line)
        .ok_or_else(|| PuzzleError::malformed(line_no, "expected 'Game <id>: ...'", line))?;
    let handfuls = caps["records"]
        .split(';')
        .map(parse_handful)
        .collect::<Result<Vec<_>>>()?;
    Ok(Game {
        id: parse_integer(&caps["id"])?,
        handfuls,
    })
}

/// Parses every non-empty line into a `Game`.
pub fn parse_games(input: &str) -> Result<Vec<Game>> {
    lines(input)
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(i, line)| parse_game(i + 1, line))
        .collect()
}

/// Sums the ids of the games possible with `bag`.
pub fn part_one_with(input: &str, bag: &Bag) -> Result<u64> {
    Ok(parse_games(input)?
        .iter()
        .filter(|game| game.handfuls.iter().all(|h| h.fits_into(&bag.0)))
        .map(|game| game.id)
        .sum())
}

/// Sums the ids of the games possible with the default bag.
pub fn part_one(input: &str) -> Result<u64> {
    part_one_with(input, &Bag::default())
}

/// Sums the power of the minimum bag of every game.
pub fn part_two(input: &str) -> Result<u64> {
    parse_games(input)?
        .iter()
        .try_fold(0u64, |acc, game| {
            game.minimum_bag()
                .power()
                .and_then(|power| acc.checked_add(power))
        })
        .ok_or(PuzzleError::Overflow)
}
