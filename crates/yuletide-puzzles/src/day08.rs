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

//! Day 8: the haunted wasteland.
//!
//! A network of nodes, each with a left and a right successor, is walked by
//! repeating a fixed `L`/`R` instruction list. Node names are interned so
//! walking is index arithmetic only.

use crate::error::{PuzzleError, Result};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashMap;
use yuletide_core::{num::lcm_all, text::lines};

static NODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?<node>[A-Z0-9]{3}) = \((?<left>[A-Z0-9]{3}), (?<right>[A-Z0-9]{3})\)$")
        .expect("valid node regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Which nodes a walk starts from and which ones end it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoints {
    pub start_suffix: char,
    pub end_suffix: char,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            start_suffix: 'A',
            end_suffix: 'Z',
        }
    }
}

impl Endpoints {
    #[inline]
    pub fn is_start(&self, name: &str) -> bool {
        name.ends_with(self.start_suffix)
    }

    #[inline]
    pub fn is_end(&self, name: &str) -> bool {
        name.ends_with(self.end_suffix)
    }
}

#[derive(Debug, Clone)]
pub struct Network {
    instructions: Vec<Direction>,
    names: Vec<String>,
    ids: FxHashMap<String, usize>,
    /// `(left, right)` successor of every node.
    next: Vec<(usize, usize)>,
}

impl Network {
    /// Parses the instruction line followed by the node definitions.
    ///
    /// # Errors
    ///
    /// Fails on malformed lines, duplicate node definitions and references
    /// to nodes that are never defined.
    pub fn parse(input: &str) -> Result<Self> {
        let mut rows = lines(input).enumerate().filter(|(_, l)| !l.is_empty());

        let (first_no, first) = rows.next().ok_or(PuzzleError::EmptyInput)?;
        let instructions = first
            .chars()
            .map(|c| match c {
                'L' => Some(Direction::Left),
                'R' => Some(Direction::Right),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| PuzzleError::malformed(first_no + 1, "instructions must be 'L' or 'R'", first))?;

        let mut edges: Vec<(usize, [&str; 3])> = Vec::new();
        for (i, line) in rows {
            let caps = NODE.captures(line).ok_or_else(|| {
                PuzzleError::malformed(i + 1, "expected 'AAA = (BBB, CCC)'", line)
            })?;
            let (_, names) = caps.extract();
            edges.push((i + 1, names));
        }

        let mut ids: FxHashMap<String, usize> = FxHashMap::default();
        let mut names = Vec::with_capacity(edges.len());
        for &(line, [node, _, _]) in &edges {
            if ids.insert(node.to_owned(), names.len()).is_some() {
                return Err(PuzzleError::malformed(line, "node defined twice", node));
            }
            names.push(node.to_owned());
        }

        let lookup = |name: &str| {
            ids.get(name)
                .copied()
                .ok_or_else(|| PuzzleError::UnknownNode(name.to_owned()))
        };
        let next = edges
            .iter()
            .map(|&(_, [_, left, right])| -> Result<(usize, usize)> {
                Ok((lookup(left)?, lookup(right)?))
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "network with {} nodes and {} instructions",
            names.len(),
            instructions.len()
        );
        Ok(Self {
            instructions,
            names,
            ids,
            next,
        })
    }

    #[inline]
    pub fn instructions(&self) -> &[Direction] {
        &self.instructions
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.names.len()
    }

    /// Counts the steps from `start` until a node matching `is_end` is
    /// entered. At least one step is always taken.
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::UnknownNode` for an undefined `start` and
    /// `PuzzleError::EndUnreachable` when the walk cycles without ending.
    pub fn steps<F>(&self, start: &str, is_end: F) -> Result<u64>
    where
        F: Fn(&str) -> bool,
    {
        let mut node = *self
            .ids
            .get(start)
            .ok_or_else(|| PuzzleError::UnknownNode(start.to_owned()))?;

        // After this many steps some (node, instruction) state has repeated.
        let limit = self.names.len() * self.instructions.len();
        for (step, direction) in self.instructions.iter().cycle().enumerate().take(limit) {
            let (left, right) = self.next[node];
            node = match direction {
                Direction::Left => left,
                Direction::Right => right,
            };
            if is_end(&self.names[node]) {
                return Ok(step as u64 + 1);
            }
        }
        Err(PuzzleError::EndUnreachable(start.to_owned()))
    }
}

/// Steps from `AAA` to `ZZZ`.
pub fn part_one(input: &str) -> Result<u64> {
    Network::parse(input)?.steps("AAA", |name| name == "ZZZ")
}

/// Steps until every walk from a start node stands on an end node at once.
pub fn part_two_with(input: &str, endpoints: &Endpoints) -> Result<u64> {
    let network = Network::parse(input)?;
    let cycles = network
        .names
        .iter()
        .filter(|name| endpoints.is_start(name))
        .map(|name| -> Result<u64> {
            let steps = network.steps(name, |n| endpoints.is_end(n))?;
            debug!("walk from '{}' ends after {} steps", name, steps);
            Ok(steps)
        })
        .collect::<Result<Vec<u64>>>()?;

    if cycles.is_empty() {
        return Err(PuzzleError::EmptyInput);
    }
    lcm_all(cycles).ok_or(PuzzleError::Overflow)
}

/// Steps until every `..A` walk stands on a `..Z` node at once.
pub fn part_two(input: &str) -> Result<u64> {
    part_two_with(input, &Endpoints::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_part_one_examples() {
        let direct = indoc! {"
            RL

            AAA = (BBB, CCC)
            BBB = (DDD, EEE)
            CCC = (ZZZ, GGG)
            DDD = (DDD, DDD)
            EEE = (EEE, EEE)
            GGG = (GGG, GGG)
            ZZZ = (ZZZ, ZZZ)
        "};
        assert_eq!(part_one(direct).unwrap(), 2);

        let repeating = indoc! {"
            LLR

            AAA = (BBB, BBB)
            BBB = (AAA, ZZZ)
            ZZZ = (ZZZ, ZZZ)
        "};
        assert_eq!(part_one(repeating).unwrap(), 6);
    }

    #[test]
    fn test_part_two_example() {
        let input = indoc! {"
            LR

            11A = (11B, XXX)
            11B = (XXX, 11Z)
            11Z = (11B, XXX)
            22A = (22B, XXX)
            22B = (22C, 22C)
            22C = (22Z, 22Z)
            22Z = (22B, 22B)
            XXX = (XXX, XXX)
        "};
        assert_eq!(part_two(input).unwrap(), 6);
    }

    #[test]
    fn test_unknown_reference() {
        let err = part_one("L\nAAA = (ZZZ, QQQ)\nZZZ = (ZZZ, ZZZ)").unwrap_err();
        assert!(matches!(err, PuzzleError::UnknownNode(ref n) if n == "QQQ"));
    }

    #[test]
    fn test_missing_start() {
        let err = part_one("L\nBBB = (ZZZ, ZZZ)\nZZZ = (ZZZ, ZZZ)").unwrap_err();
        assert!(matches!(err, PuzzleError::UnknownNode(ref n) if n == "AAA"));
    }

    #[test]
    fn test_unreachable_end() {
        let err = part_one("LR\nAAA = (BBB, BBB)\nBBB = (AAA, AAA)\nZZZ = (ZZZ, ZZZ)").unwrap_err();
        assert!(matches!(err, PuzzleError::EndUnreachable(ref n) if n == "AAA"));
    }

    #[test]
    fn test_duplicate_node() {
        let err = part_one("L\nAAA = (ZZZ, ZZZ)\nAAA = (AAA, AAA)\nZZZ = (ZZZ, ZZZ)").unwrap_err();
        assert!(matches!(err, PuzzleError::Malformed { line: 3, .. }));
    }

    #[test]
    fn test_invalid_instruction() {
        let err = part_one("LX\nAAA = (ZZZ, ZZZ)").unwrap_err();
        assert!(matches!(err, PuzzleError::Malformed { line: 1, .. }));
    }

    #[test]
    fn test_custom_endpoints() {
        let input = "L\n11S = (11E, 11E)\n11E = (11E, 11E)";
        let endpoints = Endpoints {
            start_suffix: 'S',
            end_suffix: 'E',
        };
        assert_eq!(part_two_with(input, &endpoints).unwrap(), 1);
    }
}
