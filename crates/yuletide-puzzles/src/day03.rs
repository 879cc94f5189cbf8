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

//! Day 3: the engine schematic.

use crate::error::{PuzzleError, Result};
use yuletide_core::text::{lines, parse_integer};

const EMPTY: u8 = b'.';
const GEAR: u8 = b'*';

/// A number printed horizontally in the schematic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartNumber {
    pub row: usize,
    pub col: usize,
    pub len: usize,
    pub value: u64,
}

impl PartNumber {
    /// `true` if `(row, col)` touches the number, diagonals included.
    #[inline]
    pub fn is_adjacent_to(&self, row: usize, col: usize) -> bool {
        row + 1 >= self.row
            && row <= self.row + 1
            && col + 1 >= self.col
            && col <= self.col + self.len
    }
}

#[derive(Debug, Clone)]
pub struct Schematic {
    rows: Vec<Vec<u8>>,
    numbers: Vec<PartNumber>,
}

#[inline]
fn is_symbol(cell: u8) -> bool {
    cell != EMPTY && !cell.is_ascii_digit()
}

impl Schematic {
    /// Parses the grid and locates every number in it.
    pub fn parse(input: &str) -> Result<Self> {
        let rows: Vec<Vec<u8>> = lines(input).map(|l| l.as_bytes().to_vec()).collect();

        let mut numbers = Vec::new();
        for (row, cells) in rows.iter().enumerate() {
            let mut col = 0;
            while col < cells.len() {
                if !cells[col].is_ascii_digit() {
                    col += 1;
                    continue;
                }
                let start = col;
                while col < cells.len() && cells[col].is_ascii_digit() {
                    col += 1;
                }
                let token = std::str::from_utf8(&cells[start..col]).unwrap_or_default();
                numbers.push(PartNumber {
                    row,
                    col: start,
                    len: col - start,
                    value: parse_integer(token)?,
                });
            }
        }

        Ok(Self { rows, numbers })
    }

    #[inline]
    pub fn numbers(&self) -> &[PartNumber] {
        &self.numbers
    }

    /// The cell at `(row, col)`; anything outside the grid reads as empty.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> u8 {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(EMPTY)
    }

    /// `true` if any symbol surrounds `number`.
    pub fn touches_symbol(&self, number: &PartNumber) -> bool {
        let rows = number.row.saturating_sub(1)..=number.row + 1;
        rows.flat_map(|r| {
            (number.col.saturating_sub(1)..=number.col + number.len).map(move |c| (r, c))
        })
        .any(|(r, c)| is_symbol(self.cell(r, c)))
    }

    /// Positions of every `*` cell.
    pub fn gears(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|&(_, &cell)| cell == GEAR)
                .map(move |(c, _)| (r, c))
        })
    }
}

/// Sums every number adjacent to a symbol.
pub fn part_one(input: &str) -> Result<u64> {
    let schematic = Schematic::parse(input)?;
    schematic
        .numbers()
        .iter()
        .filter(|n| schematic.touches_symbol(n))
        .try_fold(0u64, |acc, n| acc.checked_add(n.value))
        .ok_or(PuzzleError::Overflow)
}

/// Sums the gear ratios of every `*` adjacent to exactly two numbers.
pub fn part_two(input: &str) -> Result<u64> {
    let schematic = Schematic::parse(input)?;
    schematic
        .gears()
        .filter_map(|(r, c)| {
            let mut adjacent = schematic.numbers().iter().filter(|n| n.is_adjacent_to(r, c));
            match (adjacent.next(), adjacent.next(), adjacent.next()) {
                (Some(a), Some(b), None) => Some(a.value.checked_mul(b.value)),
                _ => None,
            }
        })
        .try_fold(0u64, |acc, ratio| ratio.and_then(|ratio| acc.checked_add(ratio)))
        .ok_or(PuzzleError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        467..114..
        ...*......
        ..35..633.
        ......#...
        617*......
        .....+.58.
        ..592.....
        ......755.
        ...$.*....
        .664.598..
    "};

    #[test]
    fn test_part_one_example() {
        assert_eq!(part_one(EXAMPLE).unwrap(), 4361);
    }

    #[test]
    fn test_part_two_example() {
        assert_eq!(part_two(EXAMPLE).unwrap(), 467835);
    }

    #[test]
    fn test_numbers_are_located() {
        let schematic = Schematic::parse("467..114..\n...*......").unwrap();
        assert_eq!(
            schematic.numbers(),
            &[
                PartNumber { row: 0, col: 0, len: 3, value: 467 },
                PartNumber { row: 0, col: 5, len: 3, value: 114 },
            ]
        );
        assert!(schematic.touches_symbol(&schematic.numbers()[0]));
        assert!(!schematic.touches_symbol(&schematic.numbers()[1]));
    }

    #[test]
    fn test_number_at_line_end() {
        assert_eq!(part_one("...#\n..12").unwrap(), 12);
        assert_eq!(part_one("12..\n..+.").unwrap(), 12);
        assert_eq!(part_one("12..\n...+").unwrap(), 0);
    }

    #[test]
    fn test_gear_with_three_numbers_is_ignored() {
        assert_eq!(part_two("1.2\n.*.\n..3").unwrap(), 0);
        assert_eq!(part_two("1.2\n.*.").unwrap(), 2);
    }

    #[test]
    fn test_gear_ratio_overflow() {
        let err = part_two("18446744073709551615*2").unwrap_err();
        assert!(matches!(err, PuzzleError::Overflow));
    }
}
