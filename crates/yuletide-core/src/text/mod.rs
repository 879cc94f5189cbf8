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

//! # Text Parsing Helpers
//!
//! Small, strict building blocks for reading puzzle inputs: trimmed lines,
//! separated integer lists, and named regex captures. Every helper reports
//! the offending token instead of silently skipping it.

use regex::Regex;
use rustc_hash::FxHashMap;
use std::str::FromStr;

/// A token could not be parsed as an integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("could not parse token '{token}' as {type_name}")]
pub struct ParseIntegerError {
    /// The string token that failed to parse.
    pub token: String,
    /// The name of the type we tried to parse into (e.g., "i64").
    pub type_name: &'static str,
}

/// A named group was captured more than once across matches.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("capture group '{group}' matched more than once")]
pub struct CaptureError {
    /// The name of the duplicated group.
    pub group: String,
}

/// Returns the lines of `input` with surrounding whitespace removed.
///
/// The input as a whole is trimmed first, so a trailing newline does not
/// produce an empty last line.
///
/// ```rust
/// # use yuletide_core::text::lines;
/// let v: Vec<_> = lines("  a \n b\n\n").collect();
/// assert_eq!(v, vec!["a", "b"]);
/// ```
pub fn lines(input: &str) -> impl Iterator<Item = &str> {
    input.trim().lines().map(str::trim)
}

/// Parses a single integer token.
pub fn parse_integer<T>(token: &str) -> Result<T, ParseIntegerError>
where
    T: FromStr,
{
    token.parse::<T>().map_err(|_| ParseIntegerError {
        token: token.to_owned(),
        type_name: std::any::type_name::<T>(),
    })
}

/// Parses whitespace-separated integers.
///
/// ```rust
/// # use yuletide_core::text::parse_integers;
/// assert_eq!(parse_integers::<i64>(" 1  -2 3 ").unwrap(), vec![1, -2, 3]);
/// assert!(parse_integers::<i64>("1 x").is_err());
/// ```
pub fn parse_integers<T>(text: &str) -> Result<Vec<T>, ParseIntegerError>
where
    T: FromStr,
{
    text.split_whitespace().map(parse_integer).collect()
}

/// Parses integers separated by `separator`; surrounding whitespace of
/// every token is ignored.
///
/// ```rust
/// # use yuletide_core::text::parse_integers_by;
/// assert_eq!(parse_integers_by::<u32>("3, 4,5", ',').unwrap(), vec![3, 4, 5]);
/// ```
pub fn parse_integers_by<T>(text: &str, separator: char) -> Result<Vec<T>, ParseIntegerError>
where
    T: FromStr,
{
    text.trim()
        .split(separator)
        .map(|token| parse_integer(token.trim()))
        .collect()
}

/// Collects every non-empty named group over all matches of `regex`.
///
/// Alternations with distinct group names can therefore be used to pick
/// several labelled values out of one line. A group that captures twice is
/// an error.
///
/// ```rust
/// # use regex::Regex;
/// # use yuletide_core::text::capture_groups;
/// let re = Regex::new(r"(?<red>\d+) red|(?<blue>\d+) blue").unwrap();
/// let groups = capture_groups(&re, "3 blue, 4 red").unwrap();
/// assert_eq!(groups["red"], "4");
/// assert_eq!(groups["blue"], "3");
/// ```
pub fn capture_groups<'r, 't>(
    regex: &'r Regex,
    text: &'t str,
) -> Result<FxHashMap<&'r str, &'t str>, CaptureError> {
    let mut result = FxHashMap::default();
    for caps in regex.captures_iter(text) {
        for name in regex.capture_names().flatten() {
            let Some(m) = caps.name(name) else {
                continue;
            };
            if m.as_str().is_empty() {
                continue;
            }
            if result.insert(name, m.as_str()).is_some() {
                return Err(CaptureError {
                    group: name.to_owned(),
                });
            }
        }
    }
    Ok(result)
}
