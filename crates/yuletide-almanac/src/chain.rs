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

//! # Stage Chains
//!
//! A `StageChain` links mapping stages by category: the stage for `seed`
//! maps to `soil`, the stage for `soil` maps to `fertilizer`, and so on until
//! a category without an outgoing stage is reached (the terminal category).
//!
//! Chains are only produced by `StageChainBuilder::build`, which verifies
//! that the categories form a simple path starting at the initial category:
//! every source appears once, no category repeats along the path, and every
//! stage is reachable. Resolution therefore always terminates after at most
//! `len()` stages.
//!
//! ```rust
//! use yuletide_almanac::chain::StageChainBuilder;
//! use yuletide_almanac::mapping::RangeMapping;
//! use yuletide_core::math::interval::Interval;
//!
//! let mut builder = StageChainBuilder::new("seed");
//! builder.add_stage("seed", "soil", vec![RangeMapping::new(0, 100, 10).unwrap()]);
//! let chain = builder.build().unwrap();
//!
//! assert_eq!(chain.resolve(Interval::new(5, 1)), vec![Interval::new(105, 1)]);
//! ```

use crate::{
    category::{Categories, CategoryId},
    mapping::RangeMapping,
    stage::MappingStage,
};
use log::{debug, trace};
use num_traits::PrimInt;
use rustc_hash::{FxHashMap, FxHashSet};
use yuletide_core::math::interval::{Interval, IntervalError};

/// The error type for chain construction and queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    /// Two stages share the same source category.
    #[error("category '{category}' has more than one outgoing stage")]
    DuplicateSource { category: String },
    /// Following destinations from the initial category revisits a category.
    #[error("category '{category}' is revisited; stage chain contains a cycle")]
    Cycle { category: String },
    /// A stage cannot be reached from the initial category.
    #[error("stage '{source_category}-to-{destination}' is unreachable from '{initial}'")]
    Unreachable {
        initial: String,
        source_category: String,
        destination: String,
    },
    /// A stage has no range mappings.
    #[error("stage '{source_category}-to-{destination}' has no range mappings")]
    EmptyStage {
        source_category: String,
        destination: String,
    },
    /// Two range mappings of one stage overlap and overlaps are rejected.
    #[error(
        "stage '{source_category}-to-{destination}': range mappings {first} and {second} overlap"
    )]
    OverlappingMappings {
        source_category: String,
        destination: String,
        first: usize,
        second: usize,
    },
    /// A query interval is invalid.
    #[error("invalid query interval: {0}")]
    InvalidInterval(#[from] IntervalError),
}

/// A validated chain of mapping stages.
#[derive(Debug, Clone)]
pub struct StageChain<T>
where
    T: PrimInt,
{
    categories: Categories,
    initial: CategoryId,
    stages: Vec<MappingStage<T>>,
    by_source: FxHashMap<CategoryId, usize>,
}

impl<T> StageChain<T>
where
    T: PrimInt,
{
    /// The interned category names.
    #[inline]
    pub fn categories(&self) -> &Categories {
        &self.categories
    }

    /// The category resolution starts from.
    #[inline]
    pub fn initial_category(&self) -> CategoryId {
        self.initial
    }

    /// The stages in path order.
    #[inline]
    pub fn stages(&self) -> &[MappingStage<T>] {
        &self.stages
    }

    /// Number of stages.
    #[inline]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns `true` if the chain has no stages.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Returns the stage mapping out of `category`, if any.
    #[inline]
    pub fn stage_for(&self, category: CategoryId) -> Option<&MappingStage<T>> {
        self.by_source.get(&category).map(|&i| &self.stages[i])
    }

    /// Returns the category that has no outgoing stage.
    #[inline]
    pub fn terminal_category(&self) -> CategoryId {
        self.stages
            .last()
            .map_or(self.initial, MappingStage::destination)
    }

    /// Returns the category names from initial to terminal.
    pub fn path(&self) -> Vec<&str> {
        std::iter::once(self.initial)
            .chain(self.stages.iter().map(MappingStage::destination))
            .map(|id| self.categories.name(id))
            .collect()
    }

    /// Resolves `interval` from the initial category to the terminal one.
    ///
    /// The result is ascending and merged.
    pub fn resolve(&self, interval: Interval<T>) -> Vec<Interval<T>> {
        let mut working = vec![interval];
        let mut current = self.initial;
        let mut steps = 0usize;

        while let Some(stage) = self.stage_for(current) {
            working = stage.resolve(&working);
            current = stage.destination();
            steps += 1;
            debug_assert!(steps <= self.stages.len(), "stage chain did not terminate");
        }

        trace!(
            "resolved through {} stages into {} intervals ending at '{}'",
            steps,
            working.len(),
            self.categories.name(current)
        );
        working
    }

    /// Resolves the interval `[start, start + length - 1]`.
    ///
    /// # Errors
    ///
    /// Returns `ChainError::InvalidInterval` if `length` is not positive or
    /// the interval end overflows `T`.
    pub fn resolve_range(&self, start: T, length: T) -> Result<Vec<Interval<T>>, ChainError> {
        let interval = Interval::try_new(start, length)?;
        Ok(self.resolve(interval))
    }

    /// Maps a single value to the terminal category.
    pub fn resolve_point(&self, value: T) -> T {
        self.stages
            .iter()
            .fold(value, |acc, stage| stage.map_point(acc))
    }
}

/// Collects stages by category name and validates them into a `StageChain`.
#[derive(Debug, Clone)]
pub struct StageChainBuilder<T>
where
    T: PrimInt,
{
    categories: Categories,
    initial: CategoryId,
    stages: Vec<MappingStage<T>>,
    reject_overlapping_mappings: bool,
}

impl<T> StageChainBuilder<T>
where
    T: PrimInt,
{
    /// Creates a builder whose chains start at `initial_category`.
    pub fn new(initial_category: &str) -> Self {
        let mut categories = Categories::new();
        let initial = categories.intern(initial_category);
        Self {
            categories,
            initial,
            stages: Vec::new(),
            reject_overlapping_mappings: false,
        }
    }

    /// Configures whether stages with overlapping range mappings fail to
    /// build. When disabled, earlier mappings take precedence.
    #[inline]
    pub fn reject_overlapping_mappings(mut self, yes: bool) -> Self {
        self.reject_overlapping_mappings = yes;
        self
    }

    /// Appends a stage from `source` to `destination`.
    pub fn add_stage(
        &mut self,
        source: &str,
        destination: &str,
        mappings: Vec<RangeMapping<T>>,
    ) -> &mut Self {
        let source = self.categories.intern(source);
        let destination = self.categories.intern(destination);
        self.stages
            .push(MappingStage::new(source, destination, mappings));
        self
    }

    /// Number of stages added so far.
    #[inline]
    pub fn num_stages(&self) -> usize {
        self.stages.len()
    }

    /// Validates the category graph and builds the chain.
    ///
    /// # Errors
    ///
    /// See [`ChainError`] for the rejected shapes.
    pub fn build(self) -> Result<StageChain<T>, ChainError> {
        let name = |id: CategoryId| self.categories.name(id).to_owned();

        let mut by_source: FxHashMap<CategoryId, usize> = FxHashMap::default();
        for (i, stage) in self.stages.iter().enumerate() {
            if stage.mappings().is_empty() {
                return Err(ChainError::EmptyStage {
                    source_category: name(stage.source()),
                    destination: name(stage.destination()),
                });
            }
            if self.reject_overlapping_mappings
                && let Some((first, second)) = stage.find_overlap()
            {
                return Err(ChainError::OverlappingMappings {
                    source_category: name(stage.source()),
                    destination: name(stage.destination()),
                    first,
                    second,
                });
            }
            if by_source.insert(stage.source(), i).is_some() {
                return Err(ChainError::DuplicateSource {
                    category: name(stage.source()),
                });
            }
        }

        // Walk the path from the initial category.
        let mut visited: FxHashSet<CategoryId> = FxHashSet::default();
        let mut order: Vec<usize> = Vec::with_capacity(self.stages.len());
        let mut current = self.initial;
        visited.insert(current);
        while let Some(&i) = by_source.get(&current) {
            let next = self.stages[i].destination();
            if !visited.insert(next) {
                return Err(ChainError::Cycle {
                    category: name(next),
                });
            }
            order.push(i);
            current = next;
        }

        if let Some(stranded) = (0..self.stages.len()).find(|i| !order.contains(i)) {
            let stage = &self.stages[stranded];
            return Err(ChainError::Unreachable {
                initial: name(self.initial),
                source_category: name(stage.source()),
                destination: name(stage.destination()),
            });
        }

        let mut slots: Vec<Option<MappingStage<T>>> = self.stages.into_iter().map(Some).collect();
        let stages: Vec<MappingStage<T>> = order
            .iter()
            .filter_map(|&i| slots[i].take())
            .collect();
        let by_source: FxHashMap<CategoryId, usize> = stages
            .iter()
            .enumerate()
            .map(|(i, stage)| (stage.source(), i))
            .collect();

        let chain = StageChain {
            categories: self.categories,
            initial: self.initial,
            stages,
            by_source,
        };
        debug!("built stage chain: {}", chain.path().join(" -> "));
        Ok(chain)
    }
}
