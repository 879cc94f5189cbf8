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

//! Interned category names.
//!
//! Category names such as `seed` or `soil` are interned once while a chain is
//! built; everything after construction works with `CategoryId` values.

use rustc_hash::FxHashMap;
use yuletide_core::utils::index::{TypedIndex, TypedIndexTag};

/// A tag type for category identifiers.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct CategoryTag;

impl TypedIndexTag for CategoryTag {
    const NAME: &'static str = "CategoryId";
}

/// A typed identifier for an interned category name.
pub type CategoryId = TypedIndex<CategoryTag>;

/// An append-only interner mapping category names to `CategoryId`s.
#[derive(Debug, Clone, Default)]
pub struct Categories {
    names: Vec<String>,
    ids: FxHashMap<String, CategoryId>,
}

impl Categories {
    /// Creates an empty interner.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id of `name`, interning it on first use.
    pub fn intern(&mut self, name: &str) -> CategoryId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = CategoryId::new(self.names.len());
        self.names.push(name.to_owned());
        self.ids.insert(name.to_owned(), id);
        id
    }

    /// Returns the id of `name` if it has been interned.
    #[inline]
    pub fn get(&self, name: &str) -> Option<CategoryId> {
        self.ids.get(name).copied()
    }

    /// Returns the name behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this interner.
    #[inline]
    pub fn name(&self, id: CategoryId) -> &str {
        &self.names[id.get()]
    }

    /// Number of interned names.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if nothing has been interned.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
