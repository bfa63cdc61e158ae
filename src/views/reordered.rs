//! Rows presented in a caller-declared column order.

use std::ops::Index;

use super::header_index;
use crate::document::{Document, Field};
use crate::error::{Error, Result};

/// A document whose columns are read through a fixed permutation.
///
/// Position `i` of every row view is the underlying column `order[i]`; rows
/// are never copied.
#[derive(Debug, Clone)]
pub struct Reordered<'d, 'a> {
    document: &'d Document<'a>,
    order: Vec<usize>,
}

impl<'d, 'a> Reordered<'d, 'a> {
    /// Resolve `names` against the header row.
    ///
    /// Every declared name must appear in the header, otherwise
    /// [`Error::MissingColumns`] lists the absent ones. The declared list may
    /// name fewer columns than the header has.
    pub fn new<S: AsRef<str>>(document: &'d Document<'a>, names: &[S]) -> Result<Self> {
        let columns = header_index(document);
        let mut order = Vec::with_capacity(names.len());
        let mut missing: Vec<String> = Vec::new();
        for name in names {
            let name: &str = name.as_ref();
            match columns.get(name) {
                Some(&column) => order.push(column),
                None if !missing.iter().any(|m| m == name) => missing.push(name.to_string()),
                None => {},
            }
        }
        if !missing.is_empty() {
            return Err(Error::MissingColumns(missing));
        }
        Ok(Reordered { document, order })
    }

    /// Underlying column for each declared position.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Row `index` in declared column order.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn row(&self, index: usize) -> ReorderedRow<'_, Field<'a>> {
        ReorderedRow::new(self.document.row(index), &self.order)
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = ReorderedRow<'_, Field<'a>>> + '_ {
        self.document
            .iter()
            .map(|row| ReorderedRow::new(row, &self.order))
    }

    pub fn len(&self) -> usize {
        self.document.len()
    }

    pub fn is_empty(&self) -> bool {
        self.document.is_empty()
    }
}

/// A slice read through a permutation of its indices.
#[derive(Debug)]
pub struct ReorderedRow<'r, T> {
    base: &'r [T],
    order: &'r [usize],
}

impl<T> Clone for ReorderedRow<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ReorderedRow<'_, T> {}

impl<'r, T> ReorderedRow<'r, T> {
    /// View `base` so that position `i` reads `base[order[i]]`.
    pub fn new(base: &'r [T], order: &'r [usize]) -> Self {
        debug_assert!(order.iter().all(|&i| i < base.len()));
        ReorderedRow { base, order }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'r T> {
        self.order.get(index).map(|&column| &self.base[column])
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &'r T> + use<'r, T> {
        let base = self.base;
        self.order.iter().map(move |&column| &base[column])
    }
}

impl<T> Index<usize> for ReorderedRow<'_, T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.base[self.order[index]]
    }
}
