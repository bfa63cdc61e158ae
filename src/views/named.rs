//! Lookup of cells by row index and column name.

use std::collections::HashMap;

use super::header_index;
use crate::document::{Document, Row};

/// A document with its header names indexed.
///
/// When the header repeats a name, lookups resolve to its last column.
#[derive(Debug, Clone)]
pub struct NamedCells<'d, 'a> {
    document: &'d Document<'a>,
    columns: HashMap<&'d str, usize>,
}

impl<'d, 'a> NamedCells<'d, 'a> {
    pub fn new(document: &'d Document<'a>) -> Self {
        NamedCells {
            document,
            columns: header_index(document),
        }
    }

    /// Cell in row `row` under column `name`.
    ///
    /// Returns `None` for an unknown column. Row 0 is the header row.
    ///
    /// # Panics
    ///
    /// Panics if the name is known and `row` is out of bounds.
    pub fn get(&self, row: usize, name: &str) -> Option<&'d str> {
        let column = *self.columns.get(name)?;
        Some(&*self.document.row(row)[column])
    }

    /// Row `index` with name-based access.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn row(&self, index: usize) -> NamedRow<'_, 'd, 'a> {
        NamedRow {
            columns: &self.columns,
            row: self.document.row(index),
        }
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.get(name).copied()
    }

    pub fn document(&self) -> &'d Document<'a> {
        self.document
    }

    pub fn len(&self) -> usize {
        self.document.len()
    }

    pub fn is_empty(&self) -> bool {
        self.document.is_empty()
    }
}

/// One row of a [`NamedCells`] view.
#[derive(Debug, Clone, Copy)]
pub struct NamedRow<'v, 'd, 'a> {
    columns: &'v HashMap<&'d str, usize>,
    row: &'d Row<'a>,
}

impl<'v, 'd, 'a> NamedRow<'v, 'd, 'a> {
    pub fn get(&self, name: &str) -> Option<&'d str> {
        let column = *self.columns.get(name)?;
        Some(&*self.row[column])
    }

    /// Fields in document order.
    pub fn fields(&self) -> &'d Row<'a> {
        self.row
    }
}
