//! Parsed rectangular tables.

use std::borrow::Cow;
use std::ops::Index;

/// One cell's raw text.
///
/// Borrowed from the input buffer unless collapsing doubled quotes required
/// a rewrite.
pub type Field<'a> = Cow<'a, str>;

/// An ordered sequence of fields.
pub type Row<'a> = Vec<Field<'a>>;

/// A rectangular sequence of rows; every row has the same field count.
///
/// The first row, when present, is the header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document<'a> {
    rows: Vec<Row<'a>>,
}

impl<'a> Document<'a> {
    /// Wrap rows the parser has already checked for equal width.
    pub(crate) fn new(rows: Vec<Row<'a>>) -> Self {
        Document { rows }
    }

    pub fn rows(&self) -> &[Row<'a>] {
        &self.rows
    }

    /// Number of rows, header included.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Field count shared by every row, 0 for an empty document.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn header(&self) -> Option<&Row<'a>> {
        self.rows.first()
    }

    /// Row at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn row(&self, index: usize) -> &Row<'a> {
        &self.rows[index]
    }

    pub fn get(&self, index: usize) -> Option<&Row<'a>> {
        self.rows.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row<'a>> {
        self.rows.iter()
    }

    pub fn into_rows(self) -> Vec<Row<'a>> {
        self.rows
    }

    /// Copy every borrowed field so the document outlives the input buffer.
    pub fn into_owned(self) -> Document<'static> {
        let rows = self
            .rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|field| Cow::Owned(field.into_owned()))
                    .collect()
            })
            .collect();
        Document { rows }
    }
}

impl<'a> Index<usize> for Document<'a> {
    type Output = Row<'a>;

    fn index(&self, index: usize) -> &Self::Output {
        self.row(index)
    }
}

impl<'d, 'a> IntoIterator for &'d Document<'a> {
    type Item = &'d Row<'a>;
    type IntoIter = std::slice::Iter<'d, Row<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for Document<'a> {
    type Item = Row<'a>;
    type IntoIter = std::vec::IntoIter<Row<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}
