//! Matching a whole document of rows.

use tracing::trace;

use super::line::{LineMatch, parse_line};
use crate::cursor::Cursor;
use crate::document::{Document, Row};
use crate::error::{Error, Result};
use crate::grammar::Grammar;
use crate::validation::ValidationOptions;

/// Match rows until the input is exhausted.
///
/// The first row fixes the width every later row must have and is checked
/// against `validation` as soon as it is read. Blank lines after the last row
/// and a trailing run of line breaks and spaces are tolerated; anything else
/// left over is a syntax error at the first unconsumed character.
pub(crate) fn parse_document<'a>(
    grammar: &Grammar,
    validation: &ValidationOptions,
    cursor: &mut Cursor<'a>,
) -> Result<Document<'a>> {
    let mut rows: Vec<Row<'a>> = Vec::new();

    if let LineMatch::Row(header) = parse_line(grammar, cursor)? {
        validation.validate_header(&header)?;
        let width = header.len();
        rows.push(header);

        while cursor.attempt(grammar.end_of_line()).is_some() {
            let LineMatch::Row(row) = parse_line(grammar, cursor)? else {
                break;
            };
            if row.len() != width {
                return Err(Error::UnevenRowWidth {
                    row: rows.len(),
                    expected: width,
                    found: row.len(),
                });
            }
            trace!(row = rows.len(), offset = cursor.offset(), "matched row");
            rows.push(row);
        }
    }

    check_rectangular(&rows)?;

    cursor.attempt(grammar.trailing_skip());
    if !cursor.is_at_end() {
        return Err(Error::Syntax(cursor.position()));
    }
    Ok(Document::new(rows))
}

/// Every row must have the header's width.
fn check_rectangular(rows: &[Row<'_>]) -> Result<()> {
    let expected = rows.first().map_or(0, Vec::len);
    match rows.iter().position(|row| row.len() != expected) {
        Some(index) => Err(Error::UnevenRowWidth {
            row: index,
            expected,
            found: rows[index].len(),
        }),
        None => Ok(()),
    }
}
