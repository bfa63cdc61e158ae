//! Matching a separator-joined line of fields.

use std::borrow::Cow;

use super::field::parse_field;
use crate::cursor::Cursor;
use crate::document::Row;
use crate::error::Result;
use crate::grammar::Grammar;

/// Outcome of matching one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LineMatch<'a> {
    /// Neither a field nor a separator: there are no more rows
    Blank,
    /// A data row, possibly holding empty fields
    Row(Row<'a>),
}

/// Match zero or more separator-joined fields.
///
/// A separator always produces a field slot, so `,` yields two empty fields
/// while a line with no content at all is [`LineMatch::Blank`]. A broken
/// quoted field ends the line with its syntax error.
pub(crate) fn parse_line<'a>(
    grammar: &Grammar,
    cursor: &mut Cursor<'a>,
) -> Result<LineMatch<'a>> {
    let mut matched = true;
    let mut row: Row<'a> = match parse_field(grammar, cursor)? {
        Some(field) => vec![field],
        None => {
            matched = false;
            vec![Cow::Borrowed("")]
        },
    };

    while cursor.attempt(grammar.separator()).is_some() {
        matched = true;
        row.push(parse_field(grammar, cursor)?.unwrap_or(Cow::Borrowed("")));
    }

    Ok(if matched {
        LineMatch::Row(row)
    } else {
        LineMatch::Blank
    })
}
