//! Matching a single field.

use std::borrow::Cow;

use crate::cursor::Cursor;
use crate::document::Field;
use crate::error::{Error, Result};
use crate::grammar::Grammar;

/// Match one field at the cursor.
///
/// Returns `Ok(None)` when neither an unquoted run nor a quote starts here.
/// A present field may still be empty (`""`). A quoted field that does not
/// close is a syntax error at the character that stopped its content, or at
/// the opening quote when the content runs to the end of the input.
pub(crate) fn parse_field<'a>(
    grammar: &Grammar,
    cursor: &mut Cursor<'a>,
) -> Result<Option<Field<'a>>> {
    if let Some(text) = cursor.attempt(grammar.unescaped_content()) {
        return Ok(Some(Cow::Borrowed(text)));
    }
    parse_escaped(grammar, cursor)
}

fn parse_escaped<'a>(grammar: &Grammar, cursor: &mut Cursor<'a>) -> Result<Option<Field<'a>>> {
    let start = cursor.checkpoint();
    if cursor.attempt(grammar.quote()).is_none() {
        return Ok(None);
    }
    let content = cursor.attempt(grammar.escaped_content()).unwrap_or_default();
    if cursor.attempt(grammar.quote()).is_some() {
        return Ok(Some(collapse_doubled_quotes(grammar, content)));
    }
    if cursor.is_at_end() {
        // Unterminated
        cursor.restore(start);
    }
    Err(Error::Syntax(cursor.position()))
}

/// Replace every doubled quote in `content` with a single one.
///
/// Content without doubled quotes is returned borrowed.
pub(crate) fn collapse_doubled_quotes<'a>(grammar: &Grammar, content: &'a str) -> Field<'a> {
    let finder = grammar.doubled_quote();
    let doubled = finder.needle().len();
    let quote = grammar.quote_text();

    let Some(first) = finder.find(content.as_bytes()) else {
        return Cow::Borrowed(content);
    };
    let mut collapsed = String::with_capacity(content.len());
    let mut rest = content;
    let mut at = first;
    loop {
        collapsed.push_str(&rest[..at]);
        collapsed.push_str(quote);
        rest = &rest[at + doubled..];
        match finder.find(rest.as_bytes()) {
            Some(next) => at = next,
            None => break,
        }
    }
    collapsed.push_str(rest);
    Cow::Owned(collapsed)
}
