//! Parsing text buffers into documents.
//!
//! A [`Parser`] pairs a [`Grammar`] with [`ValidationOptions`]. Each call to
//! [`Parser::parse`] runs over its own cursor, so one parser can be shared
//! freely; the grammar and options are never modified by a parse.
//!
//! Parsing happens in three layers:
//!
//! - **field**: an unquoted run of at least one character, or a quoted span
//!   whose doubled quotes are collapsed
//! - **line**: separator-joined fields, telling a blank line apart from a
//!   line holding one empty field
//! - **document**: end-of-line separated lines with equal field counts,
//!   followed only by tolerated trailing whitespace

mod document;
mod field;
mod line;

use tracing::debug;

use crate::cursor::Cursor;
use crate::document::Document;
use crate::error::Result;
use crate::grammar::{Grammar, PERMISSIVE, STRICT};
use crate::validation::ValidationOptions;

const BOM: char = '\u{FEFF}';

/// Parser for whole in-memory CSV buffers.
#[derive(Debug, Clone)]
pub struct Parser<'g> {
    grammar: &'g Grammar,
    validation: ValidationOptions,
    skip_bom: bool,
}

impl<'g> Parser<'g> {
    /// Parser over `grammar` with default validation.
    pub fn new(grammar: &'g Grammar) -> Self {
        Parser {
            grammar,
            validation: ValidationOptions::default(),
            skip_bom: false,
        }
    }

    /// Check the header row against these options.
    pub fn with_validation(mut self, validation: ValidationOptions) -> Self {
        self.validation = validation;
        self
    }

    /// Skip a leading byte order mark before parsing.
    pub fn with_bom_skipping(mut self, skip: bool) -> Self {
        self.skip_bom = skip;
        self
    }

    pub fn grammar(&self) -> &'g Grammar {
        self.grammar
    }

    pub fn validation(&self) -> &ValidationOptions {
        &self.validation
    }

    /// Parse `input` into a document borrowing from it.
    pub fn parse<'a>(&self, input: &'a str) -> Result<Document<'a>> {
        let start = if self.skip_bom && input.starts_with(BOM) {
            BOM.len_utf8()
        } else {
            0
        };
        let mut cursor = Cursor::at(input, start);
        let document = document::parse_document(self.grammar, &self.validation, &mut cursor)?;
        debug!(
            rows = document.len(),
            columns = document.width(),
            bytes = input.len(),
            "parsed document"
        );
        Ok(document)
    }

    /// Parse `input` into a document that owns its fields.
    pub fn parse_owned(&self, input: &str) -> Result<Document<'static>> {
        self.parse(input).map(Document::into_owned)
    }
}

impl Parser<'static> {
    /// Parser over the shared strict grammar.
    pub fn strict() -> Self {
        Parser::new(&STRICT)
    }

    /// Parser over the shared permissive grammar.
    pub fn permissive() -> Self {
        Parser::new(&PERMISSIVE)
    }
}

impl Default for Parser<'static> {
    fn default() -> Self {
        Self::strict()
    }
}

#[cfg(test)]
mod tests;
