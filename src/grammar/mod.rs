//! Dialect rules for splitting text into fields and rows.
//!
//! A [`Grammar`] bundles five caller-supplied rules (separator, quote,
//! end-of-line, the class of characters allowed in unquoted fields and the
//! line breaks allowed inside quotes) together with the rules derived from
//! them. Grammars are compiled once and never change afterwards, so a single
//! grammar can back any number of parsers on any number of threads.
//!
//! # Example
//!
//! ```rust
//! use csv_grammar::grammar::GrammarOptions;
//!
//! // Semicolon-separated values, accepting non-ASCII text
//! let grammar = GrammarOptions::permissive().with_separator_char(';').build()?;
//! # let _ = grammar;
//! # Ok::<(), csv_grammar::Error>(())
//! ```

pub mod rule;

use memchr::memmem::Finder;
use once_cell::sync::Lazy;

use crate::error::{Error, Result};
pub use rule::{CharClass, ClassItem, Rule};

/// Shared strict (RFC 4180, ASCII-only) grammar.
pub static STRICT: Lazy<Grammar> = Lazy::new(Grammar::strict);

/// Shared permissive grammar that also accepts non-ASCII text.
pub static PERMISSIVE: Lazy<Grammar> = Lazy::new(Grammar::permissive);

/// The five dialect rules a [`Grammar`] is built from.
#[derive(Debug, Clone)]
pub struct GrammarOptions {
    /// Row terminator
    pub end_of_line: Rule,
    /// Field separator
    pub separator: Rule,
    /// Quote around escaped fields; must be a literal
    pub quote: Rule,
    /// One character allowed in an unquoted field
    pub unescaped: Rule,
    /// Line breaks allowed inside a quoted field
    pub quoted_newlines: Rule,
}

impl Default for GrammarOptions {
    fn default() -> Self {
        Self::strict()
    }
}

impl GrammarOptions {
    /// RFC 4180: CRLF rows, comma separator, printable ASCII only.
    pub fn strict() -> Self {
        Self {
            end_of_line: Rule::literal("\r\n"),
            separator: Rule::from(','),
            quote: Rule::from('"'),
            unescaped: Rule::class(printable_ascii()),
            quoted_newlines: Rule::from('\n').or(Rule::from('\r')),
        }
    }

    /// RFC 4180 that also accepts any character other than the quote,
    /// separator, CR and LF in unquoted fields.
    pub fn permissive() -> Self {
        Self {
            unescaped: Rule::class(
                printable_ascii().union(CharClass::any_except(&['"', ',', '\r', '\n'])),
            ),
            ..Self::strict()
        }
    }

    pub fn with_end_of_line(mut self, rule: impl Into<Rule>) -> Self {
        self.end_of_line = rule.into();
        self
    }

    pub fn with_separator(mut self, rule: impl Into<Rule>) -> Self {
        self.separator = rule.into();
        self
    }

    pub fn with_quote(mut self, rule: impl Into<Rule>) -> Self {
        self.quote = rule.into();
        self
    }

    pub fn with_unescaped(mut self, rule: impl Into<Rule>) -> Self {
        self.unescaped = rule.into();
        self
    }

    pub fn with_quoted_newlines(mut self, rule: impl Into<Rule>) -> Self {
        self.quoted_newlines = rule.into();
        self
    }

    /// Use a single-character separator.
    ///
    /// When the unescaped rule is a plain class, the new separator is removed
    /// from it and the previous single-character separator is allowed back
    /// in, so `with_separator_char('\t')` on a comma grammar yields TSV.
    pub fn with_separator_char(mut self, separator: char) -> Self {
        let previous = self
            .separator
            .as_literal()
            .and_then(single_char)
            .filter(|&c| c != separator);
        let restored = previous.filter(|&c| c != '\r' && c != '\n' && !self.quote_is(c));
        if let Rule::Class(class) = &self.unescaped {
            let mut class = class.clone();
            if let Some(c) = restored {
                class = class.with_char(c);
            }
            self.unescaped = Rule::Class(class.without_char(separator));
        }
        self.separator = Rule::from(separator);
        self
    }

    /// Tab-separated values.
    pub fn tsv() -> Self {
        Self::strict().with_separator_char('\t')
    }

    fn quote_is(&self, c: char) -> bool {
        self.quote.as_literal().and_then(single_char) == Some(c)
    }

    /// Check the rules and compile them.
    pub fn build(self) -> Result<Grammar> {
        match self.quote.as_literal() {
            Some(quote) if !quote.is_empty() => {},
            _ => {
                return Err(Error::InvalidGrammar(
                    "quote must be a non-empty literal".to_string(),
                ));
            },
        }
        for (name, rule) in [
            ("separator", &self.separator),
            ("end of line", &self.end_of_line),
            ("unescaped character", &self.unescaped),
            ("quoted newline", &self.quoted_newlines),
        ] {
            if rule.matches_empty() {
                return Err(Error::InvalidGrammar(format!(
                    "{name} rule matches empty input"
                )));
            }
        }
        Ok(Grammar::compile(self))
    }
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Printable ASCII without the quote and comma.
fn printable_ascii() -> CharClass {
    CharClass::new([
        ClassItem::Range(' ', '!'),
        ClassItem::Range('#', '+'),
        ClassItem::Range('-', '~'),
    ])
}

/// Compiled, immutable dialect rules.
#[derive(Debug, Clone)]
pub struct Grammar {
    end_of_line: Rule,
    separator: Rule,
    quote: Rule,
    unescaped: Rule,
    quoted_newlines: Rule,
    escaped_content: Rule,
    unescaped_content: Rule,
    trailing_skip: Rule,
    quote_text: Box<str>,
    doubled_quote: Finder<'static>,
}

impl Grammar {
    /// Build a grammar from checked options.
    pub fn new(options: GrammarOptions) -> Result<Self> {
        options.build()
    }

    /// The strict preset, see [`GrammarOptions::strict`].
    pub fn strict() -> Self {
        Self::compile(GrammarOptions::strict())
    }

    /// The permissive preset, see [`GrammarOptions::permissive`].
    pub fn permissive() -> Self {
        Self::compile(GrammarOptions::permissive())
    }

    /// Compile options whose quote rule is known to be a literal.
    fn compile(options: GrammarOptions) -> Self {
        let quote_text: Box<str> = options.quote.as_literal().unwrap_or("\"").into();
        let doubled = quote_text.repeat(2);
        let doubled_quote = Finder::new(doubled.as_bytes()).into_owned();

        let GrammarOptions {
            end_of_line,
            separator,
            quote,
            unescaped,
            quoted_newlines,
        } = options;

        let escaped_content = Rule::choice([
            unescaped.clone(),
            separator.clone(),
            quoted_newlines.clone(),
            Rule::sequence([quote.clone(), quote.clone()]),
        ])
        .at_least(0)
        .optimize();
        let unescaped_content = unescaped.clone().at_least(1).optimize();
        let trailing_skip = Rule::choice([
            Rule::from('\r'),
            Rule::from('\n'),
            Rule::literal("\r\n"),
            Rule::from(' '),
        ])
        .at_least(0)
        .optimize();

        Grammar {
            end_of_line: end_of_line.optimize(),
            separator: separator.optimize(),
            quote: quote.optimize(),
            unescaped: unescaped.optimize(),
            quoted_newlines: quoted_newlines.optimize(),
            escaped_content,
            unescaped_content,
            trailing_skip,
            quote_text,
            doubled_quote,
        }
    }

    pub fn end_of_line(&self) -> &Rule {
        &self.end_of_line
    }

    pub fn separator(&self) -> &Rule {
        &self.separator
    }

    pub fn quote(&self) -> &Rule {
        &self.quote
    }

    pub fn unescaped(&self) -> &Rule {
        &self.unescaped
    }

    pub fn quoted_newlines(&self) -> &Rule {
        &self.quoted_newlines
    }

    /// Body of a quoted field, without the surrounding quotes.
    pub fn escaped_content(&self) -> &Rule {
        &self.escaped_content
    }

    /// An unquoted field of at least one character.
    pub fn unescaped_content(&self) -> &Rule {
        &self.unescaped_content
    }

    /// Line breaks and spaces tolerated after the last row.
    pub fn trailing_skip(&self) -> &Rule {
        &self.trailing_skip
    }

    pub fn quote_text(&self) -> &str {
        &self.quote_text
    }

    pub(crate) fn doubled_quote(&self) -> &Finder<'static> {
        &self.doubled_quote
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::strict()
    }
}

#[cfg(test)]
mod tests;
