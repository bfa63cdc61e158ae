//! csv-grammar - A grammar-driven CSV parser for in-memory text
//!
//! This library turns a complete text buffer into a rectangular table of raw
//! string fields under a configurable dialect, checks the header row against
//! an expected column set, and offers column-name based access to the result.
//!
//! # Features
//!
//! - **Configurable dialects**: separator, quote, end-of-line and character
//!   class rules, with strict (RFC 4180, ASCII) and permissive presets
//! - **Zero-copy fields**: fields borrow from the input unless doubled quotes
//!   had to be collapsed
//! - **Exact error positions**: leftover input is reported at the byte, line
//!   and column of the first character the grammar could not consume
//! - **Rectangularity**: every row must have the header's field count
//! - **Header validation**: subset or exact matching of expected columns
//! - **Views**: lookup by column name, and lazy column reordering
//!
//! # Example
//!
//! ```rust
//! use csv_grammar::{NamedCells, Parser, Reordered, ValidationOptions};
//!
//! # fn main() -> Result<(), csv_grammar::Error> {
//! let parser = Parser::strict()
//!     .with_validation(ValidationOptions::new().with_expected_columns(["id", "name"]));
//! let document = parser.parse("id,name,city\r\n1,Ada,London\r\n2,Alan,Wilmslow")?;
//!
//! let cells = NamedCells::new(&document);
//! assert_eq!(cells.get(1, "name"), Some("Ada"));
//! assert_eq!(cells.get(1, "country"), None);
//!
//! let view = Reordered::new(&document, &["city", "id"])?;
//! assert_eq!(view.row(2)[0], "Wilmslow");
//! # Ok(())
//! # }
//! ```

/// Position-tracked cursor over the input buffer
pub mod cursor;

/// Parsed documents, rows and fields
pub mod document;

/// Error types
pub mod error;

/// Dialect rules and presets
pub mod grammar;

/// Field, line and document parsing
pub mod parser;

/// Header validation
pub mod validation;

/// Named and reordered views over documents
pub mod views;

pub use cursor::TextPosition;
pub use document::{Document, Field, Row};
pub use error::{Error, Result};
pub use grammar::{Grammar, GrammarOptions};
pub use parser::Parser;
pub use validation::ValidationOptions;
pub use views::{NamedCells, Reordered};
