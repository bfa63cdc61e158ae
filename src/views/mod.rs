//! Column-name based access to parsed documents.
//!
//! Both views are built from the header row once and then index into the
//! document's rows without copying any field.

pub mod named;
pub mod reordered;

use std::collections::HashMap;

pub use named::{NamedCells, NamedRow};
pub use reordered::{Reordered, ReorderedRow};

use crate::document::Document;

/// Map each header name to its column; later duplicates win.
fn header_index<'d>(document: &'d Document<'_>) -> HashMap<&'d str, usize> {
    document
        .header()
        .map(|header| {
            header
                .iter()
                .enumerate()
                .map(|(index, name)| (&**name, index))
                .collect()
        })
        .unwrap_or_default()
}
