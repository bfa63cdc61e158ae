//! Header validation against a declared column set.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::document::Field;
use crate::error::{Error, Result};

/// Expectations checked against the header row.
///
/// Name comparison is exact text equality and order-independent. Duplicate
/// names in `expected_columns` collapse into one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    /// Column names the header must contain; `None` disables validation
    pub expected_columns: Option<Vec<String>>,
    /// Tolerate header columns beyond the expected ones
    pub allows_non_exhaustive_rows: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            expected_columns: None,
            allows_non_exhaustive_rows: true,
        }
    }
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require these columns in the header.
    pub fn with_expected_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expected_columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    /// Allow or reject header columns beyond the expected ones.
    pub fn with_non_exhaustive_rows(mut self, allowed: bool) -> Self {
        self.allows_non_exhaustive_rows = allowed;
        self
    }

    /// Check `header` against the expected columns.
    pub fn validate_header(&self, header: &[Field<'_>]) -> Result<()> {
        let Some(expected) = &self.expected_columns else {
            return Ok(());
        };
        let expected = unique(expected.iter().map(String::as_str));
        let present: HashSet<&str> = header.iter().map(|name| &**name).collect();
        let missing: Vec<String> = expected
            .iter()
            .filter(|name| !present.contains(*name))
            .map(|name| name.to_string())
            .collect();

        if self.allows_non_exhaustive_rows {
            if expected.len() > header.len() || !missing.is_empty() {
                return Err(Error::MissingColumns(missing));
            }
            return Ok(());
        }

        match expected.len().cmp(&header.len()) {
            Ordering::Greater => Err(Error::MissingColumns(missing)),
            Ordering::Less => {
                let wanted: HashSet<&str> = expected.iter().copied().collect();
                let mut additional = unique(
                    header
                        .iter()
                        .map(|name| &**name)
                        .filter(|name| !wanted.contains(name)),
                );
                if additional.is_empty() {
                    // Every header name is expected, so the surplus is repeats
                    additional = repeated(header);
                }
                Err(Error::AdditionalColumns(
                    additional.into_iter().map(str::to_string).collect(),
                ))
            },
            Ordering::Equal if !missing.is_empty() => Err(Error::MissingColumns(missing)),
            Ordering::Equal => Ok(()),
        }
    }
}

/// First occurrence of each name, in order.
fn unique<'n>(names: impl Iterator<Item = &'n str>) -> Vec<&'n str> {
    let mut seen = HashSet::new();
    names.filter(|name| seen.insert(*name)).collect()
}

/// Names that occur more than once, in order of their second occurrence.
fn repeated<'n>(header: &'n [Field<'_>]) -> Vec<&'n str> {
    let mut seen = HashSet::new();
    unique(
        header
            .iter()
            .map(|name| &**name)
            .filter(|name| !seen.insert(*name)),
    )
}
