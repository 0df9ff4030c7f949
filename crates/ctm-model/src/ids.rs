//! SQL identifiers derived from user input.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::LoadError;

/// Runs of characters that are neither ASCII word characters nor spaces.
static NON_WORD_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^ 0-9A-Za-z_]+").expect("static pattern compiles"));

/// A bare identifier with at most one `schema.` qualifier.
static TABLE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z_][A-Za-z0-9_]*\.)?[A-Za-z_][A-Za-z0-9_]*$")
        .expect("static pattern compiles")
});

/// A column identifier sanitized from one header cell.
///
/// Only lowercase ASCII letters, digits and underscores survive sanitizing.
/// The name is empty when the header cell was blank; whether that is fatal
/// is decided by the schema stage, not here.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ColumnName(String);

impl ColumnName {
    /// Sanitize a raw header cell.
    ///
    /// Trims surrounding whitespace, collapses every run of characters that is
    /// neither a word character nor a space into a single `_`, turns each
    /// remaining space into `_`, then lowercases.
    ///
    /// ```
    /// use ctm_model::ColumnName;
    ///
    /// assert_eq!(ColumnName::sanitize("  First Name ").as_str(), "first_name");
    /// assert_eq!(ColumnName::sanitize("Cost ($)").as_str(), "cost__");
    /// ```
    pub fn sanitize(raw: &str) -> Self {
        let collapsed = NON_WORD_RUN.replace_all(raw.trim(), "_");
        Self(collapsed.replace(' ', "_").to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ColumnName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ColumnName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The target table of a load.
///
/// Table names cannot be bound as parameters, so they are restricted to plain
/// identifiers and spliced into statement text as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TableName(String);

impl TableName {
    pub fn parse(raw: &str) -> Result<Self, LoadError> {
        let trimmed = raw.trim();
        if TABLE_NAME.is_match(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(LoadError::InvalidTableName {
                value: raw.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for TableName {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
