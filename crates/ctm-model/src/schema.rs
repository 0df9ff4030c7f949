//! Inferred table layout.

use std::fmt;

use serde::Serialize;

use crate::ids::ColumnName;

/// Added to the longest observed cell when sizing a column.
pub const COLUMN_WIDTH_BUFFER: usize = 3;

/// SQL type family chosen for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Every observed cell is a numeric literal.
    Integer,
    /// At least one observed cell is not numeric.
    Text,
}

impl ColumnKind {
    /// Uppercase keyword used in `CREATE TABLE`.
    #[must_use]
    pub const fn sql_keyword(self) -> &'static str {
        match self {
            Self::Integer => "INT",
            Self::Text => "VARCHAR",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sql_keyword())
    }
}

/// Type and width inferred for one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSchema {
    pub name: ColumnName,
    pub kind: ColumnKind,
    /// Longest observed cell in characters plus [`COLUMN_WIDTH_BUFFER`].
    pub width: usize,
}

impl ColumnSchema {
    /// Column definition as it appears inside `CREATE TABLE (...)`.
    pub fn definition(&self) -> String {
        format!("{} {}({})", self.name, self.kind.sql_keyword(), self.width)
    }
}

/// Columns of the target table in header order.
///
/// Header order is the column order of both the DDL and the INSERT column
/// list, so the two statements always line up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TableSpec {
    columns: Vec<ColumnSchema>,
}

impl TableSpec {
    pub fn new(columns: Vec<ColumnSchema>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[ColumnSchema] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Looks up a column by its sanitized name.
    pub fn get(&self, name: &str) -> Option<&ColumnSchema> {
        self.columns.iter().find(|column| column.name.as_str() == name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &ColumnName> {
        self.columns.iter().map(|column| &column.name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColumnSchema> {
        self.columns.iter()
    }
}

impl<'a> IntoIterator for &'a TableSpec {
    type Item = &'a ColumnSchema;
    type IntoIter = std::slice::Iter<'a, ColumnSchema>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}
