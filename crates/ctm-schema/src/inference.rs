//! Column type and width inference.
//!
//! # Rules
//!
//! - **Width**: the longest cell of the column, counted in characters, plus
//!   [`COLUMN_WIDTH_BUFFER`]. A column of empty cells is therefore
//!   `COLUMN_WIDTH_BUFFER` wide.
//! - **Kind**: a column starts unclassified. A numeric cell marks it
//!   [`ColumnKind::Integer`] unless it is already [`ColumnKind::Text`]; any
//!   non-numeric cell (including an empty one) marks it `Text` for good.
//!   Row order never matters: `Text` always dominates.
//!
//! Integers and decimals both count as numeric; the declared kind is still
//! `Integer`. There is no date, decimal or null detection.

use std::collections::HashSet;

use ctm_model::{COLUMN_WIDTH_BUFFER, ColumnKind, ColumnName, ColumnSchema, LoadError, TableSpec};
use tracing::debug;

use crate::numeric::is_numeric_literal;

/// Running observations for one column.
#[derive(Debug, Default, Clone, Copy)]
struct ColumnScan {
    max_chars: usize,
    kind: Option<ColumnKind>,
}

impl ColumnScan {
    fn observe(&mut self, cell: &str) {
        self.max_chars = self.max_chars.max(cell.chars().count());
        self.kind = match self.kind {
            Some(ColumnKind::Text) => Some(ColumnKind::Text),
            _ if is_numeric_literal(cell) => Some(ColumnKind::Integer),
            _ => Some(ColumnKind::Text),
        };
    }

    fn finish(self, name: ColumnName) -> ColumnSchema {
        ColumnSchema {
            name,
            // Only reachable without data rows, which the loader rejects.
            kind: self.kind.unwrap_or(ColumnKind::Text),
            width: self.max_chars + COLUMN_WIDTH_BUFFER,
        }
    }
}

/// Infers a schema for each column from every data row.
///
/// Cells beyond the header width are ignored.
pub fn infer_table_spec(columns: &[ColumnName], rows: &[Vec<String>]) -> TableSpec {
    let mut scans = vec![ColumnScan::default(); columns.len()];
    for row in rows {
        for (scan, cell) in scans.iter_mut().zip(row) {
            scan.observe(cell);
        }
    }

    let schemas: Vec<ColumnSchema> = columns
        .iter()
        .zip(scans)
        .map(|(name, scan)| scan.finish(name.clone()))
        .collect();
    for column in &schemas {
        debug!(
            column = %column.name,
            kind = %column.kind,
            width = column.width,
            "inferred column"
        );
    }
    TableSpec::new(schemas)
}

/// Rejects column names that would produce invalid DDL.
///
/// Every empty name and every repeated name is reported. Positions are
/// 1-based; a repeated name is reported once however often it repeats.
pub fn check_column_names(columns: &[ColumnName]) -> Result<(), Vec<LoadError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for (idx, name) in columns.iter().enumerate() {
        if name.is_empty() {
            errors.push(LoadError::EmptyColumnName { position: idx + 1 });
            continue;
        }
        if !seen.insert(name.as_str()) && reported.insert(name.as_str()) {
            errors.push(LoadError::DuplicateColumn {
                name: name.to_string(),
            });
        }
    }
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Checks the column names, then infers the table spec.
pub fn build_table_spec(
    columns: &[ColumnName],
    rows: &[Vec<String>],
) -> Result<TableSpec, Vec<LoadError>> {
    check_column_names(columns)?;
    Ok(infer_table_spec(columns, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(raw: &[&str]) -> Vec<ColumnName> {
        raw.iter().map(|r| ColumnName::sanitize(r)).collect()
    }

    fn rows(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }

    #[test]
    fn text_dominates_regardless_of_position() {
        let columns = names(&["code"]);
        let first = infer_table_spec(&columns, &rows(&[&["5"], &["5a"]]));
        let last = infer_table_spec(&columns, &rows(&[&["5a"], &["5"]]));
        assert_eq!(first.columns()[0].kind, ColumnKind::Text);
        assert_eq!(last.columns()[0].kind, ColumnKind::Text);
    }

    #[test]
    fn empty_cells_force_text() {
        let spec = infer_table_spec(&names(&["n"]), &rows(&[&["1"], &[""], &["2"]]));
        assert_eq!(spec.columns()[0].kind, ColumnKind::Text);
        assert_eq!(spec.columns()[0].width, 4);
    }

    #[test]
    fn width_counts_characters_not_bytes() {
        let spec = infer_table_spec(&names(&["city"]), &rows(&[&["Zürich"], &["Oslo"]]));
        assert_eq!(spec.columns()[0].width, 9);
    }

    #[test]
    fn no_rows_defaults_to_buffer_width_text() {
        let spec = infer_table_spec(&names(&["a"]), &[]);
        assert_eq!(spec.columns()[0].kind, ColumnKind::Text);
        assert_eq!(spec.columns()[0].width, COLUMN_WIDTH_BUFFER);
    }

    #[test]
    fn check_reports_empty_and_duplicate_names() {
        let columns = names(&["Name", "", "name", "NAME", "e-mail", "e mail"]);
        let errors = check_column_names(&columns).unwrap_err();
        assert_eq!(
            errors,
            vec![
                LoadError::EmptyColumnName { position: 2 },
                LoadError::DuplicateColumn {
                    name: "name".to_string()
                },
                LoadError::DuplicateColumn {
                    name: "e_mail".to_string()
                },
            ]
        );
    }

    #[test]
    fn check_accepts_distinct_names() {
        assert!(check_column_names(&names(&["a", "b", "c"])).is_ok());
    }
}
