//! Multi-row `INSERT` generation.

use ctm_model::{BindingSet, ColumnName, TableName, TableSpec};

use crate::statement::SqlStatement;

/// Upper bound on placeholders in one MySQL prepared statement.
///
/// Statements above it are still built; the server will reject them.
pub const MYSQL_MAX_PLACEHOLDERS: usize = 65_535;

/// Placeholder name (without `:`) for a cell, unique per row and column.
pub fn placeholder_name(row: usize, column: usize) -> String {
    format!("r{row}_c{column}")
}

/// Builds one `INSERT` covering every row.
///
/// The statement reads
/// `INSERT INTO <table> (<col1>,<col2>) VALUES (:r0_c0,:r0_c1),(:r1_c0,:r1_c1)`
/// and each placeholder is bound to the raw cell text. Cells past the last
/// column in `spec` are dropped. `rows` must not be empty: a `VALUES` clause without
/// groups is not valid SQL.
pub fn build_insert(table: &TableName, spec: &TableSpec, rows: &[Vec<String>]) -> SqlStatement {
    let columns: Vec<&str> = spec.column_names().map(ColumnName::as_str).collect();
    let width = spec.len();

    let mut text = format!("INSERT INTO {table} ({}) VALUES ", columns.join(","));
    let mut bindings = BindingSet::with_capacity(rows.len() * width);
    for (row_idx, row) in rows.iter().enumerate() {
        if row_idx > 0 {
            text.push(',');
        }
        text.push('(');
        for (col_idx, cell) in row.iter().take(width).enumerate() {
            if col_idx > 0 {
                text.push(',');
            }
            let name = placeholder_name(row_idx, col_idx);
            text.push(':');
            text.push_str(&name);
            bindings.insert(name, cell.as_str());
        }
        text.push(')');
    }

    SqlStatement::new(text).with_bindings(bindings)
}
