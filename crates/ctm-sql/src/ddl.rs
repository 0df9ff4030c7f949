//! `CREATE TABLE` generation.

use ctm_model::{ColumnSchema, TableName, TableSpec};

use crate::statement::SqlStatement;

/// Builds `CREATE TABLE <table> (<col> <TYPE>(<width>), ...)`.
///
/// Columns appear in spec order. The width is written for both kinds; on an
/// `INT` column it is only a display width.
pub fn build_create_table(table: &TableName, spec: &TableSpec) -> SqlStatement {
    let definitions: Vec<String> = spec.iter().map(ColumnSchema::definition).collect();
    SqlStatement::new(format!(
        "CREATE TABLE {table} ({})",
        definitions.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use ctm_model::{ColumnKind, ColumnName};

    use super::*;

    fn spec(columns: &[(&str, ColumnKind, usize)]) -> TableSpec {
        TableSpec::new(
            columns
                .iter()
                .map(|(name, kind, width)| ColumnSchema {
                    name: ColumnName::sanitize(name),
                    kind: *kind,
                    width: *width,
                })
                .collect(),
        )
    }

    #[test]
    fn builds_ddl_in_header_order() {
        let table = TableName::parse("t").unwrap();
        let statement = build_create_table(
            &table,
            &spec(&[("name", ColumnKind::Text, 8), ("age", ColumnKind::Integer, 5)]),
        );
        insta::assert_snapshot!(statement.text, @"CREATE TABLE t (name VARCHAR(8), age INT(5))");
        assert!(statement.bindings.is_empty());
    }

    #[test]
    fn single_column_has_no_separator() {
        let table = TableName::parse("crm.notes").unwrap();
        let statement = build_create_table(&table, &spec(&[("body", ColumnKind::Text, 3)]));
        assert_eq!(statement.text, "CREATE TABLE crm.notes (body VARCHAR(3))");
    }
}
