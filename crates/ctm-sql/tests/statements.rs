//! Integration tests for statement building and execution.

use std::collections::HashSet;

use ctm_model::{ColumnKind, ColumnName, ColumnSchema, TableName, TableSpec};
use ctm_sql::{
    MemoryExecutor, build_create_table, build_insert, named_placeholders, run_statement,
    to_positional,
};
use proptest::prelude::*;

fn text_spec(width: usize) -> TableSpec {
    TableSpec::new(
        (0..width)
            .map(|idx| ColumnSchema {
                name: ColumnName::sanitize(&format!("col {idx}")),
                kind: ColumnKind::Text,
                width: 10,
            })
            .collect(),
    )
}

fn grid(rows: usize, columns: usize) -> Vec<Vec<String>> {
    (0..rows)
        .map(|r| (0..columns).map(|c| format!("v{r}.{c}")).collect())
        .collect()
}

#[test]
fn ddl_and_insert_agree_on_column_order() {
    let table = TableName::parse("people").unwrap();
    let spec = TableSpec::new(vec![
        ColumnSchema {
            name: ColumnName::sanitize("Name"),
            kind: ColumnKind::Text,
            width: 8,
        },
        ColumnSchema {
            name: ColumnName::sanitize(" Age"),
            kind: ColumnKind::Integer,
            width: 5,
        },
    ]);

    let ddl = build_create_table(&table, &spec);
    let insert = build_insert(&table, &spec, &[vec!["Alice".to_string(), "30".to_string()]]);

    assert_eq!(ddl.text, "CREATE TABLE people (name VARCHAR(8), age INT(5))");
    assert!(insert.text.starts_with("INSERT INTO people (name,age) VALUES "));
}

#[test]
fn memory_executor_runs_generated_statements() {
    let table = TableName::parse("people").unwrap();
    let spec = text_spec(3);
    let rows = grid(4, 3);
    let mut executor = MemoryExecutor::new();

    run_statement(&mut executor, &build_create_table(&table, &spec)).unwrap();
    let inserted = run_statement(&mut executor, &build_insert(&table, &spec, &rows)).unwrap();

    assert_eq!(inserted, 4);
    assert_eq!(executor.row_count("people"), Some(4));
    let last = executor.executed().last().unwrap();
    assert_eq!(last.bindings.len(), 12);
}

proptest! {
    #[test]
    fn placeholders_match_cells_and_are_unique(rows in 1usize..30, columns in 1usize..12) {
        let table = TableName::parse("t").unwrap();
        let statement = build_insert(&table, &text_spec(columns), &grid(rows, columns));

        let names = named_placeholders(&statement.text);
        let unique: HashSet<&String> = names.iter().collect();
        prop_assert_eq!(names.len(), rows * columns);
        prop_assert_eq!(unique.len(), names.len());
        prop_assert_eq!(statement.bindings.len(), names.len());
        for name in &names {
            prop_assert!(statement.bindings.contains(name));
        }
    }

    #[test]
    fn positional_order_follows_row_major_cells(rows in 1usize..10, columns in 1usize..6) {
        let table = TableName::parse("t").unwrap();
        let data = grid(rows, columns);
        let statement = build_insert(&table, &text_spec(columns), &data);

        let positional = to_positional(&statement.text);
        prop_assert_eq!(positional.text.matches('?').count(), rows * columns);
        let bound: Vec<String> = positional
            .order
            .iter()
            .map(|name| match statement.bindings.get(name) {
                Some(ctm_model::BindValue::Str(value)) => value.clone(),
                other => format!("{other:?}"),
            })
            .collect();
        let expected: Vec<String> = data.into_iter().flatten().collect();
        prop_assert_eq!(bound, expected);
    }
}
