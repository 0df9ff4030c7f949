//! Integration tests for schema inference.

use ctm_model::{ColumnKind, ColumnName};
use ctm_schema::{build_table_spec, infer_table_spec};
use proptest::prelude::*;

fn header(raw: &[&str]) -> Vec<ColumnName> {
    raw.iter().map(|r| ColumnName::sanitize(r)).collect()
}

#[test]
fn infers_name_and_age_example() {
    let columns = header(&["Name", " Age"]);
    let rows = vec![
        vec!["Alice".to_string(), "30".to_string()],
        vec!["Bob".to_string(), "7".to_string()],
    ];

    let spec = build_table_spec(&columns, &rows).expect("valid header");

    let name = spec.get("name").expect("name column");
    assert_eq!(name.kind, ColumnKind::Text);
    assert_eq!(name.width, 8);

    let age = spec.get("age").expect("age column");
    assert_eq!(age.kind, ColumnKind::Integer);
    assert_eq!(age.width, 5);
}

#[test]
fn decimals_still_declare_integer() {
    let columns = header(&["price"]);
    let rows = vec![vec!["9.99".to_string()], vec!["10".to_string()]];

    let spec = infer_table_spec(&columns, &rows);

    assert_eq!(spec.columns()[0].kind, ColumnKind::Integer);
    assert_eq!(spec.columns()[0].width, 7);
}

#[test]
fn all_empty_column_is_buffer_wide() {
    let columns = header(&["notes"]);
    let rows = vec![vec![String::new()], vec![String::new()]];

    let spec = infer_table_spec(&columns, &rows);

    assert_eq!(spec.columns()[0].width, 3);
    assert_eq!(spec.columns()[0].kind, ColumnKind::Text);
}

#[test]
fn build_rejects_duplicate_header() {
    let columns = header(&["Id", "id"]);
    let errors = build_table_spec(&columns, &[vec!["1".to_string(), "2".to_string()]]).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].to_string(),
        "Column name 'id' appears more than once after sanitizing the header"
    );
}

proptest! {
    #[test]
    fn integer_columns_stay_integer(values in prop::collection::vec(any::<i64>(), 1..40)) {
        let columns = header(&["n"]);
        let rows: Vec<Vec<String>> = values.iter().map(|v| vec![v.to_string()]).collect();

        let spec = infer_table_spec(&columns, &rows);

        let longest = rows.iter().map(|r| r[0].chars().count()).max().unwrap_or(0);
        prop_assert_eq!(spec.columns()[0].kind, ColumnKind::Integer);
        prop_assert_eq!(spec.columns()[0].width, longest + 3);
    }

    #[test]
    fn one_word_anywhere_forces_text(
        values in prop::collection::vec(any::<i64>(), 1..20),
        at in any::<prop::sample::Index>(),
    ) {
        let columns = header(&["n"]);
        let mut rows: Vec<Vec<String>> = values.iter().map(|v| vec![v.to_string()]).collect();
        let idx = at.index(rows.len() + 1);
        rows.insert(idx, vec!["n/a".to_string()]);

        let spec = infer_table_spec(&columns, &rows);

        prop_assert_eq!(spec.columns()[0].kind, ColumnKind::Text);
    }
}
