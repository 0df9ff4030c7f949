use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ctm_core::{LoadPlan, LoadReport};
use ctm_model::{ColumnKind, ColumnSchema};

/// Prints the inferred schema and the DDL that a real run would execute.
pub fn print_plan(plan: &LoadPlan) {
    println!("Table: {}", plan.table);
    println!("Rows: {}", plan.row_count);
    println!("{}", schema_table(plan));
    println!("{}", plan.create.text);
}

pub fn print_load_success(report: &LoadReport) {
    let Some(plan) = report.plan.as_ref() else {
        return;
    };
    println!(
        "Created table {} ({} columns) and inserted {} rows",
        plan.table,
        plan.spec.len(),
        report.rows_inserted
    );
}

/// One row per inferred column, in header order.
pub fn schema_table(plan: &LoadPlan) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Column"),
        header_cell("Header"),
        header_cell("Type"),
        header_cell("Width"),
    ]);
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for (idx, column) in plan.spec.iter().enumerate() {
        let raw = plan.headers.raw.get(idx).map_or("-", String::as_str);
        table.add_row(vec![
            Cell::new(idx + 1),
            Cell::new(column.name.as_str()).add_attribute(Attribute::Bold),
            Cell::new(raw).fg(Color::DarkGrey),
            kind_cell(column),
            Cell::new(column.width),
        ]);
    }
    table
}

fn kind_cell(column: &ColumnSchema) -> Cell {
    let cell = Cell::new(column.kind.sql_keyword());
    match column.kind {
        ColumnKind::Integer => cell.fg(Color::Blue),
        ColumnKind::Text => cell.fg(Color::Green),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
