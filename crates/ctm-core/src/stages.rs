//! Pipeline stages.
//!
//! The stages run in this order, each taking the previous stage's output:
//! 1. **Verify**: check the loader options (see `LoaderOptions::verify`)
//! 2. **Populate**: read the header row and data rows
//! 3. **Infer**: derive a column schema from the data rows
//! 4. **Create**: build and execute `CREATE TABLE`
//! 5. **Insert**: build and execute the batch `INSERT`
//!
//! Create and insert are separate units of work. A failed insert leaves the
//! created table in place.

use std::path::Path;
use std::time::Instant;

use ctm_ingest::{SourceTable, read_source_table};
use ctm_model::{LoadError, TableName, TableSpec};
use ctm_schema::build_table_spec;
use ctm_sql::{Executor, MYSQL_MAX_PLACEHOLDERS, build_create_table, build_insert, run_statement};
use tracing::{info, warn};

/// Reads the source file; a header without data rows is an error.
pub fn populate_rows(path: &Path) -> Result<SourceTable, LoadError> {
    let start = Instant::now();
    let source = read_source_table(path)?;
    if source.rows.is_empty() {
        return Err(LoadError::NoDataRows);
    }
    info!(
        path = %path.display(),
        columns = source.width(),
        rows = source.height(),
        duration_ms = start.elapsed().as_millis(),
        "rows populated"
    );
    Ok(source)
}

/// Checks the sanitized header and infers one schema per column.
pub fn infer_schema(source: &SourceTable) -> Result<TableSpec, Vec<LoadError>> {
    let start = Instant::now();
    let spec = build_table_spec(&source.headers.columns, &source.rows)?;
    info!(
        columns = spec.len(),
        duration_ms = start.elapsed().as_millis(),
        "schema inferred"
    );
    Ok(spec)
}

/// Creates the target table.
pub fn create_table<E>(executor: &mut E, table: &TableName, spec: &TableSpec) -> Result<(), LoadError>
where
    E: Executor + ?Sized,
{
    let statement = build_create_table(table, spec);
    run_statement(executor, &statement).map_err(|e| LoadError::SchemaCreationFailed {
        message: e.message,
    })?;
    info!(table = %table, "table created");
    Ok(())
}

/// Inserts every data row with a single statement.
pub fn insert_rows<E>(
    executor: &mut E,
    table: &TableName,
    spec: &TableSpec,
    rows: &[Vec<String>],
) -> Result<u64, LoadError>
where
    E: Executor + ?Sized,
{
    let start = Instant::now();
    let statement = build_insert(table, spec, rows);
    let placeholders = statement.bindings.len();
    if placeholders > MYSQL_MAX_PLACEHOLDERS {
        warn!(
            placeholders,
            limit = MYSQL_MAX_PLACEHOLDERS,
            "insert exceeds the prepared statement parameter limit"
        );
    }
    let affected = run_statement(executor, &statement)
        .map_err(|e| LoadError::InsertFailed { message: e.message })?;
    info!(
        table = %table,
        rows = rows.len(),
        placeholders,
        affected,
        duration_ms = start.elapsed().as_millis(),
        "rows inserted"
    );
    Ok(affected)
}
