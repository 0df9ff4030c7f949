//! The load state machine.
//!
//! ```text
//! Start -> OptionsVerified -> RowsPopulated -> TableCreated -> RowsInserted -> Done
//!   \__________________\_________________\________________\____> Errored
//! ```
//!
//! Configuration checks are exhaustive; every later stage halts the run on
//! its first failure. Nothing is rolled back.

use std::fmt;
use std::time::Instant;

use ctm_ingest::CsvHeaders;
use ctm_model::{
    ConnectionSettings, ErrorLog, LoadError, LoaderOptions, SourceOptions, TableName, TableSpec,
};
use ctm_sql::{Executor, ExecutorError, SqlStatement, build_create_table};
use tracing::{error, info, info_span};

use crate::stages::{create_table, infer_schema, insert_rows, populate_rows};

/// Where a run is, or where it stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LoadState {
    Start,
    OptionsVerified,
    RowsPopulated,
    TableCreated,
    RowsInserted,
    Done,
    Errored,
}

impl LoadState {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::OptionsVerified => "options verified",
            Self::RowsPopulated => "rows populated",
            Self::TableCreated => "table created",
            Self::RowsInserted => "rows inserted",
            Self::Done => "done",
            Self::Errored => "errored",
        }
    }
}

impl fmt::Display for LoadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What inference decided, before anything is executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadPlan {
    pub table: TableName,
    pub headers: CsvHeaders,
    pub spec: TableSpec,
    pub create: SqlStatement,
    pub row_count: usize,
    /// First data row, for previews.
    pub first_row: Vec<String>,
}

/// Outcome of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// `Done` on success, `Errored` otherwise.
    pub state: LoadState,
    /// Last state reached before the run finished or halted.
    pub reached: LoadState,
    pub errors: ErrorLog,
    pub plan: Option<LoadPlan>,
    pub rows_inserted: u64,
}

impl LoadReport {
    fn new() -> Self {
        Self {
            state: LoadState::Start,
            reached: LoadState::Start,
            errors: ErrorLog::new(),
            plan: None,
            rows_inserted: 0,
        }
    }

    pub fn is_success(&self) -> bool {
        self.state == LoadState::Done
    }

    fn advance(&mut self, next: LoadState) {
        self.reached = next;
        self.state = next;
    }

    fn halt(mut self, errors: impl IntoIterator<Item = LoadError>) -> Self {
        self.errors.extend(errors);
        self.state = LoadState::Errored;
        error!(
            reached = %self.reached,
            errors = self.errors.len(),
            "load halted"
        );
        self
    }

    fn finish(mut self) -> Self {
        self.state = LoadState::Done;
        self
    }
}

/// Reads and infers; shared by [`run_load`] and [`plan_load`].
fn prepare(
    report: &mut LoadReport,
    source: &SourceOptions,
) -> Result<(LoadPlan, Vec<Vec<String>>), Vec<LoadError>> {
    let table = info_span!("read").in_scope(|| populate_rows(&source.csv_path));
    let table = table.map_err(|e| vec![e])?;
    report.advance(LoadState::RowsPopulated);

    let spec = info_span!("infer").in_scope(|| infer_schema(&table))?;
    let create = build_create_table(&source.table, &spec);
    let first_row = table.rows.first().cloned().unwrap_or_default();
    let plan = LoadPlan {
        table: source.table.clone(),
        headers: table.headers,
        spec,
        create,
        row_count: table.rows.len(),
        first_row,
    };
    Ok((plan, table.rows))
}

/// Runs the whole pipeline.
///
/// `connect` is called once, after the source has been read and its schema
/// inferred, so a bad file never opens a connection.
pub fn run_load<E, F>(options: &LoaderOptions, connect: F) -> LoadReport
where
    E: Executor,
    F: FnOnce(&ConnectionSettings) -> Result<E, ExecutorError>,
{
    let span = info_span!(
        "load",
        table = options.mysqltablename.as_deref().unwrap_or_default()
    );
    let _guard = span.enter();
    let start = Instant::now();
    let mut report = LoadReport::new();

    let verified = match info_span!("verify").in_scope(|| options.verify()) {
        Ok(verified) => verified,
        Err(errors) => return report.halt(errors),
    };
    report.advance(LoadState::OptionsVerified);

    let (plan, rows) = match prepare(&mut report, &verified.source) {
        Ok(prepared) => prepared,
        Err(errors) => return report.halt(errors),
    };

    let mut executor = match connect(&verified.connection) {
        Ok(executor) => executor,
        Err(e) => {
            return report.halt([LoadError::Connection { message: e.message }]);
        }
    };

    let created = info_span!("create", table = %plan.table)
        .in_scope(|| create_table(&mut executor, &plan.table, &plan.spec));
    if let Err(error) = created {
        report.plan = Some(plan);
        return report.halt([error]);
    }
    report.advance(LoadState::TableCreated);

    let inserted = info_span!("insert", table = %plan.table)
        .in_scope(|| insert_rows(&mut executor, &plan.table, &plan.spec, &rows));
    report.plan = Some(plan);
    match inserted {
        Ok(affected) => report.rows_inserted = affected,
        Err(error) => return report.halt([error]),
    }
    report.advance(LoadState::RowsInserted);

    info!(
        rows = report.rows_inserted,
        duration_ms = start.elapsed().as_millis(),
        "load complete"
    );
    report.finish()
}

/// Reads and infers without connecting to a database.
///
/// Only `csvfile` and `mysqltablename` are required.
pub fn plan_load(options: &LoaderOptions) -> LoadReport {
    let span = info_span!(
        "plan",
        table = options.mysqltablename.as_deref().unwrap_or_default()
    );
    let _guard = span.enter();
    let mut report = LoadReport::new();

    let source = match info_span!("verify").in_scope(|| options.verify_source()) {
        Ok(source) => source,
        Err(errors) => return report.halt(errors),
    };
    report.advance(LoadState::OptionsVerified);

    match prepare(&mut report, &source) {
        Ok((plan, _rows)) => {
            report.plan = Some(plan);
            report.finish()
        }
        Err(errors) => report.halt(errors),
    }
}
