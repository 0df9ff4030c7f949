//! The database seam.

use ctm_model::BindValue;
use thiserror::Error;
use tracing::debug;

use crate::statement::SqlStatement;

/// A statement rejected by the executor.
///
/// `message` is the executor's own wording and is reported verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ExecutorError {
    pub message: String,
}

impl ExecutorError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result type for executor operations.
pub type Result<T> = std::result::Result<T, ExecutorError>;

/// Runs SQL text with named placeholders.
///
/// Placeholders are written `:name` in the text and addressed as `name`
/// when binding. Every placeholder in the text must be bound before
/// [`execute`](Executor::execute); binding order does not matter.
pub trait Executor {
    /// A prepared statement and the values bound to it so far.
    type Statement;

    fn prepare(&mut self, sql: &str) -> Result<Self::Statement>;

    fn bind(
        &mut self,
        statement: &mut Self::Statement,
        placeholder: &str,
        value: &BindValue,
    ) -> Result<()>;

    /// Runs the statement, returning the number of affected rows.
    fn execute(&mut self, statement: Self::Statement) -> Result<u64>;
}

impl<E> Executor for &mut E
where
    E: Executor + ?Sized,
{
    type Statement = E::Statement;

    fn prepare(&mut self, sql: &str) -> Result<Self::Statement> {
        (**self).prepare(sql)
    }

    fn bind(
        &mut self,
        statement: &mut Self::Statement,
        placeholder: &str,
        value: &BindValue,
    ) -> Result<()> {
        (**self).bind(statement, placeholder, value)
    }

    fn execute(&mut self, statement: Self::Statement) -> Result<u64> {
        (**self).execute(statement)
    }
}

/// Prepares `statement`, binds all of its values, and executes it.
pub fn run_statement<E>(executor: &mut E, statement: &SqlStatement) -> Result<u64>
where
    E: Executor + ?Sized,
{
    debug!(
        sql_len = statement.text.len(),
        placeholders = statement.bindings.len(),
        "executing statement"
    );
    let mut prepared = executor.prepare(&statement.text)?;
    for binding in &statement.bindings {
        executor.bind(&mut prepared, &binding.placeholder, &binding.value)?;
    }
    executor.execute(prepared)
}
