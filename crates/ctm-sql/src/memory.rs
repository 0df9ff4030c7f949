//! An executor that keeps everything in memory.
//!
//! It understands just enough SQL to track which tables exist and how many
//! rows were inserted into each, and it enforces the binding contract: a
//! statement with an unbound placeholder is rejected at execution.

use std::collections::HashMap;

use ctm_model::{BindValue, BindingSet};
use tracing::debug;

use crate::executor::{Executor, ExecutorError, Result};
use crate::placeholders::named_placeholders;

/// A statement that executed successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutedStatement {
    pub text: String,
    pub bindings: BindingSet,
}

/// A statement prepared by [`MemoryExecutor`].
#[derive(Debug, Clone)]
pub struct MemoryStatement {
    text: String,
    placeholders: Vec<String>,
    bindings: BindingSet,
}

#[derive(Debug, Clone)]
struct ScriptedFailure {
    prefix: String,
    message: String,
}

/// In-memory [`Executor`].
#[derive(Debug, Default)]
pub struct MemoryExecutor {
    tables: HashMap<String, u64>,
    executed: Vec<ExecutedStatement>,
    failures: Vec<ScriptedFailure>,
}

impl MemoryExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with an existing, empty table.
    #[must_use]
    pub fn with_table(mut self, name: &str) -> Self {
        self.tables.insert(name.to_string(), 0);
        self
    }

    /// Makes the next statement starting with `prefix` fail with `message`.
    pub fn fail_next(&mut self, prefix: &str, message: &str) {
        self.failures.push(ScriptedFailure {
            prefix: prefix.to_string(),
            message: message.to_string(),
        });
    }

    /// Statements that executed successfully, oldest first.
    pub fn executed(&self) -> &[ExecutedStatement] {
        &self.executed
    }

    pub fn has_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Rows inserted into `table`, or `None` if it does not exist.
    pub fn row_count(&self, table: &str) -> Option<u64> {
        self.tables.get(table).copied()
    }

    fn take_failure(&mut self, text: &str) -> Option<ExecutorError> {
        let position = self
            .failures
            .iter()
            .position(|failure| text.starts_with(&failure.prefix))?;
        Some(ExecutorError::new(self.failures.remove(position).message))
    }

    fn apply(&mut self, text: &str) -> Result<u64> {
        if let Some(rest) = text.strip_prefix("CREATE TABLE ") {
            let table = leading_identifier(rest);
            if self.tables.contains_key(table) {
                return Err(ExecutorError::new(format!("Table '{table}' already exists")));
            }
            self.tables.insert(table.to_string(), 0);
            return Ok(0);
        }
        if let Some(rest) = text.strip_prefix("INSERT INTO ") {
            let table = leading_identifier(rest);
            let inserted = rest
                .split_once(" VALUES ")
                .map_or(0, |(_, groups)| groups.matches('(').count()) as u64;
            let Some(rows) = self.tables.get_mut(table) else {
                return Err(ExecutorError::new(format!("Table '{table}' doesn't exist")));
            };
            *rows += inserted;
            return Ok(inserted);
        }
        Ok(0)
    }
}

fn leading_identifier(text: &str) -> &str {
    let end = text
        .find(|c: char| c.is_whitespace() || c == '(')
        .unwrap_or(text.len());
    &text[..end]
}

impl Executor for MemoryExecutor {
    type Statement = MemoryStatement;

    fn prepare(&mut self, sql: &str) -> Result<MemoryStatement> {
        let text = sql.trim();
        if text.is_empty() {
            return Err(ExecutorError::new("Query was empty"));
        }
        Ok(MemoryStatement {
            text: text.to_string(),
            placeholders: named_placeholders(text),
            bindings: BindingSet::new(),
        })
    }

    fn bind(
        &mut self,
        statement: &mut MemoryStatement,
        placeholder: &str,
        value: &BindValue,
    ) -> Result<()> {
        if !statement.placeholders.iter().any(|name| name == placeholder) {
            return Err(ExecutorError::new(format!(
                "Invalid parameter number: :{placeholder} is not defined"
            )));
        }
        statement.bindings.insert(placeholder, value.clone());
        Ok(())
    }

    fn execute(&mut self, statement: MemoryStatement) -> Result<u64> {
        if let Some(error) = self.take_failure(&statement.text) {
            return Err(error);
        }
        if let Some(unbound) = statement
            .placeholders
            .iter()
            .find(|name| !statement.bindings.contains(name))
        {
            return Err(ExecutorError::new(format!(
                "Invalid parameter number: no value bound for :{unbound}"
            )));
        }
        let affected = self.apply(&statement.text)?;
        debug!(affected, "memory executor ran statement");
        self.executed.push(ExecutedStatement {
            text: statement.text,
            bindings: statement.bindings,
        });
        Ok(affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::run_statement;
    use crate::statement::SqlStatement;

    #[test]
    fn create_then_insert_tracks_rows() {
        let mut executor = MemoryExecutor::new();
        run_statement(&mut executor, &SqlStatement::new("CREATE TABLE t (a INT(4))")).unwrap();

        let mut bindings = BindingSet::new();
        bindings.insert("r0_c0", "1");
        bindings.insert("r1_c0", "2");
        let insert =
            SqlStatement::new("INSERT INTO t (a) VALUES (:r0_c0),(:r1_c0)").with_bindings(bindings);
        assert_eq!(run_statement(&mut executor, &insert).unwrap(), 2);

        assert_eq!(executor.row_count("t"), Some(2));
        assert_eq!(executor.executed().len(), 2);
    }

    #[test]
    fn duplicate_table_is_rejected() {
        let mut executor = MemoryExecutor::new().with_table("t");
        let err = run_statement(&mut executor, &SqlStatement::new("CREATE TABLE t (a INT(4))"))
            .unwrap_err();
        assert_eq!(err.message, "Table 't' already exists");
    }

    #[test]
    fn insert_into_missing_table_is_rejected() {
        let mut executor = MemoryExecutor::new();
        let mut bindings = BindingSet::new();
        bindings.insert("r0_c0", "1");
        let insert =
            SqlStatement::new("INSERT INTO t (a) VALUES (:r0_c0)").with_bindings(bindings);
        let err = run_statement(&mut executor, &insert).unwrap_err();
        assert_eq!(err.message, "Table 't' doesn't exist");
    }

    #[test]
    fn unbound_placeholder_fails_execution() {
        let mut executor = MemoryExecutor::new().with_table("t");
        let mut statement = executor
            .prepare("INSERT INTO t (a,b) VALUES (:r0_c0,:r0_c1)")
            .unwrap();
        executor
            .bind(&mut statement, "r0_c0", &BindValue::from("x"))
            .unwrap();
        let err = executor.execute(statement).unwrap_err();
        assert!(err.message.contains(":r0_c1"));
        assert!(executor.executed().is_empty());
    }

    #[test]
    fn binding_unknown_placeholder_fails() {
        let mut executor = MemoryExecutor::new();
        let mut statement = executor.prepare("INSERT INTO t (a) VALUES (:r0_c0)").unwrap();
        let err = executor
            .bind(&mut statement, "r9_c9", &BindValue::Null)
            .unwrap_err();
        assert!(err.message.contains(":r9_c9"));
    }

    #[test]
    fn scripted_failure_fires_once() {
        let mut executor = MemoryExecutor::new();
        executor.fail_next("CREATE TABLE", "Access denied for user 'loader'");
        let ddl = SqlStatement::new("CREATE TABLE t (a INT(4))");

        let err = run_statement(&mut executor, &ddl).unwrap_err();
        assert_eq!(err.to_string(), "Access denied for user 'loader'");
        assert!(!executor.has_table("t"));

        run_statement(&mut executor, &ddl).unwrap();
        assert!(executor.has_table("t"));
    }
}
