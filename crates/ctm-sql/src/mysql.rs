//! MySQL executor backed by `sqlx`.
//!
//! Each call blocks on a private current-thread runtime, so the loader stays
//! fully synchronous. Named placeholders are rewritten to `?` at prepare time
//! and values are bound in the order the `?` appear.

use std::collections::HashMap;

use ctm_model::{BindValue, ConnectionSettings};
use sqlx::Connection;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use tokio::runtime::{Builder, Runtime};
use tracing::{debug, info};

use crate::executor::{Executor, ExecutorError, Result};
use crate::placeholders::to_positional;

/// A statement waiting for its values.
#[derive(Debug, Clone)]
pub struct MySqlStatement {
    sql: String,
    order: Vec<String>,
    values: HashMap<String, BindValue>,
}

/// One MySQL connection, held for the whole run.
pub struct MySqlExecutor {
    runtime: Runtime,
    connection: MySqlConnection,
}

impl MySqlExecutor {
    /// Opens a connection using `settings`.
    pub fn connect(settings: &ConnectionSettings) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ExecutorError::new(format!("failed to start runtime: {e}")))?;

        let (host, port) = settings.host_and_port();
        let mut options = MySqlConnectOptions::new()
            .host(host)
            .username(&settings.username)
            .password(&settings.password)
            .database(&settings.database);
        if let Some(port) = port {
            options = options.port(port);
        }

        let connection = runtime
            .block_on(MySqlConnection::connect_with(&options))
            .map_err(database_message)?;
        info!(host, database = %settings.database, "connected to MySQL");
        Ok(Self {
            runtime,
            connection,
        })
    }
}

/// Keeps only the server's message for database errors.
fn database_message(error: sqlx::Error) -> ExecutorError {
    match error.as_database_error() {
        Some(db) => ExecutorError::new(db.message()),
        None => ExecutorError::new(error.to_string()),
    }
}

impl Executor for MySqlExecutor {
    type Statement = MySqlStatement;

    fn prepare(&mut self, sql: &str) -> Result<MySqlStatement> {
        let positional = to_positional(sql);
        debug!(parameters = positional.order.len(), "prepared statement");
        Ok(MySqlStatement {
            sql: positional.text,
            order: positional.order,
            values: HashMap::new(),
        })
    }

    fn bind(
        &mut self,
        statement: &mut MySqlStatement,
        placeholder: &str,
        value: &BindValue,
    ) -> Result<()> {
        if !statement.order.iter().any(|name| name == placeholder) {
            return Err(ExecutorError::new(format!(
                "Invalid parameter number: :{placeholder} is not defined"
            )));
        }
        statement
            .values
            .insert(placeholder.to_string(), value.clone());
        Ok(())
    }

    fn execute(&mut self, statement: MySqlStatement) -> Result<u64> {
        let mut query = sqlx::query(&statement.sql);
        for name in &statement.order {
            let value = statement.values.get(name).ok_or_else(|| {
                ExecutorError::new(format!(
                    "Invalid parameter number: no value bound for :{name}"
                ))
            })?;
            query = match value {
                BindValue::Str(text) => query.bind(text.as_str()),
                BindValue::Int(number) => query.bind(*number),
                BindValue::Bool(flag) => query.bind(*flag),
                BindValue::Null => query.bind(None::<String>),
            };
        }
        let outcome = self
            .runtime
            .block_on(query.execute(&mut self.connection))
            .map_err(database_message)?;
        Ok(outcome.rows_affected())
    }
}
