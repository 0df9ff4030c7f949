//! SQL statement construction and execution.
//!
//! - [`build_create_table`] turns a [`TableSpec`](ctm_model::TableSpec) into DDL.
//! - [`build_insert`] turns every data row into one multi-row `INSERT` with a
//!   named placeholder per cell and a matching [`BindingSet`](ctm_model::BindingSet).
//! - [`Executor`] is the narrow seam to a database: prepare, bind, execute.
//!   [`MemoryExecutor`] implements it in memory; `MySqlExecutor` (feature
//!   `mysql`) talks to a server.

pub mod ddl;
pub mod executor;
pub mod insert;
pub mod memory;
#[cfg(feature = "mysql")]
pub mod mysql;
pub mod placeholders;
pub mod statement;

pub use ddl::build_create_table;
pub use executor::{Executor, ExecutorError, Result, run_statement};
pub use insert::{MYSQL_MAX_PLACEHOLDERS, build_insert, placeholder_name};
pub use memory::{ExecutedStatement, MemoryExecutor};
#[cfg(feature = "mysql")]
pub use mysql::MySqlExecutor;
pub use placeholders::{PositionalSql, named_placeholders, to_positional};
pub use statement::SqlStatement;
