//! Core types shared by every stage of a CSV-to-MySQL load.
//!
//! The crate carries no I/O. It defines the sanitized identifiers that end up
//! in generated SQL, the inferred per-column schema, the parameter bindings
//! handed to an executor, the loader options, and the error log that collects
//! every failure of a run.

pub mod binding;
pub mod error;
pub mod ids;
pub mod options;
pub mod schema;

pub use binding::{BindValue, Binding, BindingSet};
pub use error::{ErrorLog, LoadError, Result};
pub use ids::{ColumnName, TableName};
pub use options::{ConnectionSettings, LoaderOptions, OptionKey, SourceOptions, VerifiedOptions};
pub use schema::{COLUMN_WIDTH_BUFFER, ColumnKind, ColumnSchema, TableSpec};
