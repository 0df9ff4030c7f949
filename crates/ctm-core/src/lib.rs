//! Orchestration of a CSV-to-MySQL load.
//!
//! [`run_load`] drives the full pipeline against any
//! [`Executor`](ctm_sql::Executor); [`plan_load`] stops after inference and
//! never touches a database. Both return a [`LoadReport`] carrying the final
//! state and every recorded error.

pub mod loader;
pub mod stages;

pub use loader::{LoadPlan, LoadReport, LoadState, plan_load, run_load};
pub use stages::{create_table, infer_schema, insert_rows, populate_rows};
