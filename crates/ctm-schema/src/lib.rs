//! Schema inference for loaded CSV data.
//!
//! A single pass over every data cell decides, per column, whether the
//! column is numeric and how wide it must be. See [`inference`] for the
//! rules and [`numeric`] for what counts as a number.

pub mod inference;
pub mod numeric;

pub use inference::{build_table_spec, check_column_names, infer_table_spec};
pub use numeric::is_numeric_literal;
