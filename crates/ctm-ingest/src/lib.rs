//! Source file ingestion.
//!
//! Reads a comma-delimited file in one pass. The first record becomes the
//! header row, which is sanitized into column names; every later record is a
//! data row kept verbatim for inference and binding.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use ctm_ingest::read_source_table;
//!
//! let table = read_source_table(Path::new("people.csv"))?;
//! println!("{} columns, {} rows", table.width(), table.height());
//! ```

mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{CsvHeaders, SourceTable, read_source_table};
