//! CLI library components for the CSV-to-MySQL loader.

pub mod cli;
pub mod config;
pub mod logging;
pub mod report;
pub mod summary;
