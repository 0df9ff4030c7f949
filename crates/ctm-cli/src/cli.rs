//! CLI argument definitions for the loader.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use ctm_model::LoaderOptions;

#[derive(Parser)]
#[command(
    name = "csv-to-mysql",
    version,
    about = "Load a CSV file into a new MySQL table",
    long_about = "Load a CSV file into a new MySQL table.\n\n\
                  The header row names the columns. Each column becomes INT when \
                  every value is numeric and VARCHAR otherwise, sized to its widest \
                  value plus three. All rows are inserted with one statement.",
    disable_help_flag = true
)]
pub struct Cli {
    /// The path of the CSV file to insert.
    #[arg(short = 'f', long = "csvfile", value_name = "PATH")]
    pub csvfile: Option<String>,

    /// Database host, optionally with a port (host:3306).
    #[arg(short = 'h', long = "dbhost", value_name = "HOST")]
    pub dbhost: Option<String>,

    /// Database username.
    #[arg(short = 'u', long = "dbusername", value_name = "USER")]
    pub dbusername: Option<String>,

    /// Database password.
    #[arg(short = 'p', long = "dbpassword", value_name = "PASSWORD")]
    pub dbpassword: Option<String>,

    /// Database name.
    #[arg(short = 'd', long = "dbname", value_name = "NAME")]
    pub dbname: Option<String>,

    /// Name of the table to create and fill.
    #[arg(short = 't', long = "mysqltablename", value_name = "TABLE")]
    pub mysqltablename: Option<String>,

    /// TOML file with any of the options above; flags take precedence.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Read the file and print the inferred table without connecting.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Display these help commands.
    #[arg(short = 'i', long = "help", action = ArgAction::Help)]
    pub help: Option<bool>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Allow cell values to appear in logs.
    #[arg(long = "log-data")]
    pub log_data: bool,
}

impl Cli {
    /// The loader options given as flags.
    pub fn loader_options(&self) -> LoaderOptions {
        LoaderOptions {
            csvfile: self.csvfile.clone(),
            dbhost: self.dbhost.clone(),
            dbusername: self.dbusername.clone(),
            dbpassword: self.dbpassword.clone(),
            dbname: self.dbname.clone(),
            mysqltablename: self.mysqltablename.clone(),
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
