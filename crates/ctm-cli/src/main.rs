//! CSV-to-MySQL loader CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use ctm_cli::cli::{Cli, LogFormatArg, LogLevelArg};
use ctm_cli::config::resolve_options;
use ctm_cli::logging::{LogConfig, LogFormat, init_logging, redact_value};
use ctm_cli::report::render_error_report;
use ctm_cli::summary::{print_load_success, print_plan};
use ctm_core::{LoadReport, plan_load, run_load};
use ctm_sql::MySqlExecutor;
use tracing::level_filters::LevelFilter;
use tracing::trace;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(report) => {
            if report.is_success() {
                0
            } else {
                eprint!("{}", render_error_report(&report.errors, report_in_color(&cli)));
                1
            }
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<LoadReport> {
    let options = resolve_options(cli.config.as_deref(), &cli.loader_options())?;
    let report = if cli.dry_run {
        plan_load(&options)
    } else {
        run_load(&options, MySqlExecutor::connect)
    };
    if let Some(plan) = report.plan.as_ref() {
        let first_row: Vec<&str> = plan.first_row.iter().map(|v| redact_value(v)).collect();
        trace!(?first_row, "first data row");
    }
    if report.is_success() {
        if cli.dry_run {
            if let Some(plan) = report.plan.as_ref() {
                print_plan(plan);
            }
        } else {
            print_load_success(&report);
        }
    }
    Ok(report)
}

fn report_in_color(cli: &Cli) -> bool {
    match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stderr().is_terminal(),
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
