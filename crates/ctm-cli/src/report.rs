//! The end-of-run error report.

use std::fmt::Write;

use ctm_model::ErrorLog;

const RULE: &str = "------------------------------------------------------";
const RED: &str = "\x1b[1;31m";
const RESET: &str = "\x1b[0m";

/// Renders every recorded error as `[index]: message`, numbered from 0.
///
/// Returns an empty string for an empty log. With `colored`, the whole
/// report is wrapped in a bold red ANSI sequence.
pub fn render_error_report(errors: &ErrorLog, colored: bool) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    if colored {
        out.push_str(RED);
    }
    out.push_str(RULE);
    out.push('\n');
    out.push_str("There were errors while running the script as below:\n");
    out.push_str(RULE);
    out.push('\n');
    for (idx, error) in errors.iter().enumerate() {
        let _ = writeln!(out, "[{idx}]: {error}");
    }
    if colored {
        out.push_str(RESET);
    }
    out
}
