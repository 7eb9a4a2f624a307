// rolesieve/src/ui/output_format.rs
//! Formatting of user-facing messages and the end-of-run summary.
//!
//! Everything is written to a caller-supplied writer so tests can capture it.
//! Colors are applied only when the caller says the writer supports them.

use owo_colors::OwoColorize;
use std::io::{self, Write};

use crate::commands::build::RoleReport;

pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{}", msg.cyan())
    } else {
        writeln!(writer, "{}", msg)
    }
}

pub fn print_success_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{}", msg.green())
    } else {
        writeln!(writer, "{}", msg)
    }
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "error:".red().bold(), msg)
    } else {
        writeln!(writer, "error: {}", msg)
    }
}

/// Prints one line per built role.
pub fn print_build_summary<W: Write>(
    writer: &mut W,
    reports: &[RoleReport],
    supports_color: bool,
) -> io::Result<()> {
    print_info_message(writer, "--- Build Summary ---", supports_color)?;
    for report in reports {
        let line = format!(
            "{}: {} document(s) -> {} ({} region(s) kept, {} dropped, {} excluded line(s), {} empty wrapper(s) removed, style {})",
            report.role,
            report.documents,
            report.output_dir.display(),
            report.summary.regions_kept(),
            report.summary.regions_dropped(),
            report.summary.exclude_lines,
            report.summary.wrappers_removed,
            if report.style_copied { "copied" } else { "not found" },
        );
        if supports_color {
            writeln!(writer, "  {}", line.bold())?;
        } else {
            writeln!(writer, "  {}", line)?;
        }
    }
    print_success_message(writer, &format!("Built {} role(s).", reports.len()), supports_color)
}
