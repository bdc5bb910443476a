//! Report formatting and printing utilities.
//!
//! Issues are printed in cargo-style blocks, one per file and rule, with
//! the offending keys listed in sorted order.

use std::io::{self, Write};

use colored::Colorize;

use super::run::CheckResult;
use crate::issues::{Issue, Report};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the outcome of a run to stdout.
pub fn print(result: &CheckResult) {
    report(&result.issues);

    if result.issues.is_empty() {
        print_success(result.localized_files_checked, result.source_files_checked);
    }
}

/// Print issues to stdout, in the order they were found.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    for issue in issues {
        print_issue(issue, writer);
    }

    print_summary(issues, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(localized_files: usize, source_files: usize) {
    print_success_to(localized_files, source_files, &mut io::stdout().lock());
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(localized_files: usize, source_files: usize, writer: &mut W) {
    let msg = format!(
        "Checked {} localized {}, {} source {} - no issues found",
        localized_files,
        plural(localized_files, "file", "files"),
        source_files,
        plural(source_files, "file", "files"),
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{}: {}  {}",
        "error".bold().red(),
        issue.label(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    let _ = writeln!(writer, "  {} {}", "-->".blue(), issue.file_path());

    for key in issue.keys() {
        let _ = writeln!(writer, "   {} {}", "=".blue(), key);
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_keys: usize = issues.iter().map(|i| i.keys().len()).sum();

    let _ = writeln!(
        writer,
        "{} {} {} ({} {})",
        FAILURE_MARK.red(),
        issues.len(),
        plural(issues.len(), "problem", "problems"),
        total_keys,
        plural(total_keys, "key", "keys").red()
    );
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
