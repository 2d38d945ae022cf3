//! Report formatting and printing utilities.
//!
//! This module provides functions to display issues in cargo-style format
//! or as JSON. Separate from core logic to allow sigil to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use super::{
    args::OutputFormat,
    commands::{CommandResult, CommandSummary, FixSummary, InitSummary},
};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Report, RuleId, Severity};
use crate::utils::pluralize;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to a writer.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let max_line_width = calculate_max_line_width(issues);

    for issue in issues {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(issues, writer);
}

/// Print a success message when no issues are found.
pub fn print_success_to<W: Write>(files_checked: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} {} - no issues found",
            files_checked,
            pluralize(files_checked, "file", "files")
        )
        .green()
    );
}

// ============================================================
// JSON Output
// ============================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonIssue<'a> {
    file: &'a str,
    line: Option<usize>,
    col: Option<usize>,
    rule: RuleId,
    severity: Severity,
    message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSummary {
    files_checked: usize,
    issues: usize,
    errors: usize,
    warnings: usize,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    issues: Vec<JsonIssue<'a>>,
    summary: JsonSummary,
}

/// Print issues as a JSON document.
pub fn print_json_to<W: Write>(issues: &[Issue], files_checked: usize, writer: &mut W) {
    let (errors, warnings) = count_by_severity(issues);
    let report = JsonReport {
        issues: issues
            .iter()
            .map(|issue| JsonIssue {
                file: issue.file_path(),
                line: issue.line(),
                col: issue.col(),
                rule: issue.report_rule(),
                severity: issue.report_severity(),
                message: issue.message(),
            })
            .collect(),
        summary: JsonSummary {
            files_checked,
            issues: issues.len(),
            errors,
            warnings,
        },
    };

    match serde_json::to_string_pretty(&report) {
        Ok(json) => {
            let _ = writeln!(writer, "{}", json);
        }
        Err(e) => {
            eprintln!("{} Failed to serialize report: {}", "error:".bold().red(), e);
        }
    }
}

// ============================================================
// Command Output
// ============================================================

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(
        result,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

pub fn print_to<W: Write, E: Write>(
    result: &CommandResult,
    verbose: bool,
    writer: &mut W,
    err_writer: &mut E,
) {
    match &result.summary {
        CommandSummary::Check => match result.format {
            OutputFormat::Json => print_json_to(&result.issues, result.files_checked, writer),
            OutputFormat::Text => {
                report_to(&result.issues, writer);
                if result.issues.is_empty() {
                    print_success_to(result.files_checked, writer);
                }
            }
        },
        CommandSummary::Fix(summary) => {
            report_to(&result.issues, writer);
            print_fix_to(summary, result.issues.is_empty(), result.files_checked, writer);
            if verbose && summary.is_apply && summary.file_count > 0 {
                let _ = writeln!(
                    err_writer,
                    "{} rewrote {} {}",
                    "note:".bold(),
                    summary.file_count,
                    pluralize(summary.file_count, "file", "files")
                );
            }
        }
        CommandSummary::Init(summary) => print_init_to(summary, writer),
    }
}

fn print_fix_to<W: Write>(
    summary: &FixSummary,
    clean: bool,
    files_checked: usize,
    writer: &mut W,
) {
    if summary.correction_count == 0 {
        if clean {
            print_success_to(files_checked, writer);
        }
        return;
    }

    if summary.is_apply {
        let _ = writeln!(
            writer,
            "{} {} empty {} in {} {}.",
            "Inserted".green().bold(),
            summary.correction_count,
            pluralize(summary.correction_count, "line", "lines"),
            summary.file_count,
            pluralize(summary.file_count, "file", "files")
        );
    } else {
        for op in &summary.operations {
            op.preview_to(writer);
        }
        let _ = writeln!(
            writer,
            "{} {} empty {} in {} {}.",
            "Would insert".yellow().bold(),
            summary.correction_count,
            pluralize(summary.correction_count, "line", "lines"),
            summary.file_count,
            pluralize(summary.file_count, "file", "files")
        );
        let _ = writeln!(writer, "Run with {} to rewrite these files.", "--apply".cyan());
    }
}

fn print_init_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    let file_path = issue.file_path();
    let (Some(line), Some(col)) = (issue.line(), issue.col()) else {
        let _ = writeln!(writer, "  {} {}", "-->".blue(), file_path);
        let _ = writeln!(writer);
        return;
    };

    // Clickable location uses 1-based columns
    let _ = writeln!(
        writer,
        "  {} {}:{}:{}",
        "-->".blue(),
        file_path,
        line,
        col + 1
    );

    if let Some(source_line) = issue.source_line() {
        let caret_char = match severity {
            Severity::Error => "^".red(),
            Severity::Warning => "^".yellow(),
        };

        let _ = writeln!(
            writer,
            "{:>width$} {}",
            "",
            "|".blue(),
            width = max_line_width
        );
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            line.to_string().blue(),
            "|".blue(),
            source_line,
            width = max_line_width
        );

        // Use unicode display width for correct positioning with CJK chars and emoji
        let prefix: String = source_line.chars().take(col).collect();
        let caret_padding = UnicodeWidthStr::width(prefix.as_str());
        let _ = writeln!(
            writer,
            "{:>width$} {} {:>padding$}{}",
            "",
            "|".blue(),
            "",
            caret_char,
            width = max_line_width,
            padding = caret_padding
        );
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let (total_errors, total_warnings) = count_by_severity(issues);
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            pluralize(total_problems, "problem", "problems"),
            total_errors,
            pluralize(total_errors, "error", "errors").red(),
            total_warnings,
            pluralize(total_warnings, "warning", "warnings").yellow()
        );
    }
}

fn count_by_severity(issues: &[Issue]) -> (usize, usize) {
    let errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    (errors, issues.len() - errors)
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| i.line())
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}
