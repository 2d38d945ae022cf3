//! Low-level file operations produced by actions.

use std::{fs, io::Write};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::issues::Violation;

/// Outcome of executing an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationResult {
    Applied,
    /// The file already has the target content.
    Skipped,
    /// The file changed on disk after it was scanned; left untouched.
    Stale,
}

impl OperationResult {
    pub fn is_applied(&self) -> bool {
        matches!(self, OperationResult::Applied)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Replace a file's content with its corrected version.
    RewriteFile {
        file_path: String,
        /// Content the corrections were computed from.
        original: Vec<u8>,
        content: Vec<u8>,
        /// Corrections that produced `content`.
        corrections: Vec<Violation>,
    },
}

impl Operation {
    pub fn file_path(&self) -> &str {
        match self {
            Operation::RewriteFile { file_path, .. } => file_path,
        }
    }

    pub fn correction_count(&self) -> usize {
        match self {
            Operation::RewriteFile { corrections, .. } => corrections.len(),
        }
    }

    pub fn execute(&self) -> Result<OperationResult> {
        match self {
            Operation::RewriteFile {
                file_path,
                original,
                content,
                ..
            } => {
                let current = fs::read(file_path)
                    .with_context(|| format!("Failed to read file: {}", file_path))?;
                if current == *content {
                    return Ok(OperationResult::Skipped);
                }
                if current != *original {
                    eprintln!(
                        "{} {} changed since it was checked, skipping",
                        "warning:".bold().yellow(),
                        file_path
                    );
                    return Ok(OperationResult::Stale);
                }
                fs::write(file_path, content)
                    .with_context(|| format!("Failed to write file: {}", file_path))?;
                Ok(OperationResult::Applied)
            }
        }
    }

    /// Describe the change without touching the file.
    pub fn preview_to<W: Write>(&self, writer: &mut W) {
        match self {
            Operation::RewriteFile {
                file_path,
                corrections,
                ..
            } => {
                for correction in corrections {
                    let _ = writeln!(
                        writer,
                        "  {} {}:{}:{}  {}",
                        "-->".blue(),
                        file_path,
                        correction.line,
                        correction.col + 1,
                        format!("[{}]", correction.rule).dimmed().cyan()
                    );
                    let _ = writeln!(
                        writer,
                        "   {} insert empty line before line {}",
                        "=".blue(),
                        correction.line
                    );
                }
            }
        }
    }
}
