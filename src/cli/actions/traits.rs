//! Action trait definition.
//!
//! Actions convert scanned inputs into Operations.

use std::collections::HashSet;

use anyhow::Result;

use super::operation::Operation;

/// Statistics from running an action.
#[derive(Debug, Clone, Default)]
pub struct ActionStats {
    /// Number of operations processed.
    pub processed: usize,
    /// Number of operations skipped (file already up to date or changed since the scan).
    pub skipped: usize,
    /// Number of changes actually applied to files.
    pub changes_applied: usize,
    /// Number of files modified.
    pub files_modified: usize,
}

/// Action trait - converts inputs into Operations and executes them.
///
/// # Example
///
/// ```ignore
/// let action = Autocorrect::new(ctx.registry());
/// let stats = action.run(&sources.files)?;
/// ```
pub trait Action<I> {
    /// Convert inputs to low-level operations.
    ///
    /// This is the only method that must be implemented.
    fn to_operations(&self, items: &[I]) -> Vec<Operation>;

    /// Execute the action (modify files).
    fn run(&self, items: &[I]) -> Result<ActionStats> {
        let ops = self.to_operations(items);
        execute_operations(&ops)
    }
}

fn execute_operations(ops: &[Operation]) -> Result<ActionStats> {
    let mut stats = ActionStats {
        processed: ops.len(),
        ..Default::default()
    };
    let mut files_modified: HashSet<&str> = HashSet::new();

    for op in ops {
        if op.execute()?.is_applied() {
            stats.changes_applied += op.correction_count();
            files_modified.insert(op.file_path());
        } else {
            stats.skipped += 1;
        }
    }

    stats.files_modified = files_modified.len();
    Ok(stats)
}
