//! Common utility functions shared across the codebase.

use std::path::Path;

/// Pick the singular or plural form for a count.
///
/// # Examples
///
/// ```
/// use sigil::utils::pluralize;
///
/// assert_eq!(pluralize(1, "file", "files"), "file");
/// assert_eq!(pluralize(0, "file", "files"), "files");
/// assert_eq!(pluralize(3, "file", "files"), "files");
/// ```
pub fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

/// Path for display, without a leading `./`.
pub fn display_path(path: &str) -> &str {
    let stripped = Path::new(path)
        .strip_prefix(".")
        .ok()
        .and_then(|p| p.to_str());
    match stripped {
        Some(rest) if !rest.is_empty() => rest,
        _ => path,
    }
}
