//! Ruby source file discovery.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
pub fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Which files count as Ruby sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    /// Extensions without the leading dot (`rb`, `rake`, ...).
    pub extensions: Vec<String>,
    /// Exact file names (`Gemfile`, `Rakefile`, ...).
    pub file_names: Vec<String>,
}

impl FileFilter {
    pub fn matches(&self, path: &Path) -> bool {
        let by_extension = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext));
        let by_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| self.file_names.iter().any(|n| n == name));
        by_extension || by_name
    }
}

/// Result of scanning files.
pub struct ScanResult {
    pub files: BTreeSet<String>,
    pub skipped_count: usize,
}

/// Compiled ignore rules: glob patterns plus literal path prefixes.
struct IgnoreRules {
    literal_paths: Vec<PathBuf>,
    patterns: Vec<Pattern>,
}

impl IgnoreRules {
    fn new(base_dir: &Path, ignore_patterns: &[String], verbose: bool) -> Self {
        let mut literal_paths = Vec::new();
        let mut patterns = Vec::new();

        for p in ignore_patterns {
            if is_glob_pattern(p) {
                match Pattern::new(p) {
                    Ok(pattern) => patterns.push(pattern),
                    Err(e) => {
                        if verbose {
                            eprintln!(
                                "{} Invalid ignore pattern '{}': {}",
                                "warning:".bold().yellow(),
                                p,
                                e
                            );
                        }
                    }
                }
            } else {
                literal_paths.push(base_dir.join(p));
            }
        }

        Self {
            literal_paths,
            patterns,
        }
    }

    fn is_ignored(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.literal_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
            || self.patterns.iter().any(|p| p.matches(&path_str))
    }
}

/// Collect Ruby files under `base_dir`.
///
/// `includes` narrows the scan to directories (literal paths or globs
/// relative to `base_dir`); empty means the whole `base_dir`.
pub fn scan_files(
    base_dir: &Path,
    includes: &[String],
    ignore_patterns: &[String],
    filter: &FileFilter,
    verbose: bool,
) -> ScanResult {
    let mut files = BTreeSet::new();
    let mut skipped_count = 0;
    let ignores = IgnoreRules::new(base_dir, ignore_patterns, verbose);

    for dir in dirs_to_scan(base_dir, includes, verbose) {
        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };
            let path = entry.path();

            if ignores.is_ignored(path) {
                continue;
            }

            if entry.file_type().is_file() && filter.matches(path) {
                files.insert(path.to_string_lossy().into_owned());
            }
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}

/// Collect files from explicit command-line paths.
///
/// A path naming a file is taken as-is, whatever its extension. A directory
/// is scanned like the project root.
pub fn scan_paths(
    paths: &[PathBuf],
    ignore_patterns: &[String],
    filter: &FileFilter,
    verbose: bool,
) -> ScanResult {
    let mut files = BTreeSet::new();
    let mut skipped_count = 0;

    for path in paths {
        if path.is_file() {
            files.insert(path.to_string_lossy().into_owned());
        } else if path.is_dir() {
            let result = scan_files(path, &[], ignore_patterns, filter, verbose);
            files.extend(result.files);
            skipped_count += result.skipped_count;
        } else {
            skipped_count += 1;
            if verbose {
                eprintln!(
                    "{} Path does not exist: {}",
                    "warning:".bold().yellow(),
                    path.display()
                );
            }
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}

fn dirs_to_scan(base_dir: &Path, includes: &[String], verbose: bool) -> Vec<PathBuf> {
    if includes.is_empty() {
        return vec![base_dir.to_path_buf()];
    }

    let mut paths = Vec::new();
    for inc in includes {
        if is_glob_pattern(inc) {
            let full_pattern = base_dir.join(inc);
            let pattern_str = full_pattern.to_string_lossy();
            match glob(&pattern_str) {
                Ok(entries) => {
                    paths.extend(entries.flatten().filter(|entry| entry.is_dir()));
                }
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid glob pattern '{}': {}",
                            "warning:".bold().yellow(),
                            inc,
                            e
                        );
                    }
                }
            }
        } else {
            let path = base_dir.join(inc);
            if path.exists() {
                paths.push(path);
            } else if verbose {
                eprintln!(
                    "{} Include path does not exist: {}",
                    "warning:".bold().yellow(),
                    path.display()
                );
            }
        }
    }
    paths
}

#[cfg(test)]
mod tests {
    use std::fs::{self, File};

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    fn ruby_filter() -> FileFilter {
        FileFilter {
            extensions: vec!["rb".to_string(), "rake".to_string()],
            file_names: vec!["Gemfile".to_string()],
        }
    }

    #[test]
    fn test_scan_ruby_files() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        File::create(dir_path.join("app.rb")).unwrap();
        File::create(dir_path.join("tasks.rake")).unwrap();
        File::create(dir_path.join("Gemfile")).unwrap();
        File::create(dir_path.join("README.md")).unwrap();

        let result = scan_files(dir_path, &[], &[], &ruby_filter(), false);

        assert_eq!(result.files.len(), 3);
        assert!(result.files.iter().any(|f| f.ends_with("app.rb")));
        assert!(result.files.iter().any(|f| f.ends_with("tasks.rake")));
        assert!(result.files.iter().any(|f| f.ends_with("Gemfile")));
        assert!(!result.files.iter().any(|f| f.ends_with("README.md")));
    }

    #[test]
    fn test_scan_ignores_vendor() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        let vendor = dir_path.join("vendor").join("bundle");
        fs::create_dir_all(&vendor).unwrap();
        File::create(vendor.join("gem.rb")).unwrap();
        File::create(dir_path.join("app.rb")).unwrap();

        let result = scan_files(
            dir_path,
            &[],
            &["**/vendor/**".to_owned()],
            &ruby_filter(),
            false,
        );

        assert_eq!(result.files.len(), 1);
        assert!(!result.files.iter().any(|f| f.contains("vendor")));
    }

    #[test]
    fn test_scan_literal_ignore() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        let generated = dir_path.join("generated");
        fs::create_dir(&generated).unwrap();
        File::create(generated.join("schema.rb")).unwrap();
        File::create(dir_path.join("app.rb")).unwrap();

        let result = scan_files(
            dir_path,
            &[],
            &["generated".to_owned()],
            &ruby_filter(),
            false,
        );

        assert_eq!(result.files.len(), 1);
        assert!(result.files.iter().any(|f| f.ends_with("app.rb")));
    }

    #[test]
    fn test_scan_with_includes() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        let app = dir_path.join("app");
        fs::create_dir(&app).unwrap();
        File::create(app.join("user.rb")).unwrap();

        let spec = dir_path.join("spec");
        fs::create_dir(&spec).unwrap();
        File::create(spec.join("user_spec.rb")).unwrap();

        let result = scan_files(dir_path, &["app".to_owned()], &[], &ruby_filter(), false);

        assert_eq!(result.files.len(), 1);
        assert!(result.files.iter().any(|f| f.ends_with("app/user.rb")));
    }

    #[test]
    fn test_scan_with_glob_includes() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        for name in ["core", "web"] {
            let lib = dir_path.join("packs").join(name).join("lib");
            fs::create_dir_all(&lib).unwrap();
            File::create(lib.join("thing.rb")).unwrap();
        }
        File::create(dir_path.join("top.rb")).unwrap();

        let result = scan_files(
            dir_path,
            &["packs/*/lib".to_owned()],
            &[],
            &ruby_filter(),
            false,
        );

        assert_eq!(result.files.len(), 2);
        assert!(!result.files.iter().any(|f| f.ends_with("top.rb")));
    }

    #[test]
    fn test_scan_paths_mixes_files_and_dirs() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        let lib = dir_path.join("lib");
        fs::create_dir(&lib).unwrap();
        File::create(lib.join("a.rb")).unwrap();
        File::create(dir_path.join("script")).unwrap();

        let result = scan_paths(
            &[lib, dir_path.join("script"), dir_path.join("missing")],
            &[],
            &ruby_filter(),
            false,
        );

        assert_eq!(result.files.len(), 2);
        assert_eq!(result.skipped_count, 1);
        assert!(result.files.iter().any(|f| f.ends_with("script")));
    }

    #[test]
    fn test_file_filter() {
        let filter = ruby_filter();
        assert!(filter.matches(Path::new("app.rb")));
        assert!(filter.matches(Path::new("lib/tasks/db.rake")));
        assert!(filter.matches(Path::new("Gemfile")));
        assert!(!filter.matches(Path::new("Gemfile.lock")));
        assert!(!filter.matches(Path::new("app.py")));
        assert!(!filter.matches(Path::new("rb")));
    }
}
