use std::{
    cell::OnceCell,
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Result;
use colored::Colorize;
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        file_scanner::{scan_files, scan_paths},
        source::SourceFile,
    },
    issues::{Issue, ParseErrorIssue, ViolationIssue, compare_issues},
    rules::RuleRegistry,
    utils::display_path,
};

/// Source files read from disk, plus the ones that could not be read.
#[derive(Debug, Default)]
pub struct LoadedSources {
    pub files: Vec<SourceFile>,
    pub errors: Vec<ParseErrorIssue>,
}

/// Everything a command needs to lint a project.
///
/// Files are discovered eagerly; reading them is deferred to the first call
/// to [`CheckContext::sources`], so `init`-like paths never touch the tree.
///
/// # Configuration Priority
///
/// 1. CLI arguments (explicit paths, `--source-root`)
/// 2. `.sigilrc.json` config file
/// 3. Built-in defaults
pub struct CheckContext {
    /// Configuration from the config file or defaults.
    pub config: Config,

    /// Project root directory (config lookup and `includes` base).
    pub root_dir: PathBuf,

    /// All Ruby files to lint, display paths, sorted.
    pub files: BTreeSet<String>,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,

    registry: RuleRegistry,

    sources: OnceCell<LoadedSources>,
}

impl CheckContext {
    /// Create a new `CheckContext` from command line arguments.
    ///
    /// # Errors
    ///
    /// Returns error if the config file cannot be read, parsed or validated.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;
        let root_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root_dir)?;
        if verbose {
            match &config_result.path {
                Some(path) => eprintln!("{} Using {}", "note:".bold(), path.display()),
                None => eprintln!(
                    "{} No {} found, using default configuration",
                    "note:".bold(),
                    CONFIG_FILE_NAME
                ),
            }
        }
        let config = config_result.config;

        let filter = config.file_filter();
        let scan_result = if common_args.paths.is_empty() {
            scan_files(
                &root_dir,
                &config.includes,
                &config.ignores,
                &filter,
                verbose,
            )
        } else {
            scan_paths(&common_args.paths, &config.ignores, &filter, verbose)
        };

        if scan_result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        let files = scan_result
            .files
            .iter()
            .map(|path| display_path(path).to_string())
            .collect();
        let registry = RuleRegistry::new(&config);

        Ok(Self {
            config,
            root_dir,
            files,
            verbose,
            registry,
            sources: OnceCell::new(),
        })
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Read and scan all files (lazy initialization, parallel).
    pub fn sources(&self) -> &LoadedSources {
        self.sources.get_or_init(|| {
            let results: Vec<Result<SourceFile, ParseErrorIssue>> =
                self.files.par_iter().map(|path| read_source(path)).collect();

            let mut loaded = LoadedSources::default();
            for result in results {
                match result {
                    Ok(file) => loaded.files.push(file),
                    Err(error) => {
                        if self.verbose {
                            eprintln!(
                                "{} Cannot read {}: {}",
                                "warning:".bold().yellow(),
                                error.file_path,
                                error.error
                            );
                        }
                        loaded.errors.push(error);
                    }
                }
            }
            loaded
        })
    }

    /// Run every rule on every file. Unreadable files become parse errors.
    pub fn check(&self) -> Vec<Issue> {
        let sources = self.sources();
        let registry = &self.registry;

        let mut issues: Vec<Issue> = sources
            .files
            .par_iter()
            .flat_map_iter(|file| {
                registry
                    .detect(file)
                    .into_iter()
                    .map(move |violation| {
                        let source_line = file.line(violation.line);
                        Issue::Violation(ViolationIssue::from_violation(
                            &file.path,
                            violation,
                            source_line.as_deref(),
                        ))
                    })
            })
            .collect();

        issues.extend(sources.errors.iter().cloned().map(Issue::ParseError));
        issues.sort_by(compare_issues);
        issues
    }

    pub fn parse_error_count(&self) -> usize {
        self.sources().errors.len()
    }
}

fn read_source(path: &str) -> Result<SourceFile, ParseErrorIssue> {
    let to_issue = |error: String| ParseErrorIssue {
        file_path: path.to_string(),
        error,
    };
    let content = fs::read(Path::new(path)).map_err(|e| to_issue(e.to_string()))?;
    Ok(SourceFile::parse(path, content))
}
