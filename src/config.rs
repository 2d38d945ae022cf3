use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::directive::{DEFAULT_MAGIC_COMMENTS, DirectiveSet};
use crate::core::file_scanner::{FileFilter, is_glob_pattern};

pub const CONFIG_FILE_NAME: &str = ".sigilrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_file_names")]
    pub file_names: Vec<String>,
    /// Magic comment keys treated as directives.
    #[serde(default = "default_magic_comments", alias = "directives")]
    pub magic_comments: Vec<String>,
}

fn default_ignores() -> Vec<String> {
    ["**/vendor/**", "**/node_modules/**", "**/.git/**"]
        .map(String::from)
        .to_vec()
}

fn default_extensions() -> Vec<String> {
    ["rb", "rake", "ru", "rbi", "gemspec"]
        .map(String::from)
        .to_vec()
}

fn default_file_names() -> Vec<String> {
    ["Gemfile", "Rakefile"].map(String::from).to_vec()
}

fn default_magic_comments() -> Vec<String> {
    DEFAULT_MAGIC_COMMENTS
        .iter()
        .map(|key| key.to_string())
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: default_ignores(),
            includes: Vec::new(),
            extensions: default_extensions(),
            file_names: default_file_names(),
            magic_comments: default_magic_comments(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` or `includes` is
    /// invalid, or if `magicComments` has no usable key.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            if is_glob_pattern(pattern) {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'ignores': \"{}\"", pattern)
                })?;
            }
        }

        for pattern in &self.includes {
            if is_glob_pattern(pattern) {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        if self.directive_set().is_empty() {
            bail!("'magicComments' must list at least one magic comment key");
        }

        Ok(())
    }

    pub fn directive_set(&self) -> DirectiveSet {
        DirectiveSet::new(&self.magic_comments)
    }

    pub fn file_filter(&self) -> FileFilter {
        FileFilter {
            extensions: self
                .extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect(),
            file_names: self.file_names.clone(),
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
