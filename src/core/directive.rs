//! Magic comment ("directive") recognition.
//!
//! Ruby tooling treats a handful of header comments as file-scope pragmas.
//! Three shapes are recognized:
//! - simple: `# frozen_string_literal: true`
//! - Emacs: `# -*- encoding: utf-8; frozen_string_literal: true -*-`
//! - Vim: `# vim: set fileencoding=utf-8 :` (encoding only)
//!
//! Which keys count is configurable (`magicComments` in `.sigilrc.json`),
//! the shapes are not.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// Keys recognized when no configuration overrides them.
pub const DEFAULT_MAGIC_COMMENTS: &[&str] = &[
    "encoding",
    "coding",
    "frozen_string_literal",
    "shareable_constant_value",
    "warn_indent",
    "warn_past_scope",
];

static SIMPLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z][A-Za-z0-9_-]*)\s*:\s*\S").unwrap());

static EMACS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-\*-(.*?)-\*-").unwrap());

static EMACS_PAIR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([A-Za-z][A-Za-z0-9_-]*)\s*:\s*\S").unwrap());

static VIM_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^vim:\s*(.*)$").unwrap());

/// Vim option names that declare the file encoding.
const VIM_ENCODING_OPTIONS: &[&str] = &["fileencoding", "fenc"];

/// Set of magic comment keys treated as directives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveSet {
    keys: BTreeSet<String>,
}

impl Default for DirectiveSet {
    fn default() -> Self {
        Self::new(DEFAULT_MAGIC_COMMENTS)
    }
}

impl DirectiveSet {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keys: keys
                .into_iter()
                .map(|key| normalize_key(key.as_ref()))
                .filter(|key| !key.is_empty())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Check a key (case-insensitive, `-` and `_` are interchangeable).
    pub fn contains_key(&self, key: &str) -> bool {
        self.keys.contains(&normalize_key(key))
    }

    /// Check whether comment content (marker already stripped) is a
    /// recognized magic comment.
    pub fn matches(&self, content: &str) -> bool {
        let content = content.trim();

        if let Some(caps) = SIMPLE_REGEX.captures(content)
            && self.contains_key(&caps[1])
        {
            return true;
        }

        if let Some(caps) = EMACS_REGEX.captures(content) {
            let matched = caps[1].split(';').any(|pair| {
                EMACS_PAIR_REGEX
                    .captures(pair)
                    .is_some_and(|pair_caps| self.contains_key(&pair_caps[1]))
            });
            if matched {
                return true;
            }
        }

        if let Some(caps) = VIM_REGEX.captures(content) {
            return self.declares_encoding() && vim_sets_encoding(&caps[1]);
        }

        false
    }

    fn declares_encoding(&self) -> bool {
        self.contains_key("encoding") || self.contains_key("coding")
    }
}

fn vim_sets_encoding(options: &str) -> bool {
    options
        .split(|c: char| c.is_whitespace() || c == ',' || c == ':')
        .filter_map(|token| token.split_once('='))
        .any(|(option, value)| {
            !value.is_empty() && VIM_ENCODING_OPTIONS.contains(&option.to_lowercase().as_str())
        })
}

fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase().replace('-', "_")
}
