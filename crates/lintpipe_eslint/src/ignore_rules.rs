//! `.eslintignore` handling.

use std::path::{Component, Path};

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use lintpipe_core::EngineError;
use tracing::debug;

const IGNORE_FILE: &str = ".eslintignore";

/// Patterns ESLint always applies: dependencies and dotfiles.
const DEFAULT_PATTERNS: &[&str] = &["node_modules/", ".*"];

/// Ignore rules rooted at the working directory.
pub struct IgnoreRules {
    matcher: Option<Gitignore>,
}

impl IgnoreRules {
    /// Rules that never ignore anything.
    pub fn disabled() -> Self {
        Self { matcher: None }
    }

    /// Loads the default patterns, then `config_patterns` (a config's
    /// `ignorePatterns`), then `<cwd>/.eslintignore` when present. Later
    /// patterns win, so `!pattern` can re-include a default.
    pub fn load(cwd: &Path, config_patterns: &[String]) -> Result<Self, EngineError> {
        let mut builder = GitignoreBuilder::new(cwd);

        let patterns = DEFAULT_PATTERNS
            .iter()
            .copied()
            .chain(config_patterns.iter().map(String::as_str));
        for pattern in patterns {
            builder
                .add_line(None, pattern)
                .map_err(|e| EngineError::config(format!("Invalid ignore pattern: {}", e)))?;
        }

        let ignore_file = cwd.join(IGNORE_FILE);
        if ignore_file.is_file() {
            debug!("Using ignore file {}", ignore_file.display());
            if let Some(e) = builder.add(&ignore_file) {
                return Err(EngineError::config(format!(
                    "Failed to read {}: {}",
                    ignore_file.display(),
                    e
                )));
            }
        }

        let matcher = builder
            .build()
            .map_err(|e| EngineError::config(format!("Failed to build ignore rules: {}", e)))?;

        Ok(Self {
            matcher: Some(matcher),
        })
    }

    /// Whether `path` (relative to the working directory) is ignored. Paths
    /// outside the working directory are never matched.
    pub fn is_ignored(&self, path: &Path) -> bool {
        let Some(matcher) = &self.matcher else {
            return false;
        };

        let path = path.strip_prefix(matcher.path()).unwrap_or(path);
        if path.has_root() || path.components().any(|c| c == Component::ParentDir) {
            return false;
        }

        matcher.matched_path_or_any_parents(path, false).is_ignore()
    }
}
