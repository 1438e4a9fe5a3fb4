//! The capability contract required from a linting engine.

use std::path::Path;

use crate::formatters::{self, Formatter};
use crate::{EngineError, LintResult, fix};

/// A linting/autofixing engine.
///
/// Rule evaluation and fix computation live entirely behind this trait.
/// Methods take `&self`; callers never have more than one call in flight.
pub trait LintEngine {
    /// Lints every file matched by `patterns`, resolved from `cwd`.
    fn lint_paths(&self, patterns: &[String], cwd: &Path) -> Result<Vec<LintResult>, EngineError>;

    /// Lints in-memory content as if it lived at `file_path` (relative to the
    /// working directory). Returns exactly one result.
    fn lint_text(&self, content: &str, file_path: &Path) -> Result<Vec<LintResult>, EngineError>;

    /// Whether the engine's ignore rules exclude `file_path`.
    fn is_path_ignored(&self, file_path: &Path) -> Result<bool, EngineError>;

    /// Writes fixed outputs back to their source files.
    fn apply_fixes_to_disk(&self, results: &[LintResult]) -> Result<(), EngineError> {
        fix::output_fixes(results).map(|_| ())
    }

    /// Resolves a formatter by name.
    fn load_formatter(&self, name: &str) -> Result<Box<dyn Formatter>, EngineError> {
        formatters::load(name)
    }
}

impl<E: LintEngine + ?Sized> LintEngine for &E {
    fn lint_paths(&self, patterns: &[String], cwd: &Path) -> Result<Vec<LintResult>, EngineError> {
        (**self).lint_paths(patterns, cwd)
    }

    fn lint_text(&self, content: &str, file_path: &Path) -> Result<Vec<LintResult>, EngineError> {
        (**self).lint_text(content, file_path)
    }

    fn is_path_ignored(&self, file_path: &Path) -> Result<bool, EngineError> {
        (**self).is_path_ignored(file_path)
    }

    fn apply_fixes_to_disk(&self, results: &[LintResult]) -> Result<(), EngineError> {
        (**self).apply_fixes_to_disk(results)
    }

    fn load_formatter(&self, name: &str) -> Result<Box<dyn Formatter>, EngineError> {
        (**self).load_formatter(name)
    }
}

impl<E: LintEngine + ?Sized> LintEngine for Box<E> {
    fn lint_paths(&self, patterns: &[String], cwd: &Path) -> Result<Vec<LintResult>, EngineError> {
        (**self).lint_paths(patterns, cwd)
    }

    fn lint_text(&self, content: &str, file_path: &Path) -> Result<Vec<LintResult>, EngineError> {
        (**self).lint_text(content, file_path)
    }

    fn is_path_ignored(&self, file_path: &Path) -> Result<bool, EngineError> {
        (**self).is_path_ignored(file_path)
    }

    fn apply_fixes_to_disk(&self, results: &[LintResult]) -> Result<(), EngineError> {
        (**self).apply_fixes_to_disk(results)
    }

    fn load_formatter(&self, name: &str) -> Result<Box<dyn Formatter>, EngineError> {
        (**self).load_formatter(name)
    }
}
