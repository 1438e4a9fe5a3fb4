use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::formatters::{self, Formatter};
use crate::{EngineError, LintEngine, LintResult};

/// A call made against [`ScriptedEngine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    LintPaths(Vec<String>, PathBuf),
    LintText(PathBuf, String),
    IsPathIgnored(PathBuf),
    ApplyFixes(Vec<PathBuf>),
    LoadFormatter(String),
}

/// An in-memory engine that answers from canned results and records calls.
#[derive(Default)]
pub struct ScriptedEngine {
    text_results: HashMap<PathBuf, LintResult>,
    path_results: Vec<LintResult>,
    ignored: HashSet<PathBuf>,
    failure: Option<String>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedEngine {
    /// Result returned by `lint_text` for `path`. Unknown paths lint clean.
    pub fn on_text(&mut self, path: impl Into<PathBuf>, result: LintResult) {
        self.text_results.insert(path.into(), result);
    }

    /// Results returned by `lint_paths`.
    pub fn on_paths(&mut self, results: Vec<LintResult>) {
        self.path_results = results;
    }

    pub fn ignore(&mut self, path: impl Into<PathBuf>) {
        self.ignored.insert(path.into());
    }

    /// Makes every lint call fail with a configuration error.
    pub fn fail_with(&mut self, message: impl Into<String>) {
        self.failure = Some(message.into());
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    fn check_failure(&self) -> Result<(), EngineError> {
        match &self.failure {
            Some(message) => Err(EngineError::config(message.clone())),
            None => Ok(()),
        }
    }
}

impl LintEngine for ScriptedEngine {
    fn lint_paths(&self, patterns: &[String], cwd: &Path) -> Result<Vec<LintResult>, EngineError> {
        self.calls
            .lock()
            .push(Call::LintPaths(patterns.to_vec(), cwd.to_path_buf()));
        self.check_failure()?;
        Ok(self.path_results.clone())
    }

    fn lint_text(&self, content: &str, file_path: &Path) -> Result<Vec<LintResult>, EngineError> {
        self.calls
            .lock()
            .push(Call::LintText(file_path.to_path_buf(), content.to_string()));
        self.check_failure()?;
        let result = self
            .text_results
            .get(file_path)
            .cloned()
            .unwrap_or_else(|| LintResult::new(file_path, Vec::new()));
        Ok(vec![result])
    }

    fn is_path_ignored(&self, file_path: &Path) -> Result<bool, EngineError> {
        self.calls
            .lock()
            .push(Call::IsPathIgnored(file_path.to_path_buf()));
        Ok(self.ignored.contains(file_path))
    }

    fn apply_fixes_to_disk(&self, results: &[LintResult]) -> Result<(), EngineError> {
        let fixed = results
            .iter()
            .filter(|r| r.output.is_some())
            .map(|r| r.file_path.clone())
            .collect();
        self.calls.lock().push(Call::ApplyFixes(fixed));
        Ok(())
    }

    fn load_formatter(&self, name: &str) -> Result<Box<dyn Formatter>, EngineError> {
        self.calls.lock().push(Call::LoadFormatter(name.to_string()));
        formatters::load(name)
    }
}
