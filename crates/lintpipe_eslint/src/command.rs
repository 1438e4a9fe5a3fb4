//! Running `eslint` as a subprocess.

use std::ffi::OsString;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use lintpipe_core::{EngineError, EngineOptions, LintEngine, LintResult};
use tracing::{debug, warn};

use crate::args::{Invocation, build_args};
use crate::ignore_rules::IgnoreRules;

/// Program run when none is configured.
pub const DEFAULT_PROGRAM: &str = "eslint";

/// File an inline base config is written to, inside the cache location.
const BASE_CONFIG_FILE: &str = "lintpipe-base-config.json";

/// Exit codes meaning "ran fine": 0 clean, 1 lint errors found.
const SUCCESS_CODES: &[i32] = &[0, 1];

/// Start of the warning eslint reports for a piped file it ignores.
const IGNORED_FILE_WARNING: &str = "File ignored ";

/// An engine that shells out to the `eslint` command line.
pub struct EslintCommand {
    program: String,
    leading_args: Vec<String>,
    options: EngineOptions,
    base_config_file: Option<PathBuf>,
    ignore_rules: IgnoreRules,
}

impl EslintCommand {
    /// Prepares an engine for `options`.
    ///
    /// An inline base config is written to disk here, once, so every run can
    /// point `--config` at it.
    pub fn new(options: &EngineOptions) -> Result<Self, EngineError> {
        for key in options.extra.keys() {
            warn!("Engine option '{}' has no eslint flag and is ignored", key);
        }
        if !options.glob_input_paths {
            warn!("globInputPaths=false is not supported by the eslint command line");
        }

        let base_config_file = match &options.base_config {
            Some(config) => Some(write_base_config(options, config)?),
            None => None,
        };

        let ignore_rules = if options.ignore {
            IgnoreRules::load(&options.cwd, &config_ignore_patterns(options))?
        } else {
            IgnoreRules::disabled()
        };

        Ok(Self {
            program: DEFAULT_PROGRAM.to_string(),
            leading_args: Vec::new(),
            options: options.clone(),
            base_config_file,
            ignore_rules,
        })
    }

    /// Uses a different program. Whitespace separates leading arguments, so
    /// `npx eslint` works.
    pub fn with_program(mut self, program: &str) -> Self {
        let mut parts = program.split_whitespace();
        if let Some(first) = parts.next() {
            self.program = first.to_string();
            self.leading_args = parts.map(str::to_string).collect();
        }
        self
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    fn run(
        &self,
        invocation: Invocation<'_>,
        cwd: &Path,
        stdin: Option<&str>,
    ) -> Result<Vec<LintResult>, EngineError> {
        let args = build_args(&self.options, self.base_config_file.as_deref(), invocation);
        debug!("Running {} {}", self.program, display_args(&args));

        let mut child = Command::new(&self.program)
            .args(&self.leading_args)
            .args(&args)
            .current_dir(cwd)
            .stdin(if stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| EngineError::process(format!("Failed to run {}: {}", self.program, e)))?;

        if let Some(text) = stdin
            && let Some(mut pipe) = child.stdin.take()
        {
            // an early exit closes the pipe; the exit status says why
            if let Err(e) = pipe.write_all(text.as_bytes())
                && e.kind() != ErrorKind::BrokenPipe
            {
                return Err(e.into());
            }
        }

        let output = child.wait_with_output()?;
        let code = output.status.code();

        if !code.is_some_and(|code| SUCCESS_CODES.contains(&code)) {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let status = match code {
                Some(code) => format!("exit code {}", code),
                None => "a signal".to_string(),
            };
            return Err(EngineError::process(format!(
                "{} stopped with {}: {}",
                self.program,
                status,
                stderr.trim()
            )));
        }

        serde_json::from_slice(&output.stdout).map_err(|e| {
            EngineError::parse(format!("Unreadable {} output: {}", self.program, e))
        })
    }
}

impl LintEngine for EslintCommand {
    fn lint_paths(&self, patterns: &[String], cwd: &Path) -> Result<Vec<LintResult>, EngineError> {
        self.run(Invocation::Paths(patterns), cwd, None)
    }

    fn lint_text(&self, content: &str, file_path: &Path) -> Result<Vec<LintResult>, EngineError> {
        let mut results = self.run(
            Invocation::Stdin(file_path),
            &self.options.cwd,
            Some(content),
        )?;
        results.truncate(1);
        if results.first().is_none_or(is_ignored_notice) {
            debug!("No lint result for {}, treating it as clean", file_path.display());
            results = vec![LintResult::new(file_path, Vec::new())];
        }
        Ok(results)
    }

    fn is_path_ignored(&self, file_path: &Path) -> Result<bool, EngineError> {
        Ok(self.ignore_rules.is_ignored(file_path))
    }
}

/// `ignorePatterns` of an inline base config, as a string or a list.
fn config_ignore_patterns(options: &EngineOptions) -> Vec<String> {
    let Some(value) = options
        .base_config
        .as_ref()
        .and_then(|config| config.get("ignorePatterns"))
    else {
        return Vec::new();
    };

    match value {
        serde_json::Value::String(pattern) => vec![pattern.clone()],
        serde_json::Value::Array(patterns) => patterns
            .iter()
            .filter_map(|p| p.as_str().map(str::to_string))
            .collect(),
        _ => {
            warn!("Ignoring non-string ignorePatterns in base config");
            Vec::new()
        }
    }
}

/// Whether `result` only carries eslint's "file ignored" warning.
fn is_ignored_notice(result: &LintResult) -> bool {
    match result.messages.as_slice() {
        [finding] => {
            finding.rule_id.is_none()
                && !finding.fatal
                && finding.message.starts_with(IGNORED_FILE_WARNING)
        }
        _ => false,
    }
}

fn write_base_config(
    options: &EngineOptions,
    config: &serde_json::Map<String, serde_json::Value>,
) -> Result<PathBuf, EngineError> {
    let dir = options.cwd.join(&options.cache_location);
    fs::create_dir_all(&dir)?;

    let path = dir.join(BASE_CONFIG_FILE);
    let json = serde_json::to_string_pretty(config)
        .map_err(|e| EngineError::config(format!("Failed to serialize base config: {}", e)))?;
    fs::write(&path, json)?;

    debug!("Wrote base config to {}", path.display());
    Ok(path)
}

fn display_args(args: &[OsString]) -> String {
    args.iter()
        .map(|a| a.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}
