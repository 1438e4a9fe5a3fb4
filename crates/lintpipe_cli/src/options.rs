//! Options file loading and command line overrides.

use std::path::{Path, PathBuf};

use jsonc_parser::ParseOptions;
use lintpipe_core::{ConfigInput, FilesInput, Options};
use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::debug;

use crate::cli::Cli;

/// Options files looked up in the working directory, in order.
pub const OPTIONS_FILES: &[&str] = &[".lintpipe.jsonc", ".lintpipe.json"];

/// Loads options from `explicit`, or from the first discovered file in `cwd`.
/// Without either, every option keeps its default.
pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<Options> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => discover(cwd),
    };

    let Some(path) = path else {
        debug!("No options file found, using defaults");
        return Ok(Options::default());
    };

    debug!("Loading options from {}", path.display());
    let content = std::fs::read_to_string(&path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
    parse(&content).wrap_err_with(|| format!("Invalid options in {}", path.display()))
}

fn discover(cwd: &Path) -> Option<PathBuf> {
    OPTIONS_FILES
        .iter()
        .map(|name| cwd.join(name))
        .find(|path| path.is_file())
}

/// Parses JSONC options text. Empty input means defaults.
pub fn parse(content: &str) -> Result<Options> {
    let value = jsonc_parser::parse_to_serde_value(content, &ParseOptions::default())
        .map_err(|e| miette::miette!("Failed to parse options: {}", e))?;

    match value {
        Some(value) => serde_json::from_value(value).into_diagnostic(),
        None => Ok(Options::default()),
    }
}

/// Layers command line flags over file options.
pub fn apply_overrides(mut options: Options, cli: &Cli) -> Options {
    if !cli.files.is_empty() {
        options.files = Some(FilesInput::Many(cli.files.clone()));
    }
    if let Some(config) = &cli.eslint_config {
        options.config = Some(ConfigInput::Path(config.clone()));
    }
    if cli.fail_on_unresolved {
        options.fail_on_unresolved = Some(true);
    }
    if cli.no_fix {
        options.engine.fix = Some(false);
    }
    if cli.no_cache {
        options.engine.cache = Some(false);
    }
    if let Some(format) = &cli.format {
        options.formatter = Some(format.clone());
    }
    options
}
