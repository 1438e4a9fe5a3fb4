//! Option resolution.
//!
//! `Options` is what a user writes (every field optional). `Options::resolve_in`
//! layers it over fixed defaults and produces the immutable `Configuration`
//! used for the rest of the run. The working directory and cache location are
//! computed once here and never read ambiently afterwards.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Cache location relative to the working directory.
pub const DEFAULT_CACHE_DIR: &str = "node_modules/.cache/eslint/";

/// Formatter used when none is configured.
pub const DEFAULT_FORMATTER: &str = "stylish";

/// Kinds of fixes the engine may apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixType {
    Problem,
    Suggestion,
    Layout,
    Directive,
}

impl FixType {
    pub fn as_str(self) -> &'static str {
        match self {
            FixType::Problem => "problem",
            FixType::Suggestion => "suggestion",
            FixType::Layout => "layout",
            FixType::Directive => "directive",
        }
    }
}

/// The `config` option as written by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigInput {
    /// `false` (or `true`): let the engine discover project config.
    Flag(bool),
    /// Path to a config file.
    Path(String),
    /// Inline config object.
    Inline(Map<String, Value>),
}

/// `files` may be a single glob or a list of globs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilesInput {
    One(String),
    Many(Vec<String>),
}

impl FilesInput {
    fn into_globs(self) -> Vec<String> {
        let globs = match self {
            FilesInput::One(glob) => vec![glob],
            FilesInput::Many(globs) => globs,
        };
        globs
            .into_iter()
            .filter(|glob| !glob.trim().is_empty())
            .collect()
    }
}

/// Engine settings a user may override. Unknown keys pass through to the
/// engine untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineOverrides {
    pub allow_inline_config: Option<bool>,
    pub cache: Option<bool>,
    pub cache_location: Option<PathBuf>,
    pub cwd: Option<PathBuf>,
    pub fix: Option<bool>,
    pub fix_types: Option<BTreeSet<FixType>>,
    pub ignore: Option<bool>,
    pub report_unused_disable_directives: Option<String>,
    pub glob_input_paths: Option<bool>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// User supplied options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    #[serde(default)]
    pub config: Option<ConfigInput>,

    #[serde(default, alias = "failOnError", alias = "failAfterError")]
    pub fail_on_unresolved: Option<bool>,

    #[serde(default)]
    pub files: Option<FilesInput>,

    #[serde(default)]
    pub formatter: Option<String>,

    #[serde(default, alias = "eslint")]
    pub engine: EngineOverrides,
}

/// Where the engine's rule configuration comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    Inline(Map<String, Value>),
    FilePath(PathBuf),
    AutoDiscover,
}

/// Fully resolved engine options.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineOptions {
    pub allow_inline_config: bool,
    pub cache: bool,
    pub cache_location: PathBuf,
    pub cwd: PathBuf,
    pub fix: bool,
    pub fix_types: BTreeSet<FixType>,
    pub ignore: bool,
    pub report_unused_disable_directives: Option<String>,
    pub glob_input_paths: bool,
    pub base_config: Option<Map<String, Value>>,
    pub override_config_file: Option<PathBuf>,
    pub use_eslintrc: bool,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The resolved configuration for one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub engine: EngineOptions,
    pub config_source: ConfigSource,
    pub fail_on_unresolved: bool,
    /// Empty means no target: Stream Mode.
    pub target_globs: Vec<String>,
    pub formatter: String,
    /// Directory that item paths are made relative to.
    pub cwd: PathBuf,
}

impl Configuration {
    pub fn fix_enabled(&self) -> bool {
        self.engine.fix
    }
}

fn default_fix_types() -> BTreeSet<FixType> {
    BTreeSet::from([FixType::Problem, FixType::Suggestion, FixType::Layout])
}

impl Options {
    /// Resolves against the process working directory.
    pub fn resolve(self) -> Configuration {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        self.resolve_in(&cwd)
    }

    /// Resolves against an explicit working directory.
    pub fn resolve_in(self, cwd: &Path) -> Configuration {
        let overrides = self.engine;
        let cwd = overrides.cwd.unwrap_or_else(|| cwd.to_path_buf());

        let config_source = match self.config {
            Some(ConfigInput::Inline(object)) => ConfigSource::Inline(object),
            Some(ConfigInput::Path(path)) if !path.is_empty() => {
                ConfigSource::FilePath(PathBuf::from(path))
            }
            _ => ConfigSource::AutoDiscover,
        };

        let (base_config, override_config_file, use_eslintrc) = match &config_source {
            ConfigSource::Inline(object) => (Some(object.clone()), None, false),
            ConfigSource::FilePath(path) => (None, Some(path.clone()), false),
            ConfigSource::AutoDiscover => (None, None, true),
        };

        let engine = EngineOptions {
            allow_inline_config: overrides.allow_inline_config.unwrap_or(true),
            cache: overrides.cache.unwrap_or(true),
            cache_location: overrides
                .cache_location
                .unwrap_or_else(|| cwd.join(DEFAULT_CACHE_DIR)),
            cwd: cwd.clone(),
            fix: overrides.fix.unwrap_or(true),
            fix_types: overrides.fix_types.unwrap_or_else(default_fix_types),
            ignore: overrides.ignore.unwrap_or(true),
            report_unused_disable_directives: overrides.report_unused_disable_directives,
            glob_input_paths: overrides.glob_input_paths.unwrap_or(true),
            base_config,
            override_config_file,
            use_eslintrc,
            extra: overrides.extra,
        };

        Configuration {
            engine,
            config_source,
            fail_on_unresolved: self.fail_on_unresolved.unwrap_or(false),
            target_globs: self.files.map(FilesInput::into_globs).unwrap_or_default(),
            formatter: self
                .formatter
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| DEFAULT_FORMATTER.to_string()),
            cwd,
        }
    }
}
