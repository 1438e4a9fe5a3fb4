//! Translation of resolved engine options into `eslint` flags.

use std::ffi::OsString;
use std::path::Path;

use lintpipe_core::EngineOptions;

/// What a single `eslint` run is asked to lint.
#[derive(Debug, Clone, Copy)]
pub enum Invocation<'a> {
    /// Files matched by glob patterns.
    Paths(&'a [String]),
    /// Contents piped on stdin, attributed to the given path.
    Stdin(&'a Path),
}

/// Builds the argument list for one run.
///
/// `base_config_file` is where an inline base config has been written, if any.
/// An explicit override file wins over it.
pub fn build_args(
    options: &EngineOptions,
    base_config_file: Option<&Path>,
    invocation: Invocation<'_>,
) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["--format".into(), "json".into()];

    if !options.use_eslintrc {
        args.push("--no-eslintrc".into());
    }
    if let Some(file) = options.override_config_file.as_deref().or(base_config_file) {
        args.push("--config".into());
        args.push(file.into());
    }

    if !options.allow_inline_config {
        args.push("--no-inline-config".into());
    }

    if options.cache {
        args.push("--cache".into());
        args.push("--cache-location".into());
        args.push(options.cache_location.as_os_str().to_owned());
    }

    if options.fix {
        args.push("--fix-dry-run".into());
        if !options.fix_types.is_empty() {
            let types: Vec<&str> = options.fix_types.iter().map(|t| t.as_str()).collect();
            args.push("--fix-type".into());
            args.push(types.join(",").into());
        }
    }

    if !options.ignore {
        args.push("--no-ignore".into());
    }

    if options
        .report_unused_disable_directives
        .as_deref()
        .is_some_and(|severity| severity != "off")
    {
        args.push("--report-unused-disable-directives".into());
    }

    match invocation {
        Invocation::Paths(patterns) => {
            args.extend(patterns.iter().map(OsString::from));
        }
        Invocation::Stdin(path) => {
            args.push("--stdin".into());
            args.push("--stdin-filename".into());
            args.push(path.into());
        }
    }

    args
}
