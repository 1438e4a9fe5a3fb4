//! # lintpipe_eslint
//!
//! A [`LintEngine`](lintpipe_core::LintEngine) backed by the `eslint` command
//! line. Options are translated into flags, results are read from
//! `--format json`, and fixes are computed with `--fix-dry-run` so that
//! writing them to disk stays under the pipeline's control.

mod args;
mod command;
mod ignore_rules;

pub use args::{Invocation, build_args};
pub use command::{DEFAULT_PROGRAM, EslintCommand};
pub use ignore_rules::IgnoreRules;
