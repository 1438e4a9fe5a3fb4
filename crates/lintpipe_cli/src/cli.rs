//! CLI argument definitions

use std::path::PathBuf;

use clap::Parser;

/// lintpipe - lint and autofix files through ESLint
#[derive(Parser, Debug)]
#[command(name = "lintpipe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Files to lint one by one (Stream Mode)
    pub paths: Vec<PathBuf>,

    /// Options file path (defaults to .lintpipe.jsonc or .lintpipe.json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Glob for ESLint to scan (Path Mode); may be repeated
    #[arg(long = "files", value_name = "GLOB")]
    pub files: Vec<String>,

    /// ESLint config file to use instead of discovery
    #[arg(long, value_name = "PATH")]
    pub eslint_config: Option<String>,

    /// Fail when unresolved findings remain
    #[arg(long)]
    pub fail_on_unresolved: bool,

    /// Do not apply fixes
    #[arg(long)]
    pub no_fix: bool,

    /// Disable the ESLint cache
    #[arg(long)]
    pub no_cache: bool,

    /// Report formatter (stylish, compact, unix, json, sarif)
    #[arg(short, long, value_name = "NAME")]
    pub format: Option<String>,

    /// ESLint program to run, with any leading arguments
    #[arg(long, value_name = "PROGRAM")]
    pub eslint_bin: Option<String>,

    /// Write fixed files here instead of in place
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
