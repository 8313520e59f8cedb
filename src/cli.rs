use std::path::PathBuf;

use clap::Parser;

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "style-gate")]
#[command(author, version, about = "Run the project style checker over a list of files")]
#[command(long_about = "Runs the external Checkstyle-compatible checker over the given files\n\
    and reports the remaining diagnostic lines.\n\n\
    Exit codes:\n  \
    0 - Lint passed\n  \
    1 - Style violations found\n  \
    2 - Runtime error (no repository, missing artifact, launch failure, timeout)")]
pub struct Cli {
    /// Source files to check (zero files is passed through to the checker)
    pub files: Vec<PathBuf>,

    /// Project root (default: the enclosing git repository's top level)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Checker executable (default: java from PATH)
    #[arg(long)]
    pub java: Option<PathBuf>,

    /// Kill the checker after this many seconds (default: wait forever)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Output format [possible values: text, json]
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Echo the assembled checker command to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
