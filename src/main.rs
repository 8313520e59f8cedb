use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;

use style_gate::adapter::{CheckerArtifacts, LintAdapter, LintOutcome};
use style_gate::cli::Cli;
use style_gate::output;
use style_gate::root;
use style_gate::runner::SystemRunner;
use style_gate::{EXIT_RUNTIME_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS};

fn main() {
    let cli = Cli::parse();

    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_RUNTIME_ERROR
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> style_gate::Result<i32> {
    let root = resolve_root(cli.root.as_deref())?;

    let artifacts = CheckerArtifacts::locate(&root);
    artifacts.verify()?;

    let runner = SystemRunner::new().with_timeout(cli.timeout.map(Duration::from_secs));
    let mut adapter = LintAdapter::new(runner, artifacts);
    if let Some(java) = &cli.java {
        adapter = adapter.with_java(java);
    }

    if cli.verbose {
        eprintln!("Running: {}", adapter.invocation(&cli.files));
    }

    let outcome = adapter.lint(&cli.files)?;
    print_report(&outcome, cli)?;

    Ok(if outcome.passed {
        EXIT_SUCCESS
    } else {
        EXIT_VIOLATIONS
    })
}

fn resolve_root(explicit: Option<&Path>) -> style_gate::Result<PathBuf> {
    explicit.map_or_else(
        || root::discover(Path::new(".")),
        |path| Ok(dunce::canonicalize(path)?),
    )
}

fn print_report(outcome: &LintOutcome, cli: &Cli) -> style_gate::Result<()> {
    let rendered = output::render(outcome, cli.files.len(), cli.format)?;
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    Ok(())
}
