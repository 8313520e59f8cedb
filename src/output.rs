//! Rendering of a lint outcome for the terminal or a CI consumer.

use clap::ValueEnum;
use serde::Serialize;

use crate::adapter::LintOutcome;
use crate::error::Result;

/// Output format for the lint report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One diagnostic line per line, original order (default)
    #[default]
    Text,
    /// Structured report for machine consumers
    Json,
}

/// Serialized shape of the JSON report.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    passed: bool,
    checked_files: usize,
    diagnostics: &'a [String],
}

/// Render `outcome` in the requested format.
///
/// Text output is exactly the diagnostic lines joined with newlines, so a
/// passing run renders as the empty string and prints nothing.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn render(outcome: &LintOutcome, checked_files: usize, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(outcome.diagnostics.join("\n")),
        OutputFormat::Json => {
            let report = JsonReport {
                passed: outcome.passed,
                checked_files,
                diagnostics: &outcome.diagnostics,
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
