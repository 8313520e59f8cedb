//! The lint adapter: assembles a checker invocation, runs it, and turns the
//! result into a pass/fail verdict plus filtered diagnostic lines.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{Result, StyleGateError};
use crate::runner::{Invocation, ProcessRunner};

/// Checker executable archive, relative to the project root.
pub const JAR_PATH: &str = "tools/style/checkstyle.jar";
/// Rule configuration, relative to the project root.
pub const CONFIG_PATH: &str = "tools/style/rules.xml";
/// Suppressions file, relative to the project root.
pub const SUPPRESSIONS_PATH: &str = "tools/style/suppressions.xml";

/// System property through which the rule config references the
/// suppressions file.
const SUPPRESSIONS_PROPERTY: &str = "suppressions.file";

/// Default checker executable, resolved via PATH.
const DEFAULT_JAVA: &str = "java";

/// Progress/status noise the checker prints around its findings. Lines
/// containing any of these are never reportable violations.
const BANNER_MARKERS: [&str; 3] = ["Starting audit", "Audit done", "Checkstyle ends"];

/// The three read-only artifacts the checker needs, located at well-known
/// paths under the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerArtifacts {
    pub jar: PathBuf,
    pub config: PathBuf,
    pub suppressions: PathBuf,
}

impl CheckerArtifacts {
    /// Resolve the artifact paths under `root` without touching the disk.
    #[must_use]
    pub fn locate(root: &Path) -> Self {
        Self {
            jar: root.join(JAR_PATH),
            config: root.join(CONFIG_PATH),
            suppressions: root.join(SUPPRESSIONS_PATH),
        }
    }

    /// Check that all three artifacts exist.
    ///
    /// A missing jar would otherwise surface as a non-zero checker exit and
    /// be misread as a lint failure, so this runs before any spawn.
    ///
    /// # Errors
    /// Returns [`StyleGateError::ArtifactMissing`] naming the first absent
    /// artifact.
    pub fn verify(&self) -> Result<()> {
        for path in [&self.jar, &self.config, &self.suppressions] {
            if !path.exists() {
                return Err(StyleGateError::ArtifactMissing { path: path.clone() });
            }
        }
        Ok(())
    }
}

/// Pass/fail verdict for one adapter call.
///
/// A failed run is not an error: violations are a normal, expected result.
/// `diagnostics` is empty on pass, and on failure holds the checker's stdout
/// lines minus banner noise, in original order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintOutcome {
    pub passed: bool,
    pub diagnostics: Vec<String>,
}

impl LintOutcome {
    fn passed() -> Self {
        Self {
            passed: true,
            diagnostics: Vec::new(),
        }
    }

    fn failed(diagnostics: Vec<String>) -> Self {
        Self {
            passed: false,
            diagnostics,
        }
    }
}

/// Thin adapter around an external Checkstyle-compatible checker.
///
/// Holds no mutable state: each [`lint`](Self::lint) call builds one
/// invocation, spawns one child process, and interprets its exit status.
/// Concurrent calls are independent.
#[derive(Debug, Clone)]
pub struct LintAdapter<R> {
    runner: R,
    java: PathBuf,
    artifacts: CheckerArtifacts,
}

impl<R: ProcessRunner> LintAdapter<R> {
    pub fn new(runner: R, artifacts: CheckerArtifacts) -> Self {
        Self {
            runner,
            java: PathBuf::from(DEFAULT_JAVA),
            artifacts,
        }
    }

    /// Override the checker executable (default: `java` from PATH).
    #[must_use]
    pub fn with_java(mut self, java: impl Into<PathBuf>) -> Self {
        self.java = java.into();
        self
    }

    /// Build the argument vector for `files`.
    ///
    /// Fixed order: suppressions property, `-jar`, jar path, `-c`, config
    /// path, then every caller-supplied file path. An empty file list still
    /// yields a valid invocation; zero-file behavior is the checker's.
    #[must_use]
    pub fn invocation(&self, files: &[PathBuf]) -> Invocation {
        let mut suppressions_property =
            OsString::from(format!("-D{SUPPRESSIONS_PROPERTY}="));
        suppressions_property.push(self.artifacts.suppressions.as_os_str());

        let mut args = vec![
            suppressions_property,
            OsString::from("-jar"),
            self.artifacts.jar.clone().into_os_string(),
            OsString::from("-c"),
            self.artifacts.config.clone().into_os_string(),
        ];
        args.extend(files.iter().map(|f| f.as_os_str().to_owned()));

        Invocation::new(self.java.clone(), args)
    }

    /// Run the checker over `files` and interpret its verdict.
    ///
    /// Exit status 0 means the lint passed and stdout is ignored. Any other
    /// exit status means violations: stdout is trimmed as a block, split
    /// into lines, and stripped of banner noise.
    ///
    /// # Errors
    /// Propagates runner failures ([`StyleGateError::Launch`],
    /// [`StyleGateError::Timeout`]); lint violations are not errors.
    pub fn lint(&self, files: &[PathBuf]) -> Result<LintOutcome> {
        let result = self.runner.run(&self.invocation(files))?;
        if result.success() {
            Ok(LintOutcome::passed())
        } else {
            Ok(LintOutcome::failed(extract_diagnostics(&result.stdout)))
        }
    }
}

/// Split checker stdout into diagnostic lines, dropping banner noise.
///
/// The whole block is trimmed before splitting, so leading/trailing blank
/// output never produces empty diagnostics; interior blank lines survive.
#[must_use]
pub fn extract_diagnostics(stdout: &str) -> Vec<String> {
    stdout
        .trim()
        .lines()
        .filter(|line| !is_banner_line(line))
        .map(ToString::to_string)
        .collect()
}

fn is_banner_line(line: &str) -> bool {
    BANNER_MARKERS.iter().any(|marker| line.contains(marker))
}

#[cfg(test)]
#[path = "adapter_tests.rs"]
mod tests;
