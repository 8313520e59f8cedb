//! Child-process execution behind a narrow, fakeable seam.

use std::ffi::OsString;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::error::{Result, StyleGateError};

/// Polling interval while waiting on a child with a deadline.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// An argument vector ready to spawn. Immutable once built; arguments are
/// passed verbatim to the OS, never through a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: PathBuf,
    args: Vec<OsString>,
}

impl Invocation {
    pub fn new(program: impl Into<PathBuf>, args: Vec<OsString>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    #[must_use]
    pub fn args(&self) -> &[OsString] {
        &self.args
    }
}

impl std::fmt::Display for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Outcome of one child process: exit code plus both captured streams.
///
/// `code` is `None` when the child was killed by a signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessResult {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessResult {
    #[must_use]
    pub const fn success(&self) -> bool {
        matches!(self.code, Some(0))
    }

    fn from_parts(status: ExitStatus, stdout: Vec<u8>, stderr: Vec<u8>) -> Self {
        Self {
            code: status.code(),
            stdout: String::from_utf8_lossy(&stdout).into_owned(),
            stderr: String::from_utf8_lossy(&stderr).into_owned(),
        }
    }
}

/// Runs an [`Invocation`] to completion and captures its output.
///
/// The adapter's decision logic only depends on this trait, so tests can
/// substitute a fake runner and never spawn a real binary.
pub trait ProcessRunner {
    /// Execute the invocation, blocking until the child exits.
    ///
    /// # Errors
    /// Returns [`StyleGateError::Launch`] if the child cannot be spawned and
    /// [`StyleGateError::Timeout`] if a configured deadline expires.
    fn run(&self, invocation: &Invocation) -> Result<ProcessResult>;
}

/// Real runner on top of `std::process::Command`.
///
/// stdout and stderr are captured via dedicated pipes (never inherited,
/// never merged). Without a timeout the call blocks until the child exits;
/// with one, the child is killed once the deadline passes.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    timeout: Option<Duration>,
}

impl SystemRunner {
    #[must_use]
    pub const fn new() -> Self {
        Self { timeout: None }
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    fn command(invocation: &Invocation) -> Command {
        let mut command = Command::new(invocation.program());
        command
            .args(invocation.args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        command
    }

    fn launch_error(invocation: &Invocation, source: std::io::Error) -> StyleGateError {
        StyleGateError::Launch {
            program: invocation.program().to_path_buf(),
            source,
        }
    }

    fn run_bounded(
        &self,
        invocation: &Invocation,
        limit: Duration,
    ) -> Result<ProcessResult> {
        let mut child = Self::command(invocation)
            .spawn()
            .map_err(|source| Self::launch_error(invocation, source))?;

        // Drain both pipes on background threads so a chatty child cannot
        // deadlock against a full pipe buffer while we poll.
        let stdout_handle = child.stdout.take().map(drain);
        let stderr_handle = child.stderr.take().map(drain);

        let deadline = Instant::now() + limit;
        let status = loop {
            if let Some(status) = child.try_wait()? {
                break status;
            }
            if Instant::now() >= deadline {
                let _ = child.kill();
                let _ = child.wait();
                return Err(StyleGateError::Timeout { limit });
            }
            thread::sleep(POLL_INTERVAL);
        };

        let stdout = join_drained(stdout_handle);
        let stderr = join_drained(stderr_handle);
        Ok(ProcessResult::from_parts(status, stdout, stderr))
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<ProcessResult> {
        match self.timeout {
            Some(limit) => self.run_bounded(invocation, limit),
            None => {
                let output = Self::command(invocation)
                    .output()
                    .map_err(|source| Self::launch_error(invocation, source))?;
                Ok(ProcessResult::from_parts(
                    output.status,
                    output.stdout,
                    output.stderr,
                ))
            }
        }
    }
}

fn drain(mut stream: impl Read + Send + 'static) -> JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = stream.read_to_end(&mut buf);
        buf
    })
}

fn join_drained(handle: Option<JoinHandle<Vec<u8>>>) -> Vec<u8> {
    handle
        .and_then(|h| h.join().ok())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
