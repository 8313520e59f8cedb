use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StyleGateError {
    #[error("Not a git repository: {0}")]
    RootNotFound(String),

    #[error("Checker artifact not found: {path}")]
    ArtifactMissing { path: PathBuf },

    #[error("Failed to launch checker: {program}")]
    Launch {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Checker timed out after {}s", limit.as_secs())]
    Timeout { limit: Duration },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StyleGateError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
