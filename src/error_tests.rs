use std::path::PathBuf;
use std::time::Duration;

use super::*;

#[test]
fn error_display_root_not_found() {
    let err = StyleGateError::RootNotFound("no .git directory found".to_string());
    assert_eq!(
        err.to_string(),
        "Not a git repository: no .git directory found"
    );
}

#[test]
fn error_display_artifact_missing() {
    let err = StyleGateError::ArtifactMissing {
        path: PathBuf::from("tools/style/checkstyle.jar"),
    };
    assert!(err.to_string().contains("checkstyle.jar"));
    assert!(err.to_string().starts_with("Checker artifact not found"));
}

#[test]
fn error_display_launch() {
    let err = StyleGateError::Launch {
        program: PathBuf::from("java"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
    };
    assert_eq!(err.to_string(), "Failed to launch checker: java");
}

#[test]
fn error_launch_preserves_source() {
    let err = StyleGateError::Launch {
        program: PathBuf::from("java"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
    };
    let source = std::error::Error::source(&err);
    assert!(source.is_some());
}

#[test]
fn error_display_timeout() {
    let err = StyleGateError::Timeout {
        limit: Duration::from_secs(30),
    };
    assert_eq!(err.to_string(), "Checker timed out after 30s");
}

#[test]
fn error_from_io() {
    let io = std::io::Error::other("broken pipe");
    let err = StyleGateError::from(io);
    assert!(matches!(err, StyleGateError::Io(_)));
}
