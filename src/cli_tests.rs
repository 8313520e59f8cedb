use std::path::PathBuf;

use super::*;

#[test]
fn cli_defaults() {
    let cli = Cli::parse_from(["style-gate"]);
    assert!(cli.files.is_empty());
    assert!(cli.root.is_none());
    assert!(cli.java.is_none());
    assert!(cli.timeout.is_none());
    assert_eq!(cli.format, OutputFormat::Text);
    assert!(!cli.verbose);
}

#[test]
fn cli_positional_files_keep_order() {
    let cli = Cli::parse_from(["style-gate", "src/A.java", "src/B.java"]);
    assert_eq!(
        cli.files,
        vec![PathBuf::from("src/A.java"), PathBuf::from("src/B.java")]
    );
}

#[test]
fn cli_with_root() {
    let cli = Cli::parse_from(["style-gate", "--root", "/repo", "A.java"]);
    assert_eq!(cli.root, Some(PathBuf::from("/repo")));
}

#[test]
fn cli_with_java_override() {
    let cli = Cli::parse_from(["style-gate", "--java", "/opt/jdk/bin/java"]);
    assert_eq!(cli.java, Some(PathBuf::from("/opt/jdk/bin/java")));
}

#[test]
fn cli_with_timeout() {
    let cli = Cli::parse_from(["style-gate", "--timeout", "120"]);
    assert_eq!(cli.timeout, Some(120));
}

#[test]
fn cli_with_json_format() {
    let cli = Cli::parse_from(["style-gate", "--format", "json"]);
    assert_eq!(cli.format, OutputFormat::Json);
}

#[test]
fn cli_verbose_flag() {
    let cli = Cli::parse_from(["style-gate", "-v", "A.java"]);
    assert!(cli.verbose);
}
