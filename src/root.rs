//! Project root discovery via the surrounding git repository.

use std::path::{Path, PathBuf};

use crate::error::{Result, StyleGateError};

/// Resolve the top-level working directory of the repository containing
/// `start`.
///
/// The returned path is canonicalized so artifact paths built from it are
/// stable regardless of where the process was launched.
///
/// # Errors
/// Returns [`StyleGateError::RootNotFound`] when `start` is not inside a
/// git repository, or the repository is bare (no working directory).
pub fn discover(start: &Path) -> Result<PathBuf> {
    let repo = gix::discover(start)
        .map_err(|e| StyleGateError::RootNotFound(e.to_string()))?;
    let workdir = repo
        .workdir()
        .ok_or_else(|| StyleGateError::RootNotFound("bare repository".to_string()))?;
    Ok(dunce::canonicalize(workdir)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    // Minimal on-disk shape that git (and gix) recognize as a repository.
    fn init_fake_repo(root: &Path) {
        let git_dir = root.join(".git");
        fs::create_dir_all(git_dir.join("objects")).unwrap();
        fs::create_dir_all(git_dir.join("refs")).unwrap();
        fs::write(git_dir.join("HEAD"), "ref: refs/heads/main\n").unwrap();
        fs::write(
            git_dir.join("config"),
            "[core]\n\trepositoryformatversion = 0\n\tbare = false\n",
        )
        .unwrap();
    }

    #[test]
    fn discover_from_repo_root() {
        let temp = tempfile::TempDir::new().unwrap();
        init_fake_repo(temp.path());

        let root = discover(temp.path()).unwrap();
        assert_eq!(root, dunce::canonicalize(temp.path()).unwrap());
    }

    #[test]
    fn discover_from_nested_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        init_fake_repo(temp.path());
        let nested = temp.path().join("src/main/java");
        fs::create_dir_all(&nested).unwrap();

        let root = discover(&nested).unwrap();
        assert_eq!(root, dunce::canonicalize(temp.path()).unwrap());
    }

    #[test]
    fn discover_outside_any_repo_fails() {
        // A fresh temp dir has no .git anywhere above it that we control,
        // so force the walk to stop by using the filesystem root.
        let err = discover(Path::new("/")).unwrap_err();
        assert!(matches!(err, StyleGateError::RootNotFound(_)));
    }
}
