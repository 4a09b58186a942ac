//! Git metadata directory discovery
//!
//! Walks from a start directory through its ancestors until a `.git` entry is
//! found. A `.git` directory is used as is. A `.git` file (linked worktrees,
//! submodules) is opened with libgit2, and hooks live in the repository's
//! common directory. A `.git` file that does not resolve stops the search.

use git2::Repository;
use hooky_core::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the git metadata entry in a working tree
pub const GIT_DIR_NAME: &str = ".git";

/// Name of the hooks directory inside the git directory
pub const HOOKS_DIR_NAME: &str = "hooks";

/// Find the git directory for the process working directory
pub fn find_git_directory() -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    find_git_directory_from(&cwd)
}

/// Find the git directory for `start`, searching every ancestor up to the root
///
/// The returned path exists and is a directory.
pub fn find_git_directory_from(start: &Path) -> Result<PathBuf> {
    let start = fs::canonicalize(start).map_err(|e| Error::DirectoryRead {
        path: start.to_path_buf(),
        source: e,
    })?;

    for dir in start.ancestors() {
        let candidate = dir.join(GIT_DIR_NAME);

        if candidate.is_dir() {
            tracing::debug!(git_dir = %candidate.display(), "Found git directory");
            return Ok(candidate);
        }

        if candidate.is_file() {
            let git_dir = follow_gitdir_file(dir, &candidate)?;
            tracing::debug!(
                gitdir_file = %candidate.display(),
                git_dir = %git_dir.display(),
                "Followed gitdir pointer"
            );
            return Ok(git_dir);
        }
    }

    Err(Error::RepositoryNotFound { start })
}

/// Directory holding the hook files for a git directory
#[must_use]
pub fn hooks_dir(git_dir: &Path) -> PathBuf {
    git_dir.join(HOOKS_DIR_NAME)
}

/// Path of a single hook file
#[must_use]
pub fn hook_path(git_dir: &Path, hook_name: &str) -> PathBuf {
    hooks_dir(git_dir).join(hook_name)
}

/// Resolve the repository a `.git` file in `work_dir` points at
///
/// Linked worktrees share hooks with the main repository, so the common
/// directory is returned.
fn follow_gitdir_file(work_dir: &Path, gitdir_file: &Path) -> Result<PathBuf> {
    let repo = Repository::open(work_dir).map_err(|e| Error::InvalidGitFile {
        path: gitdir_file.to_path_buf(),
        message: e.message().to_string(),
    })?;

    // libgit2 reports directories with a trailing separator
    Ok(repo.commondir().components().collect())
}
