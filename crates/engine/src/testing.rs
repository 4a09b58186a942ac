//! Shared fixtures for unit tests

#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::{Path, PathBuf};

/// Restores the previous working directory when dropped
///
/// Tests holding one must be `#[serial]`.
pub(crate) struct CwdGuard {
    previous: PathBuf,
}

impl CwdGuard {
    pub(crate) fn change_to(dir: &Path) -> Self {
        let previous = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir).unwrap();
        Self { previous }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.previous);
    }
}

/// Create `<root>/.git/hooks` and return the `.git` path
pub(crate) fn init_git_dir(root: &Path) -> PathBuf {
    let git_dir = root.join(".git");
    fs::create_dir_all(git_dir.join("hooks")).unwrap();
    git_dir
}

/// Write an executable shell script
pub(crate) fn write_script(path: &Path, body: &str) {
    fs::write(path, format!("#!/bin/sh\n{body}\n")).unwrap();

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    }
}
