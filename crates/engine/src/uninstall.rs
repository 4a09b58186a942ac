//! Removal of hooky-generated wrappers
//!
//! A hook file is removed only when it carries the signature. Hand-written
//! hooks and the `*.sample` files git ships are left alone.

use hooky_config::Config;
use hooky_core::{Error, Result};
use indexmap::IndexSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::git;
use crate::script::HookFileState;

/// Result of an uninstall run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UninstallReport {
    /// Wrappers removed
    pub removed: Vec<PathBuf>,
    /// Hooks left in place because they were not generated by hooky
    pub skipped: Vec<String>,
}

impl UninstallReport {
    /// Whether nothing was removed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty()
    }
}

/// Remove every managed wrapper from `<git_dir>/hooks`
///
/// Considers the configured hook names plus every file already in the
/// directory, so wrappers for hooks since removed from the configuration are
/// cleaned up too. A missing hooks directory is not an error.
pub fn uninstall_hooks(config: &Config, git_dir: &Path) -> Result<UninstallReport> {
    let hooks_dir = git::hooks_dir(git_dir);
    let mut report = UninstallReport::default();

    if !hooks_dir.is_dir() {
        tracing::debug!(path = %hooks_dir.display(), "No hooks directory");
        return Ok(report);
    }

    let mut candidates: IndexSet<String> = config.hooks.keys().cloned().collect();
    candidates.extend(hook_files(&hooks_dir)?);

    for hook_name in &candidates {
        let path = hooks_dir.join(hook_name);
        match HookFileState::inspect(&path)? {
            HookFileState::Absent => {}
            HookFileState::Foreign => {
                if config.hooks.contains_key(hook_name) {
                    tracing::info!(hook = %hook_name, "Leaving hook not generated by hooky");
                }
                report.skipped.push(hook_name.clone());
            }
            HookFileState::Managed => {
                fs::remove_file(&path).map_err(|e| Error::FileRemove {
                    path: path.clone(),
                    source: e,
                })?;
                tracing::info!(hook = %hook_name, path = %path.display(), "Removed hook");
                report.removed.push(path);
            }
        }
    }

    Ok(report)
}

/// Names of regular files in the hooks directory, excluding git's samples
fn hook_files(hooks_dir: &Path) -> Result<Vec<String>> {
    let read_dir = fs::read_dir(hooks_dir).map_err(|e| Error::DirectoryRead {
        path: hooks_dir.to_path_buf(),
        source: e,
    })?;

    let mut names = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| Error::DirectoryRead {
            path: hooks_dir.to_path_buf(),
            source: e,
        })?;

        if !entry.file_type().is_ok_and(|t| t.is_file()) {
            continue;
        }

        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        if name.ends_with(".sample") {
            continue;
        }
        names.push(name);
    }

    names.sort();
    Ok(names)
}
