//! Hook wrapper installation
//!
//! For each configured hook with entries: back up a foreign hook already at
//! the target path (when enabled), write the generated wrapper, and mark it
//! executable (when enabled). The first failure aborts the remaining hooks.

use chrono::Local;
use hooky_config::{Config, HookEntry, Settings};
use hooky_core::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::git;
use crate::script::{HookFileState, generate_hook_script};

/// Mode applied to wrappers when `auto_executable` is set
#[cfg(unix)]
const EXECUTABLE_MODE: u32 = 0o755;

/// One installed wrapper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledHook {
    /// Hook name
    pub hook: String,
    /// Wrapper path
    pub path: PathBuf,
    /// Number of entries the wrapper runs
    pub entries: usize,
    /// What was at the path before installing
    pub previous: HookFileState,
    /// Where the previous foreign hook was copied, if it was
    pub backup: Option<PathBuf>,
}

/// Result of an install run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    /// Installed wrappers in configured order
    pub installed: Vec<InstalledHook>,
}

impl InstallReport {
    /// Backups created during the run
    pub fn backups(&self) -> impl Iterator<Item = &Path> {
        self.installed.iter().filter_map(|h| h.backup.as_deref())
    }
}

/// Install wrappers for every hook in `config` that has entries
///
/// Does not validate entries; see [`crate::validate::validate_scripts`].
pub fn install_hooks(config: &Config, git_dir: &Path) -> Result<InstallReport> {
    let hooks_dir = git::hooks_dir(git_dir);
    fs::create_dir_all(&hooks_dir).map_err(|e| Error::DirectoryCreate {
        path: hooks_dir.clone(),
        source: e,
    })?;

    let mut report = InstallReport::default();
    for (hook_name, entries) in config.active_hooks() {
        let installed = install_hook(hook_name, entries, &hooks_dir, &config.settings)?;
        report.installed.push(installed);
    }

    tracing::debug!(count = report.installed.len(), "Installed hooks");
    Ok(report)
}

/// Install a single wrapper into `hooks_dir`
pub fn install_hook(
    hook_name: &str,
    entries: &[HookEntry],
    hooks_dir: &Path,
    settings: &Settings,
) -> Result<InstalledHook> {
    let path = hooks_dir.join(hook_name);
    let previous = HookFileState::inspect(&path)?;

    let backup = if previous == HookFileState::Foreign && settings.backup_existing {
        Some(backup_hook(&path, hook_name, &settings.backup_directory)?)
    } else {
        if previous == HookFileState::Foreign {
            tracing::warn!(
                hook = %hook_name,
                path = %path.display(),
                "Overwriting existing hook without backup"
            );
        }
        None
    };

    let content = generate_hook_script(hook_name, entries);
    fs::write(&path, content).map_err(|e| Error::FileWrite {
        path: path.clone(),
        source: e,
    })?;

    if settings.auto_executable {
        make_executable(&path)?;
    }

    tracing::info!(hook = %hook_name, path = %path.display(), "Installed hook");

    Ok(InstalledHook {
        hook: hook_name.to_string(),
        path,
        entries: entries.len(),
        previous,
        backup,
    })
}

/// Copy `hook_path` into `backup_dir`, never overwriting an earlier backup
///
/// Backups are named `<hook>.<timestamp>.bak`, with `-<n>` added before the
/// extension on collision. The directory is created if needed.
pub fn backup_hook(hook_path: &Path, hook_name: &str, backup_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(backup_dir).map_err(|e| Error::DirectoryCreate {
        path: backup_dir.to_path_buf(),
        source: e,
    })?;

    let timestamp = Local::now().format("%Y%m%d%H%M%S").to_string();
    let backup_path = unique_backup_path(backup_dir, hook_name, &timestamp);

    fs::copy(hook_path, &backup_path).map_err(|e| Error::Backup {
        from: hook_path.to_path_buf(),
        to: backup_path.clone(),
        source: e,
    })?;

    tracing::info!(
        hook = %hook_name,
        backup = %backup_path.display(),
        "Backed up existing hook"
    );
    Ok(backup_path)
}

fn unique_backup_path(backup_dir: &Path, hook_name: &str, timestamp: &str) -> PathBuf {
    let first = backup_dir.join(format!("{hook_name}.{timestamp}.bak"));
    if !first.exists() {
        return first;
    }

    (1..)
        .map(|n| backup_dir.join(format!("{hook_name}.{timestamp}-{n}.bak")))
        .find(|candidate| !candidate.exists())
        .unwrap_or(first)
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(EXECUTABLE_MODE)).map_err(|e| {
        Error::Permissions {
            path: path.to_path_buf(),
            source: e,
        }
    })
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    // Git for Windows runs hooks through sh regardless of mode
    Ok(())
}
