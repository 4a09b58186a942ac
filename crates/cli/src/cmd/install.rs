//! `hooky install`

use anyhow::{Context, Result};
use hooky_engine::{HookManager, InstallReport};
use owo_colors::OwoColorize;

use crate::ui::StatusIcon;

/// Validate every entry, then write the hook wrappers
pub fn run(manager: &mut HookManager) -> Result<()> {
    let report = manager
        .install_hooks()
        .context("Failed to install hooks")?;

    for line in render(&report, manager.verbose()) {
        println!("{line}");
    }
    Ok(())
}

/// Output lines for an install report
///
/// Backups are always mentioned; per-hook detail only when verbose.
pub fn render(report: &InstallReport, verbose: bool) -> Vec<String> {
    let mut lines = Vec::new();

    if report.installed.is_empty() {
        lines.push(format!(
            "{} {}",
            StatusIcon::Warning.colored(),
            "No hooks with entries configured".yellow()
        ));
    }

    for hook in &report.installed {
        if verbose {
            let noun = if hook.entries == 1 { "entry" } else { "entries" };
            lines.push(format!(
                "{} {} -> {} ({} {noun})",
                StatusIcon::Hook.colored(),
                hook.hook.cyan(),
                hook.path.display(),
                hook.entries
            ));
        }
        if let Some(backup) = &hook.backup {
            lines.push(format!(
                "{} Backed up existing {} hook to {}",
                StatusIcon::Info.colored(),
                hook.hook.cyan(),
                backup.display()
            ));
        }
    }

    lines.push(format!(
        "{} {}",
        StatusIcon::Success.colored(),
        "Hooks installed successfully".green()
    ));
    lines
}
