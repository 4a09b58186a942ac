//! `hooky uninstall`

use anyhow::{Context, Result};
use hooky_engine::{HookManager, UninstallReport};
use owo_colors::OwoColorize;

use crate::ui::StatusIcon;

/// Remove every wrapper hooky generated, leaving other hooks alone
pub fn run(manager: &mut HookManager) -> Result<()> {
    let report = manager
        .uninstall_hooks()
        .context("Failed to uninstall hooks")?;

    for line in render(&report, manager.verbose()) {
        println!("{line}");
    }
    Ok(())
}

/// Output lines for an uninstall report
pub fn render(report: &UninstallReport, verbose: bool) -> Vec<String> {
    let mut lines = Vec::new();

    if verbose {
        for path in &report.removed {
            lines.push(format!("{} Removed {}", StatusIcon::Hook.colored(), path.display()));
        }
        for hook in &report.skipped {
            lines.push(format!(
                "{} Kept {} (not generated by hooky)",
                StatusIcon::Info.colored(),
                hook.cyan()
            ));
        }
    }

    lines.push(format!(
        "{} {}",
        StatusIcon::Success.colored(),
        "Hooks uninstalled successfully".green()
    ));
    lines
}
