//! `hooky list`
//!
//! Shows each configured hook, what is installed for it, and whether each
//! entry's script or command can be found. Missing scripts and commands are
//! reported, never treated as errors.

use anyhow::{Context, Result};
use clap::Args;
use hooky_engine::{HookFileState, HookManager, HookReport};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::Path;

use crate::ui::StatusIcon;

/// Output format for `hooky list`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ListFormat {
    /// Human readable
    #[default]
    Simple,
    /// Machine readable
    Json,
}

/// List configured hooks
#[derive(Debug, Args, PartialEq, Eq)]
pub struct ListCommand {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = ListFormat::Simple)]
    pub format: ListFormat,
}

#[derive(Serialize)]
struct ListOutput<'a> {
    config: &'a Path,
    hooks_dir: &'a Path,
    hooks: &'a [HookReport],
}

impl ListCommand {
    /// Print the hook listing
    pub fn execute(&self, manager: &mut HookManager) -> Result<()> {
        let hooks_dir = hooky_engine::git::hooks_dir(&manager.init()?.git_dir);
        let hooks = manager.list_hooks().context("Failed to list hooks")?;
        let config = manager.config_path();

        match self.format {
            ListFormat::Json => {
                let output = ListOutput {
                    config,
                    hooks_dir: &hooks_dir,
                    hooks: &hooks,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            ListFormat::Simple => {
                println!("Config: {}", config.display().cyan());
                println!("Hooks directory: {}", hooks_dir.display().cyan());
                println!();
                for line in render_simple(&hooks) {
                    println!("{line}");
                }
            }
        }

        Ok(())
    }
}

/// Human readable lines for a hook listing
pub fn render_simple(hooks: &[HookReport]) -> Vec<String> {
    if hooks.is_empty() {
        return vec![format!("{}", "No hooks configured.".yellow())];
    }

    let mut lines = Vec::new();
    for hook in hooks {
        let state = match hook.installed {
            HookFileState::Managed => hook.installed.label().green().to_string(),
            HookFileState::Foreign => hook.installed.label().yellow().to_string(),
            HookFileState::Absent => hook.installed.label().dimmed().to_string(),
        };
        let mut header = format!(
            "{} [{state}] ({} entries)",
            hook.name.bold(),
            hook.entries.len()
        );
        if !hook.supported {
            header.push_str(&format!(" {}", "unknown hook name".yellow()));
        }
        lines.push(header);

        for entry in &hook.entries {
            let target = entry.entry.action.as_str();
            match &entry.problem {
                None => lines.push(format!(
                    "  {} {} ({}: {target})",
                    StatusIcon::Success.colored(),
                    entry.entry.name.green(),
                    entry.entry.action.kind()
                )),
                Some(problem) => lines.push(format!(
                    "  {} {} ({}: {target}) {}",
                    StatusIcon::Error.colored(),
                    entry.entry.name.red(),
                    entry.entry.action.kind(),
                    problem.dimmed()
                )),
            }
            if !entry.entry.description.is_empty() {
                lines.push(format!("      {}", entry.entry.description.dimmed()));
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use hooky_config::HookEntry;
    use hooky_engine::EntryReport;

    fn hooks() -> Vec<HookReport> {
        vec![
            HookReport {
                name: "pre-commit".to_string(),
                supported: true,
                installed: HookFileState::Managed,
                entries: vec![
                    EntryReport {
                        index: 0,
                        entry: HookEntry::command("fmt", "cargo fmt --check")
                            .with_description("Check formatting"),
                        problem: None,
                    },
                    EntryReport {
                        index: 1,
                        entry: HookEntry::script("lint", "lint.sh"),
                        problem: Some("script file 'lint.sh' not found".to_string()),
                    },
                ],
            },
            HookReport {
                name: "pre-deploy".to_string(),
                supported: false,
                installed: HookFileState::Absent,
                entries: vec![],
            },
        ]
    }

    #[test]
    fn test_render_simple() {
        let lines = render_simple(&hooks());
        assert_eq!(lines.len(), 5);

        assert!(lines[0].contains("pre-commit"));
        assert!(lines[0].contains("installed"));
        assert!(lines[0].contains("(2 entries)"));
        assert!(lines[1].contains("[OK]"));
        assert!(lines[1].contains("command: cargo fmt --check"));
        assert!(lines[2].contains("Check formatting"));
        assert!(lines[3].contains("[X]"));
        assert!(lines[3].contains("script file 'lint.sh' not found"));
        assert!(lines[4].contains("unknown hook name"));
    }

    #[test]
    fn test_render_empty() {
        let lines = render_simple(&[]);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("No hooks configured."));
    }

    #[test]
    fn test_json_shape() {
        let hooks = hooks();
        let output = ListOutput {
            config: Path::new("hooky.yaml"),
            hooks_dir: Path::new(".git/hooks"),
            hooks: &hooks,
        };
        let value = serde_json::to_value(&output).unwrap();

        assert_eq!(value["config"], "hooky.yaml");
        assert_eq!(value["hooks"][0]["installed"], "managed");
        assert_eq!(value["hooks"][0]["entries"][1]["script"], "lint.sh");
        assert_eq!(
            value["hooks"][0]["entries"][1]["problem"],
            "script file 'lint.sh' not found"
        );
        assert_eq!(value["hooks"][1]["supported"], false);
    }
}
