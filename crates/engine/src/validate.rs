//! Pre-flight validation of configured entries
//!
//! Checks presence only: a script entry's file must exist, a command entry's
//! executable must resolve on `PATH`. Nothing is executed.
//!
//! Both checks look at the first whitespace-delimited token and nothing else.
//! Quoting is not understood, so a quoted path containing spaces is split at
//! the first space. Existing configurations depend on this behavior.
//!
//! Relative script paths resolve against the process working directory.

use hooky_config::{Config, EntryAction, HookEntry};
use hooky_core::{Result, ValidationErrors, ValidationIssue, hooks};
use serde::Serialize;
use std::path::Path;

use crate::script::HookFileState;

/// First whitespace-delimited token of a script or command line
#[must_use]
pub fn first_token(s: &str) -> &str {
    s.split_whitespace().next().unwrap_or_default()
}

/// Check a single entry
pub fn check_entry(
    hook: &str,
    index: usize,
    entry: &HookEntry,
) -> std::result::Result<(), ValidationIssue> {
    match &entry.action {
        EntryAction::Script(script) => {
            let path = first_token(script);
            if path.is_empty() || !Path::new(path).exists() {
                return Err(ValidationIssue::MissingScript {
                    hook: hook.to_string(),
                    index,
                    name: entry.name.clone(),
                    path: path.to_string(),
                });
            }
        }
        EntryAction::Command(command) => {
            let program = first_token(command);
            if program.is_empty() || which::which(program).is_err() {
                return Err(ValidationIssue::MissingCommand {
                    hook: hook.to_string(),
                    index,
                    name: entry.name.clone(),
                    command: program.to_string(),
                });
            }
        }
    }

    Ok(())
}

/// Validate every entry of every hook
///
/// Does not stop at the first problem: the returned error lists them all.
pub fn validate_scripts(config: &Config) -> Result<()> {
    let mut errors = ValidationErrors::new();

    for (hook, entries) in &config.hooks {
        for (index, entry) in entries.iter().enumerate() {
            if let Err(issue) = check_entry(hook, index, entry) {
                tracing::debug!(%issue, "Validation problem");
                errors.push(issue);
            }
        }
    }

    if errors.is_empty() {
        tracing::debug!(entries = config.entry_count(), "All entries valid");
    }

    errors.into_result()
}

/// Validity of one entry, for reporting
#[derive(Debug, Clone, Serialize)]
pub struct EntryReport {
    /// Position within the hook
    pub index: usize,

    /// Entry definition
    #[serde(flatten)]
    pub entry: HookEntry,

    /// Problem found, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem: Option<String>,
}

impl EntryReport {
    /// Whether the entry passed validation
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.problem.is_none()
    }
}

/// Validity of every entry of one hook, plus what is installed for it
#[derive(Debug, Clone, Serialize)]
pub struct HookReport {
    /// Hook name
    pub name: String,

    /// Whether git knows this hook name
    pub supported: bool,

    /// What currently sits at the hook path
    pub installed: HookFileState,

    /// Per-entry results in configured order
    pub entries: Vec<EntryReport>,
}

impl HookReport {
    /// Number of entries that failed validation
    #[must_use]
    pub fn invalid_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_valid()).count()
    }
}

/// Build a report for every configured hook without failing on invalid entries
///
/// `installed` supplies the on-disk state of each hook.
pub fn report(
    config: &Config,
    mut installed: impl FnMut(&str) -> Result<HookFileState>,
) -> Result<Vec<HookReport>> {
    config
        .hooks
        .iter()
        .map(|(name, entries)| {
            Ok(HookReport {
                name: name.clone(),
                supported: hooks::is_supported(name),
                installed: installed(name)?,
                entries: entries
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| EntryReport {
                        index,
                        entry: entry.clone(),
                        problem: check_entry(name, index, entry)
                            .err()
                            .map(|issue| issue_detail(&issue)),
                    })
                    .collect(),
            })
        })
        .collect()
}

/// The problem without the hook/index prefix
fn issue_detail(issue: &ValidationIssue) -> String {
    match issue {
        ValidationIssue::MissingScript { path, .. } => format!("script file '{path}' not found"),
        ValidationIssue::MissingCommand { command, .. } => {
            format!("command '{command}' not found in PATH")
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use crate::testing::{CwdGuard, write_script};
    use hooky_core::Error;
    use indexmap::IndexMap;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    fn config_with(hooks: Vec<(&str, Vec<HookEntry>)>) -> Config {
        Config {
            hooks: hooks
                .into_iter()
                .map(|(name, entries)| (name.to_string(), entries))
                .collect::<IndexMap<_, _>>(),
            ..Config::default()
        }
    }

    fn single(entry: HookEntry) -> Config {
        config_with(vec![("pre-commit", vec![entry])])
    }

    #[test]
    fn test_first_token() {
        assert_eq!(first_token("test.sh --verbose"), "test.sh");
        assert_eq!(first_token("  go   test ./..."), "go");
        assert_eq!(first_token("single"), "single");
        assert_eq!(first_token("   "), "");
    }

    #[test]
    fn test_existing_script_is_valid() {
        let temp = TempDir::new().unwrap();
        let script = temp.path().join("test-script.sh");
        write_script(&script, "echo test");

        let config = single(HookEntry::script("test", script.to_string_lossy()));
        assert!(validate_scripts(&config).is_ok());
    }

    #[test]
    fn test_script_with_arguments_is_valid() {
        let temp = TempDir::new().unwrap();
        let script = temp.path().join("multi-arg.sh");
        write_script(&script, "echo test");

        let config = single(HookEntry::script(
            "test",
            format!("{} --flag1 --flag2 value", script.display()),
        ));
        assert!(validate_scripts(&config).is_ok());
    }

    #[test]
    fn test_non_executable_script_is_valid() {
        let temp = TempDir::new().unwrap();
        let script = temp.path().join("valid.py");
        fs::write(&script, "print('valid')").unwrap();

        let config = single(HookEntry::script("test", script.to_string_lossy()));
        assert!(validate_scripts(&config).is_ok());
    }

    #[test]
    fn test_missing_script_reported() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.sh");

        let config = single(HookEntry::script(
            "test",
            format!("{} --arg", missing.display()),
        ));
        let msg = validate_scripts(&config).unwrap_err().to_string();
        assert!(msg.contains(&format!("script file '{}' not found", missing.display())));
        assert!(msg.contains("pre-commit[0] (test)"));
    }

    #[test]
    fn test_command_on_path_is_valid() {
        for command in ["echo hello", "ls -la", "echo test | grep test > /dev/null"] {
            let config = single(HookEntry::command("test", command));
            assert!(validate_scripts(&config).is_ok(), "{command} should resolve");
        }
    }

    #[test]
    fn test_missing_command_reported() {
        let config = single(HookEntry::command("test", "nonexistent-cmd-xyz --flag"));
        let msg = validate_scripts(&config).unwrap_err().to_string();
        assert!(msg.contains("command 'nonexistent-cmd-xyz' not found in PATH"));
    }

    #[test]
    fn test_command_given_as_path() {
        let temp = TempDir::new().unwrap();
        let tool = temp.path().join("tool");
        write_script(&tool, "exit 0");

        let config = single(HookEntry::command("tool", format!("{} --check", tool.display())));
        assert!(validate_scripts(&config).is_ok());
    }

    #[test]
    fn test_every_problem_reported() {
        let temp = TempDir::new().unwrap();
        let valid = temp.path().join("valid.sh");
        write_script(&valid, "echo ok");
        let missing = temp.path().join("missing.sh");

        let config = config_with(vec![
            (
                "pre-commit",
                vec![
                    HookEntry::script("valid", valid.to_string_lossy()),
                    HookEntry::script("invalid", missing.to_string_lossy()),
                ],
            ),
            (
                "pre-push",
                vec![
                    HookEntry::command("ok", "echo ok"),
                    HookEntry::command("bad", "nonexistent-command-12345"),
                ],
            ),
        ]);

        let err = validate_scripts(&config).unwrap_err();
        let Error::Validation(errors) = &err else {
            panic!("expected validation error, got {err:?}");
        };
        assert_eq!(errors.len(), 2);

        let msg = err.to_string();
        assert!(msg.contains("pre-commit[1] (invalid)"));
        assert!(msg.contains("pre-push[1] (bad)"));
        assert!(msg.contains("command 'nonexistent-command-12345' not found in PATH"));
    }

    #[test]
    fn test_quoted_path_with_spaces_is_split() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("dir with spaces");
        fs::create_dir(&dir).unwrap();
        let script = dir.join("run.sh");
        write_script(&script, "echo hi");

        let config = single(HookEntry::script(
            "spaced",
            format!("'{}'", script.display()),
        ));
        assert!(validate_scripts(&config).is_err());
    }

    #[test]
    #[serial]
    fn test_relative_paths_resolve_against_working_directory() {
        let temp = TempDir::new().unwrap();
        write_script(&temp.path().join("valid.sh"), "echo valid");
        fs::create_dir(temp.path().join("subdir")).unwrap();
        write_script(&temp.path().join("subdir").join("sub.sh"), "echo sub");
        let _cwd = CwdGuard::change_to(temp.path());

        let config = config_with(vec![(
            "pre-commit",
            vec![
                HookEntry::script("valid", "valid.sh --verbose"),
                HookEntry::script("sub", "subdir/sub.sh"),
            ],
        )]);
        assert!(validate_scripts(&config).is_ok());

        let config = single(HookEntry::script("test", "missing.sh --arg"));
        let msg = validate_scripts(&config).unwrap_err().to_string();
        assert!(msg.contains("script file 'missing.sh' not found"));
    }

    #[test]
    fn test_report_marks_each_entry() {
        let config = config_with(vec![
            (
                "pre-commit",
                vec![
                    HookEntry::command("valid-command", "echo test"),
                    HookEntry::command("missing-command", "nonexistent-cmd-xyz"),
                    HookEntry::script("missing-script", "/nonexistent/hooky/missing.sh"),
                ],
            ),
            ("pre-deploy", vec![]),
        ]);

        let reports = report(&config, |_| Ok(HookFileState::Absent)).unwrap();
        assert_eq!(reports.len(), 2);

        let pre_commit = &reports[0];
        assert!(pre_commit.supported);
        assert_eq!(pre_commit.invalid_count(), 2);
        assert!(pre_commit.entries[0].is_valid());
        assert_eq!(
            pre_commit.entries[1].problem.as_deref(),
            Some("command 'nonexistent-cmd-xyz' not found in PATH")
        );
        assert_eq!(
            pre_commit.entries[2].problem.as_deref(),
            Some("script file '/nonexistent/hooky/missing.sh' not found")
        );

        assert!(!reports[1].supported);
        assert!(reports[1].entries.is_empty());
    }

    #[test]
    fn test_report_serializes() {
        let config = single(HookEntry::command("valid", "echo test"));
        let reports = report(&config, |_| Ok(HookFileState::Managed)).unwrap();

        let value = serde_json::to_value(&reports).unwrap();
        assert_eq!(value[0]["name"], "pre-commit");
        assert_eq!(value[0]["installed"], "managed");
        assert_eq!(value[0]["entries"][0]["command"], "echo test");
        assert!(value[0]["entries"][0].get("problem").is_none());
    }
}
