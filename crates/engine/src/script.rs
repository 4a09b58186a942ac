//! Hook wrapper generation
//!
//! A wrapper is a POSIX shell script installed as the actual hook file. It
//! runs each configured entry in order under `set -e`, so the first failing
//! entry fails the whole hook.
//!
//! Every wrapper carries [`SIGNATURE`]. Uninstall relies on it alone to tell
//! managed hooks from user-authored ones, so the text must never change.

use hooky_config::{EntryAction, HookEntry};
use hooky_core::{Error, Result};
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Marker identifying wrappers written by hooky
pub const SIGNATURE: &str = "Generated by hooky";

/// Interpreter line every wrapper starts with
pub const SHEBANG: &str = "#!/bin/sh";

/// Whether hook file content was generated by hooky
#[must_use]
pub fn is_managed_hook(content: &str) -> bool {
    content.contains(SIGNATURE)
}

/// Render the wrapper script for `hook_name`
///
/// Pure function of its inputs. Script arguments and command lines are
/// emitted verbatim.
#[must_use]
pub fn generate_hook_script(hook_name: &str, entries: &[HookEntry]) -> String {
    let mut script = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(script, "{SHEBANG}");
    let _ = writeln!(script, "# {SIGNATURE} - Do not edit manually");
    let _ = writeln!(script, "# Hook: {hook_name}");
    script.push('\n');
    script.push_str("set -e\n");

    for entry in entries {
        script.push('\n');
        let _ = writeln!(
            script,
            "echo {}",
            shell_quote(&format!("Running: {}", entry.name))
        );
        let _ = writeln!(script, "{}", invocation(&entry.action));
        for line in entry.description.lines() {
            let _ = writeln!(script, "# {line}");
        }
    }

    script
}

/// Shell line that runs an entry
fn invocation(action: &EntryAction) -> String {
    match action {
        EntryAction::Command(command) => command.clone(),
        EntryAction::Script(script) => {
            let script = script.trim_start();
            let program = script.split_whitespace().next().unwrap_or_default();

            // A bare file name would otherwise be looked up on PATH
            if program.is_empty() || program.contains('/') {
                script.to_string()
            } else {
                format!("./{script}")
            }
        }
    }
}

/// Single-quote a string for `sh`
fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

/// What currently sits at a hook path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HookFileState {
    /// No file
    Absent,
    /// A wrapper generated by hooky
    Managed,
    /// A hook written by someone else
    Foreign,
}

impl HookFileState {
    /// Inspect the file at `path`
    ///
    /// Anything other than a regular file, such as a directory, is reported
    /// as [`HookFileState::Absent`].
    pub fn inspect(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Ok(Self::Absent);
        }

        let content = fs::read(path).map_err(|e| Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        if is_managed_hook(&String::from_utf8_lossy(&content)) {
            Ok(Self::Managed)
        } else {
            Ok(Self::Foreign)
        }
    }

    /// Short label for display
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Absent => "not installed",
            Self::Managed => "installed",
            Self::Foreign => "foreign hook",
        }
    }
}
