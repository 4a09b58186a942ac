//! Status markers for command output
//!
//! Plain text so output stays readable without special fonts and when piped.

use owo_colors::OwoColorize;

/// Status marker text
pub struct Icons;

impl Icons {
    /// Operation or entry succeeded
    pub const STATUS_SUCCESS: &'static str = "[OK]";
    /// Something was skipped or needs attention
    pub const STATUS_WARNING: &'static str = "[!]";
    /// Entry failed validation
    pub const STATUS_ERROR: &'static str = "[X]";
    /// Informational note
    pub const STATUS_INFO: &'static str = "[i]";
    /// A hook file
    pub const STATUS_HOOK: &'static str = "[*]";
}

/// Status icon type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIcon {
    /// [`Icons::STATUS_SUCCESS`], green
    Success,
    /// [`Icons::STATUS_WARNING`], yellow
    Warning,
    /// [`Icons::STATUS_ERROR`], red
    Error,
    /// [`Icons::STATUS_INFO`], blue
    Info,
    /// [`Icons::STATUS_HOOK`], cyan
    Hook,
}

impl StatusIcon {
    /// Marker text
    pub fn get(self) -> &'static str {
        match self {
            Self::Success => Icons::STATUS_SUCCESS,
            Self::Warning => Icons::STATUS_WARNING,
            Self::Error => Icons::STATUS_ERROR,
            Self::Info => Icons::STATUS_INFO,
            Self::Hook => Icons::STATUS_HOOK,
        }
    }

    /// Marker text in the status colour
    pub fn colored(self) -> String {
        let text = self.get();
        match self {
            Self::Success => text.green().to_string(),
            Self::Warning => text.yellow().to_string(),
            Self::Error => text.red().to_string(),
            Self::Info => text.blue().to_string(),
            Self::Hook => text.cyan().to_string(),
        }
    }
}
