//! Configuration management
//!
//! This module loads the hook configuration file and turns it into a typed,
//! validated [`Config`]. The file maps git hook names to an ordered list of
//! entries, each of which runs either a script file or a shell command:
//!
//! ```yaml
//! hooks:
//!   pre-commit:
//!     - name: lint
//!       script: scripts/lint.sh --strict
//!       description: Lint staged files
//!     - name: test
//!       command: cargo test
//!       description: Run the test suite
//! settings:
//!   backup_directory: .hooky-backup
//! ```

use crate::{Error, Result};
use hooky_core::hooks;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names tried, in order, when no path is given explicitly
pub const DEFAULT_CONFIG_FILES: &[&str] = &["hooky.yaml", "hooky.yml", "hooky.toml"];

/// Backup directory used when the settings block does not name one
pub const DEFAULT_BACKUP_DIRECTORY: &str = ".hooky-backup";

/// Serialization format of a config file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML (`.yaml`, `.yml`, and anything unrecognised)
    Yaml,
    /// TOML (`.toml`)
    Toml,
}

impl ConfigFormat {
    /// Pick the format from a file extension
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Yaml,
        }
    }
}

/// What a hook entry runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryAction {
    /// Path to a script file, optionally followed by arguments
    Script(String),
    /// Shell command line
    Command(String),
}

impl EntryAction {
    /// The configured script path or command line, verbatim
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Script(s) | Self::Command(s) => s,
        }
    }

    /// `"script"` or `"command"`
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Script(_) => "script",
            Self::Command(_) => "command",
        }
    }
}

/// A single configured action for a hook
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HookEntry {
    /// Human-readable name, shown when the wrapper runs the entry
    pub name: String,

    /// Free-form description
    pub description: String,

    /// Script or command to run
    #[serde(flatten)]
    pub action: EntryAction,
}

impl HookEntry {
    /// Create an entry that runs a script file
    pub fn script(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            action: EntryAction::Script(path.into()),
        }
    }

    /// Create an entry that runs a shell command
    pub fn command(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            action: EntryAction::Command(command.into()),
        }
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Behavioral settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Mark installed wrappers executable
    #[serde(default = "default_true")]
    pub auto_executable: bool,

    /// Copy foreign hooks aside before overwriting them
    #[serde(default = "default_true")]
    pub backup_existing: bool,

    /// Where backups go, relative paths resolve against the working directory
    #[serde(default = "default_backup_directory")]
    pub backup_directory: PathBuf,

    /// Print per-hook detail
    #[serde(default)]
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_executable: true,
            backup_existing: true,
            backup_directory: default_backup_directory(),
            verbose: false,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_backup_directory() -> PathBuf {
    PathBuf::from(DEFAULT_BACKUP_DIRECTORY)
}

/// Loaded, validated configuration
///
/// Immutable once loaded. Hooks keep the order they were written in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Hook name to ordered entries
    pub hooks: IndexMap<String, Vec<HookEntry>>,

    /// Behavioral settings
    pub settings: Settings,
}

/// Config as written on disk, before structural validation
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    hooks: Option<IndexMap<String, Option<Vec<RawEntry>>>>,

    #[serde(default)]
    settings: Option<Settings>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(default)]
    name: String,

    #[serde(default)]
    script: Option<String>,

    #[serde(default)]
    command: Option<String>,

    #[serde(default)]
    description: String,
}

impl Config {
    /// Load and validate a config file
    ///
    /// The format is chosen from the file extension, see [`ConfigFormat::from_path`].
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        tracing::debug!(path = %path.display(), "Loading configuration");

        let raw = RawConfig::parse(&content, ConfigFormat::from_path(path)).map_err(|e| {
            Error::Config(format!(
                "failed to parse config file {}: {e}",
                path.display()
            ))
        })?;
        Self::from_raw(raw)
    }

    /// Parse and validate config text in the given format
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self> {
        let raw = RawConfig::parse(content, format)
            .map_err(|e| Error::Config(format!("failed to parse config file: {e}")))?;
        Self::from_raw(raw)
    }

    /// Parse and validate YAML config text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Self::parse(content, ConfigFormat::Yaml)
    }

    /// Parse and validate TOML config text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, ConfigFormat::Toml)
    }

    fn from_raw(raw: RawConfig) -> Result<Self> {
        let mut hooks = IndexMap::new();

        for (hook_name, entries) in raw.hooks.unwrap_or_default() {
            if !hooks::is_supported(&hook_name) {
                tracing::warn!(
                    hook = %hook_name,
                    "Unknown git hook name (typo?), it will still be managed"
                );
            }

            let entries = entries
                .unwrap_or_default()
                .into_iter()
                .enumerate()
                .map(|(index, entry)| entry.into_entry(&hook_name, index))
                .collect::<Result<Vec<_>>>()?;

            hooks.insert(hook_name, entries);
        }

        Ok(Self {
            hooks,
            settings: raw.settings.unwrap_or_default(),
        })
    }

    /// Entries configured for a hook
    #[must_use]
    pub fn hook(&self, name: &str) -> Option<&[HookEntry]> {
        self.hooks.get(name).map(Vec::as_slice)
    }

    /// Hooks that have at least one entry, in configured order
    pub fn active_hooks(&self) -> impl Iterator<Item = (&str, &[HookEntry])> {
        self.hooks
            .iter()
            .filter(|(_, entries)| !entries.is_empty())
            .map(|(name, entries)| (name.as_str(), entries.as_slice()))
    }

    /// Total number of configured entries across all hooks
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.hooks.values().map(Vec::len).sum()
    }
}

impl RawConfig {
    fn parse(content: &str, format: ConfigFormat) -> std::result::Result<Self, String> {
        match format {
            // An empty YAML document deserializes to unit, not a mapping
            ConfigFormat::Yaml if content.trim().is_empty() => Ok(Self {
                hooks: None,
                settings: None,
            }),
            ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

impl RawEntry {
    /// Enforce that exactly one of `script`/`command` is set
    fn into_entry(self, hook: &str, index: usize) -> Result<HookEntry> {
        let script = self.script.filter(|s| !s.is_empty());
        let command = self.command.filter(|c| !c.is_empty());

        let action = match (script, command) {
            (Some(script), None) => EntryAction::Script(script),
            (None, Some(command)) => EntryAction::Command(command),
            (None, None) => {
                return Err(Error::Config(format!(
                    "hook {hook}[{index}] ({}): must specify either 'script' or 'command'",
                    self.name
                )));
            }
            (Some(_), Some(_)) => {
                return Err(Error::Config(format!(
                    "hook {hook}[{index}] ({}): cannot specify both 'script' and 'command', use only one",
                    self.name
                )));
            }
        };

        Ok(HookEntry {
            name: self.name,
            description: self.description,
            action,
        })
    }
}

/// Find the config file to use in `dir`
///
/// Returns the first of [`DEFAULT_CONFIG_FILES`] that exists, or the first
/// name when none does, so the caller reports a sensible "not found" path.
#[must_use]
pub fn discover_config_file(dir: &Path) -> PathBuf {
    DEFAULT_CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
        .unwrap_or_else(|| dir.join(DEFAULT_CONFIG_FILES[0]))
}
