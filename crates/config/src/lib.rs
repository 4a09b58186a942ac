//! Configuration management for hooky
//!
//! This crate handles:
//! - Locating and loading the hook configuration file (YAML or TOML)
//! - Populating default settings
//! - Structural validation of hook entries
//! - Logging initialization

pub mod config;
pub mod logging;

// Re-export error types from core
pub use hooky_core::{Error, Result};

// Re-export main types
pub use config::{
    Config, ConfigFormat, DEFAULT_BACKUP_DIRECTORY, DEFAULT_CONFIG_FILES, EntryAction, HookEntry,
    Settings, discover_config_file,
};
