//! # Hooky Engine
//!
//! Core library for the hooky git hook manager.
//!
//! Given a validated [`Config`](hooky_config::Config), this crate:
//!
//! - **Locates** the git metadata directory by walking up from a start directory
//! - **Generates** POSIX shell wrappers that run a hook's entries in order
//! - **Validates** that every referenced script file exists and every command
//!   resolves on `PATH`
//! - **Installs** wrappers into `<git dir>/hooks`, backing up foreign hooks
//! - **Uninstalls** only the wrappers it generated, recognised by signature
//!
//! [`HookManager`] ties these together for the CLI. Every component is also
//! usable on its own with an explicitly passed configuration.

pub mod git;
pub mod install;
pub mod manager;
pub mod script;
pub mod uninstall;
pub mod validate;

#[cfg(test)]
pub(crate) mod testing;

// Re-export error types from core
pub use hooky_core::{Error, Result};

// Re-export commonly used types
pub use install::{InstallReport, InstalledHook};
pub use manager::{HookManager, ManagerContext};
pub use script::{HookFileState, SIGNATURE, generate_hook_script, is_managed_hook};
pub use uninstall::UninstallReport;
pub use validate::{EntryReport, HookReport};
