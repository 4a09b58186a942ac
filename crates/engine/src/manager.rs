//! Per-invocation orchestrator
//!
//! [`HookManager`] loads the configuration and locates the git directory on
//! first use, then hands both explicitly to the install, uninstall and
//! validation functions.

use hooky_config::Config;
use hooky_core::Result;
use std::path::{Path, PathBuf};

use crate::git;
use crate::install::{self, InstallReport};
use crate::script::HookFileState;
use crate::uninstall::{self, UninstallReport};
use crate::validate::{self, HookReport};

/// Loaded configuration and resolved git directory
#[derive(Debug, Clone)]
pub struct ManagerContext {
    /// Configuration read from disk
    pub config: Config,
    /// Git metadata directory
    pub git_dir: PathBuf,
}

/// Orchestrates hook operations for one invocation
#[derive(Debug)]
pub struct HookManager {
    config_path: PathBuf,
    verbose: bool,
    context: Option<ManagerContext>,
}

impl HookManager {
    /// Manager that loads `config_path` and searches from the working directory
    pub fn new(config_path: impl Into<PathBuf>, verbose: bool) -> Self {
        Self {
            config_path: config_path.into(),
            verbose,
            context: None,
        }
    }

    /// Manager over an already loaded configuration and known git directory
    pub fn with_parts(config: Config, git_dir: impl Into<PathBuf>, verbose: bool) -> Self {
        Self {
            config_path: PathBuf::new(),
            verbose,
            context: Some(ManagerContext {
                config,
                git_dir: git_dir.into(),
            }),
        }
    }

    /// Path of the configuration file
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Load the configuration and locate the git directory, once
    pub fn init(&mut self) -> Result<&ManagerContext> {
        let context = match self.context.take() {
            Some(context) => context,
            None => self.load()?,
        };
        Ok(&*self.context.insert(context))
    }

    fn load(&self) -> Result<ManagerContext> {
        let config = Config::load(&self.config_path)?;
        let git_dir = git::find_git_directory()?;
        tracing::debug!(
            config = %self.config_path.display(),
            git_dir = %git_dir.display(),
            hooks = config.hooks.len(),
            "Initialized"
        );
        Ok(ManagerContext { config, git_dir })
    }

    /// Verbose flag, or the configured setting once initialized
    pub fn verbose(&self) -> bool {
        self.verbose
            || self
                .context
                .as_ref()
                .is_some_and(|c| c.config.settings.verbose)
    }

    /// Check every configured script and command, reporting all problems
    pub fn validate_scripts(&mut self) -> Result<()> {
        let context = self.init()?;
        validate::validate_scripts(&context.config)
    }

    /// Validate, then write a wrapper for every hook with entries
    pub fn install_hooks(&mut self) -> Result<InstallReport> {
        let context = self.init()?;
        validate::validate_scripts(&context.config)?;
        install::install_hooks(&context.config, &context.git_dir)
    }

    /// Remove every wrapper hooky generated
    pub fn uninstall_hooks(&mut self) -> Result<UninstallReport> {
        let context = self.init()?;
        uninstall::uninstall_hooks(&context.config, &context.git_dir)
    }

    /// Describe configured hooks, their entries' validity and what is installed
    pub fn list_hooks(&mut self) -> Result<Vec<HookReport>> {
        let context = self.init()?;
        let git_dir = context.git_dir.as_path();
        validate::report(&context.config, |name| {
            HookFileState::inspect(&git::hook_path(git_dir, name))
        })
    }
}
