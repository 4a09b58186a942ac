//! hooky CLI library
//!
//! Argument parsing and command dispatch for the `hooky` binary. Kept as a
//! library so the parser can be tested without spawning a process.

pub mod cmd;
pub mod ui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hooky_engine::HookManager;
use std::path::{Path, PathBuf};

/// hooky - Git hooks from a single configuration file
#[derive(Parser, Debug)]
#[command(name = "hooky")]
#[command(about = "Manage git hooks from a single configuration file")]
#[command(version)]
#[command(long_about = "Manage git hooks from a single configuration file

Each configured hook becomes a small shell wrapper in .git/hooks that runs
its scripts and commands in order, stopping at the first failure.

Configuration is read from hooky.yaml (or hooky.yml / hooky.toml) in the
working directory unless --config is given.")]
pub struct Cli {
    /// Path to the config file
    #[arg(short, long, global = true, env = "HOOKY_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output (shows DEBUG level logs and per-hook detail)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write logs to a file (useful for debugging)
    #[arg(long, global = true, env = "HOOKY_LOG_FILE", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Validate the configuration and install hook wrappers
    Install,

    /// Remove hook wrappers generated by hooky
    Uninstall,

    /// Show configured hooks and whether their scripts and commands exist
    List(cmd::list::ListCommand),

    /// Print version information
    Version,
}

/// Resolve the config file: the explicit path, or the first default found in
/// the working directory
fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => {
            let cwd = std::env::current_dir().context("Failed to read working directory")?;
            Ok(hooky_config::discover_config_file(&cwd))
        }
    }
}

/// Run the parsed command line
pub fn run(cli: Cli) -> Result<()> {
    hooky_config::logging::init(cli.verbose, cli.log_file.as_deref())
        .context("Failed to initialize logging")?;

    if cli.command == Commands::Version {
        cmd::version::run();
        return Ok(());
    }

    let config_path = resolve_config_path(cli.config.as_deref())?;
    tracing::debug!(config = %config_path.display(), "Using config file");
    let mut manager = HookManager::new(config_path, cli.verbose);

    match cli.command {
        Commands::Install => cmd::install::run(&mut manager),
        Commands::Uninstall => cmd::uninstall::run(&mut manager),
        Commands::List(list_cmd) => list_cmd.execute(&mut manager),
        Commands::Version => unreachable!("Version command already handled above"),
    }
}
