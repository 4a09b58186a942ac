//! Base error types for hooky
//!
//! This module provides the error types every hooky crate reports through.
//! Configuration and repository errors are fatal as soon as they occur, while
//! validation problems are collected into a single [`ValidationErrors`] value
//! so that one run surfaces all of them.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Base error type for hooky
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed or structurally invalid configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// No git metadata directory was found
    #[error(
        "not a git repository (or any of the parent directories): {}",
        start.display()
    )]
    RepositoryNotFound {
        /// Directory the search started from
        start: PathBuf,
    },

    /// A `.git` file that does not resolve to a repository
    #[error("invalid gitfile {}: {message}", path.display())]
    InvalidGitFile {
        /// The `.git` file
        path: PathBuf,
        /// Why it could not be followed
        message: String,
    },

    /// One or more configured scripts or commands could not be found
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Error reading a file
    #[error("failed to read file {}: {source}", path.display())]
    FileRead {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Error writing a file
    #[error("failed to write file {}: {source}", path.display())]
    FileWrite {
        /// File that could not be written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Error removing a file
    #[error("failed to remove file {}: {source}", path.display())]
    FileRemove {
        /// File that could not be removed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Error creating a directory
    #[error("failed to create directory {}: {source}", path.display())]
    DirectoryCreate {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Error listing a directory
    #[error("failed to read directory {}: {source}", path.display())]
    DirectoryRead {
        /// Directory that could not be listed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Error copying an existing hook into the backup directory
    #[error("failed to back up {} to {}: {source}", from.display(), to.display())]
    Backup {
        /// Hook file being backed up
        from: PathBuf,
        /// Backup destination
        to: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Error changing file permissions
    #[error("failed to set permissions on {}: {source}", path.display())]
    Permissions {
        /// File whose mode could not be changed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// A single problem found while validating configured entries
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// The script file referenced by an entry does not exist
    #[error("hook {hook}[{index}] ({name}): script file '{path}' not found")]
    MissingScript {
        /// Hook the entry belongs to
        hook: String,
        /// Position of the entry within the hook
        index: usize,
        /// Entry name
        name: String,
        /// Script path as written in the configuration (first token only)
        path: String,
    },

    /// The executable named by a command entry is not on `PATH`
    #[error("hook {hook}[{index}] ({name}): command '{command}' not found in PATH")]
    MissingCommand {
        /// Hook the entry belongs to
        hook: String,
        /// Position of the entry within the hook
        index: usize,
        /// Entry name
        name: String,
        /// Executable name (first token of the command)
        command: String,
    },
}

/// Every validation problem found across a configuration
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    issues: Vec<ValidationIssue>,
}

impl ValidationErrors {
    /// Create an empty collection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a problem
    pub fn push(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    /// Whether no problems were recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Number of recorded problems
    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Iterate over recorded problems in discovery order
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationIssue> {
        self.issues.iter()
    }

    /// `Ok(())` when empty, otherwise the whole collection as an error
    pub fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(self))
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "script validation failed:")?;
        for issue in &self.issues {
            write!(f, "\n  - {issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl FromIterator<ValidationIssue> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationIssue>>(iter: I) -> Self {
        Self {
            issues: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationIssue;
    type IntoIter = std::vec::IntoIter<ValidationIssue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationIssue;
    type IntoIter = std::slice::Iter<'a, ValidationIssue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.iter()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;

    fn missing_script() -> ValidationIssue {
        ValidationIssue::MissingScript {
            hook: "pre-commit".to_string(),
            index: 0,
            name: "lint".to_string(),
            path: "lint.sh".to_string(),
        }
    }

    fn missing_command() -> ValidationIssue {
        ValidationIssue::MissingCommand {
            hook: "pre-push".to_string(),
            index: 2,
            name: "test".to_string(),
            command: "nonexistent-cmd".to_string(),
        }
    }

    #[test]
    fn test_missing_script_message() {
        let msg = missing_script().to_string();
        assert_eq!(
            msg,
            "hook pre-commit[0] (lint): script file 'lint.sh' not found"
        );
    }

    #[test]
    fn test_missing_command_message() {
        let msg = missing_command().to_string();
        assert_eq!(
            msg,
            "hook pre-push[2] (test): command 'nonexistent-cmd' not found in PATH"
        );
    }

    #[test]
    fn test_empty_validation_errors_is_ok() {
        assert!(ValidationErrors::new().into_result().is_ok());
    }

    #[test]
    fn test_validation_errors_mention_every_issue() {
        let errors: ValidationErrors = [missing_script(), missing_command()].into_iter().collect();
        assert_eq!(errors.len(), 2);

        let err = errors.into_result().unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("script validation failed:"));
        assert!(msg.contains("script file 'lint.sh' not found"));
        assert!(msg.contains("command 'nonexistent-cmd' not found in PATH"));
    }

    #[test]
    fn test_repository_not_found_message() {
        let err = Error::RepositoryNotFound {
            start: PathBuf::from("/tmp/somewhere"),
        };
        let msg = err.to_string();
        assert!(msg.contains("not a git repository"));
        assert!(msg.contains("/tmp/somewhere"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io_error.into();
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_backup_error_names_both_paths() {
        let err = Error::Backup {
            from: PathBuf::from(".git/hooks/pre-commit"),
            to: PathBuf::from(".hooky-backup/pre-commit.bak"),
            source: std::io::Error::other("disk full"),
        };
        let msg = err.to_string();
        assert!(msg.contains(".git/hooks/pre-commit"));
        assert!(msg.contains(".hooky-backup/pre-commit.bak"));
    }
}
