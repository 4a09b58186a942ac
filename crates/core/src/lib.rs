//! Core types and utilities for hooky
//!
//! This is the foundation crate that all other hooky crates depend on.
//! It provides:
//! - The shared error type and result alias
//! - The catalogue of git hook names hooky knows how to manage
//!
//! This crate has no dependencies on other hooky crates.

pub mod error;
pub mod hooks;

pub use error::{Error, Result, ValidationErrors, ValidationIssue};
