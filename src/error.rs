//! Error types for ghcheck operations.
//!
//! This module defines [`GhcheckError`], the error type used by the
//! internals, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Internals return `Result` and propagate with `?`
//! - Checks absorb every error and turn it into a printed warning line
//! - Use `anyhow::Error` (via `GhcheckError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for ghcheck operations.
#[derive(Debug, Error)]
pub enum GhcheckError {
    /// A shell command could not be spawned.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// A configuration file exists but could not be parsed.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for ghcheck operations.
pub type Result<T> = std::result::Result<T, GhcheckError>;
