// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for commit-guard.
//!
//! Fatal conditions (missing input, unusable configuration, failed history
//! extraction) are errors. Rule violations are not: they are reported as
//! data through [`crate::rules::ValidationResult`].

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for commit-guard operations.
#[derive(Error, Debug)]
pub enum GuardError {
    // Required run inputs
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl GuardError {
    /// Whether this error came from querying the revision history.
    pub fn is_extraction_failure(&self) -> bool {
        matches!(self, GuardError::Git(_))
    }

    /// Whether this error means the rule configuration could not be used.
    pub fn is_configuration_unavailable(&self) -> bool {
        matches!(self, GuardError::Config(_))
    }
}

/// Missing or unusable run inputs.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Missing required input: {name}")]
    Missing { name: String },

    #[error("Invalid input for '{name}': {message}")]
    Invalid { name: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Duplicate commit type in allowedTypes: '{name}'")]
    DuplicateType { name: String },
}

/// Git-related errors. Every variant is an extraction failure.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Invalid commit reference: {reference}")]
    InvalidReference { reference: String },

    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    #[error("Malformed commit record on line {line}: {message}")]
    MalformedRecord { line: usize, message: String },
}

/// Result type alias for commit-guard operations.
pub type Result<T> = std::result::Result<T, GuardError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| GuardError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
