// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commit-guard - Conventional commit gate
//!
//! Checks that every commit introduced by a pull request follows a
//! configurable conventional-commit header grammar, and reports all
//! violations in a single pass.
//!
//! # Features
//!
//! - **Commit Extraction**: Structured records from `git log` output, tolerant
//!   of delimiters inside subjects and author names
//! - **Rule Configuration**: Allowed types with per-type scope rules, loaded
//!   from TOML or JSON and validated up front
//! - **Message Validation**: Header grammar, type, scope and capitalization
//!   checks, reported together
//! - **Batch Reporting**: Every commit is checked before the run passes or fails
//!
//! # Example
//!
//! ```no_run
//! use commit_guard::config::RuleConfiguration;
//! use commit_guard::git::{CommitRange, GitCli};
//! use commit_guard::report::BatchReporter;
//!
//! let config = RuleConfiguration::load().unwrap();
//! let source = GitCli::new();
//!
//! let report = BatchReporter::new(&source, config)
//!     .run(CommitRange::new("origin/main", "HEAD"))
//!     .unwrap();
//!
//! for error in &report.all_errors {
//!     println!("{}", error);
//! }
//! std::process::exit(report.status().exit_code());
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod report;
pub mod rules;

// Re-exports for convenience
pub use config::RuleConfiguration;
pub use error::{GuardError, Result};
pub use rules::{validate, ValidationResult};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of commit-guard.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// The date the binary was built (if available).
    pub const BUILD_DATE: Option<&str> = option_env!("VERGEN_BUILD_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
