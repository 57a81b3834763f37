// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation result types.

use console::style;
use serde::Serialize;

/// A single rule failure for one commit message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Stable identifier of the failed rule.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

impl Violation {
    /// Create a violation.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Format the violation for terminal output.
    pub fn format(&self) -> String {
        format!(
            "{} {} {}",
            style("✗").red().bold(),
            style(&self.code).red(),
            self.message
        )
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Result of validating a commit message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// The validated subject line.
    pub subject: String,
    /// Rule failures, in check order.
    pub violations: Vec<Violation>,
    /// Whether the subject carries a configured breaking-change marker.
    pub breaking: bool,
}

impl ValidationResult {
    /// Create an empty (valid) result.
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            violations: Vec::new(),
            breaking: false,
        }
    }

    /// Check if the validation passed.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// The violation messages, in order.
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }
}
