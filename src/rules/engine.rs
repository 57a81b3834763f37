// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.

use crate::commit::{subject, ParsedMessage};
use crate::config::RuleConfiguration;
use crate::git::CommitRecord;

use super::builtin::{apply_builtin_rules, invalid_format};
use super::validator::ValidationResult;

/// Validate one commit message against a rule configuration.
///
/// Only the subject line is checked. A subject that is not a conventional
/// header yields the single format violation and nothing else.
pub fn validate(message: &str, config: &RuleConfiguration) -> ValidationResult {
    let mut result = ValidationResult::new(subject(message));

    match ParsedMessage::parse(message) {
        Some(parsed) => {
            result.violations = apply_builtin_rules(&parsed, config);
            result.breaking = parsed.mentions_breaking_change(&config.breaking_change_indicators);
        }
        None => result.violations.push(invalid_format()),
    }

    result
}

/// Rule engine holding the configuration for a run.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    config: RuleConfiguration,
}

impl RuleEngine {
    /// Create a new rule engine with the given configuration.
    pub fn new(config: RuleConfiguration) -> Self {
        Self { config }
    }

    /// Validate a commit message string.
    pub fn validate(&self, message: &str) -> ValidationResult {
        validate(message, &self.config)
    }

    /// Validate an extracted commit.
    pub fn validate_record(&self, record: &CommitRecord) -> ValidationResult {
        self.validate(&record.message)
    }
}
