// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in validation rules.

use crate::commit::ParsedMessage;
use crate::config::{RuleConfiguration, TypeRule};

use super::validator::Violation;

/// Message reported when a subject does not follow the header grammar.
pub const INVALID_FORMAT_MESSAGE: &str =
    r#"Invalid format. Expected: "<type>(<scope>): <description>""#;

/// The violation for a subject that is not a conventional header.
pub fn invalid_format() -> Violation {
    Violation::new("header-format", INVALID_FORMAT_MESSAGE)
}

/// Apply all built-in rules to a parsed header.
pub fn apply_builtin_rules(message: &ParsedMessage, config: &RuleConfiguration) -> Vec<Violation> {
    // Without a rule for the type nothing else is meaningful to report
    let rule = match check_allowed_type(message, config) {
        Ok(rule) => rule,
        Err(v) => return vec![v],
    };

    let mut violations = Vec::new();

    if let Some(v) = check_require_scope(message, rule) {
        violations.push(v);
    }
    if let Some(v) = check_allowed_scopes(message, rule) {
        violations.push(v);
    }
    if let Some(v) = check_description_case(message) {
        violations.push(v);
    }

    violations
}

/// Resolve the rule for the message's type.
fn check_allowed_type<'c>(
    message: &ParsedMessage,
    config: &'c RuleConfiguration,
) -> Result<&'c TypeRule, Violation> {
    config.rule_for(&message.commit_type).ok_or_else(|| {
        Violation::new(
            "type-not-allowed",
            format!(
                "Invalid type \"{}\". Allowed types: {}",
                message.commit_type,
                config.type_names().join(", ")
            ),
        )
    })
}

/// Check if scope is required.
fn check_require_scope(message: &ParsedMessage, rule: &TypeRule) -> Option<Violation> {
    if rule.requires_scope && message.scope.is_none() {
        Some(Violation::new(
            "scope-required",
            format!("Type \"{}\" requires a scope", rule.name),
        ))
    } else {
        None
    }
}

/// Check if scope is in the allowed list.
fn check_allowed_scopes(message: &ParsedMessage, rule: &TypeRule) -> Option<Violation> {
    let scope = message.scope.as_deref()?;
    let allowed = rule.allowed_scopes.restriction()?;

    if rule.allowed_scopes.permits(scope) {
        return None;
    }

    Some(Violation::new(
        "scope-not-allowed",
        format!(
            "Invalid scope \"{}\" for type \"{}\". Allowed scopes: {}",
            scope,
            rule.name,
            allowed.join(", ")
        ),
    ))
}

/// Check that the description starts with an uppercase letter.
fn check_description_case(message: &ParsedMessage) -> Option<Violation> {
    let starts_upper = message
        .description
        .trim()
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_uppercase());

    if starts_upper {
        None
    } else {
        Some(Violation::new(
            "description-case",
            "Description must start with a capital letter",
        ))
    }
}
