// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit header parsing.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;

lazy_static! {
    /// `type(scope): description`, scope optional, exactly one ": ".
    static ref HEADER_REGEX: Regex = Regex::new(
        r"^(?P<type>[a-z]+)(?:\((?P<scope>[^()]+)\))?: (?P<description>.*)$"
    )
    .unwrap();
}

/// A commit subject split into its conventional parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMessage {
    /// Commit type (feat, fix, etc.).
    pub commit_type: String,
    /// Optional scope.
    pub scope: Option<String>,
    /// Everything after the `": "` separator, untrimmed.
    pub description: String,
}

impl ParsedMessage {
    /// Parse the subject of a commit message.
    ///
    /// Only the first line is considered. Returns `None` when the subject
    /// does not follow the header grammar.
    pub fn parse(message: &str) -> Option<Self> {
        let captures = HEADER_REGEX.captures(subject(message))?;

        Some(Self {
            commit_type: captures["type"].to_string(),
            scope: captures.name("scope").map(|m| m.as_str().to_string()),
            description: captures["description"].to_string(),
        })
    }

    /// Format the header back into `type(scope): description`.
    pub fn header(&self) -> String {
        let mut result = String::new();
        result.push_str(&self.commit_type);

        if let Some(ref scope) = self.scope {
            result.push('(');
            result.push_str(scope);
            result.push(')');
        }

        result.push_str(": ");
        result.push_str(&self.description);

        result
    }

    /// Whether the header contains one of the configured breaking-change markers.
    pub fn mentions_breaking_change(&self, indicators: &BTreeSet<String>) -> bool {
        let header = self.header();
        indicators.iter().any(|token| header.contains(token.as_str()))
    }
}

/// The first line of a commit message.
pub fn subject(message: &str) -> &str {
    message.lines().next().unwrap_or("")
}
