// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule configuration schema.
//!
//! Two layers live here: the document types that mirror the on-disk rule
//! file, and the normalized [`RuleConfiguration`] the validator works with.
//! Conversion between them is where the schema is enforced.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::error::{ConfigError, GuardError, Result};

/// The rule file as written on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RuleDocument {
    /// Allowed commit types, in lookup order.
    pub allowed_types: Vec<TypeRuleDocument>,

    /// Tokens recognized as breaking-change markers.
    #[serde(default)]
    pub breaking_change_indicators: Vec<String>,
}

/// One entry of `allowedTypes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TypeRuleDocument {
    /// The type token, e.g. `feat`.
    pub name: String,

    /// Whether a `(scope)` is mandatory for this type.
    #[serde(default)]
    pub requires_scope: bool,

    /// Allowed scopes. Absent or empty means any scope is accepted.
    #[serde(default)]
    pub scopes: Option<ScopesDocument>,
}

/// Scopes may be written as a plain list or as a table keyed by scope name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScopesDocument {
    /// `scopes = ["api", "ui"]`
    List(Vec<String>),
    /// `scopes = { api = "HTTP handlers", ui = "Frontend" }`
    Described(BTreeMap<String, String>),
}

impl ScopesDocument {
    fn into_names(self) -> Vec<String> {
        match self {
            ScopesDocument::List(names) => names,
            ScopesDocument::Described(map) => map.into_keys().collect(),
        }
    }
}

/// The set of scopes a type accepts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScopeSet {
    /// Any scope (or none) is accepted.
    #[default]
    Unrestricted,
    /// Only these scopes, in configuration order.
    Only(Vec<String>),
}

impl ScopeSet {
    /// Build a scope set from a list of names.
    ///
    /// Duplicates are dropped keeping the first occurrence. An empty list
    /// imposes no restriction.
    pub fn only<I, S>(scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let names: Vec<String> = scopes
            .into_iter()
            .map(Into::into)
            .filter(|s| seen.insert(s.clone()))
            .collect();

        if names.is_empty() {
            ScopeSet::Unrestricted
        } else {
            ScopeSet::Only(names)
        }
    }

    /// Check whether a scope is accepted.
    pub fn permits(&self, scope: &str) -> bool {
        match self {
            ScopeSet::Unrestricted => true,
            ScopeSet::Only(names) => names.iter().any(|s| s == scope),
        }
    }

    /// The allowed scope names, if restricted.
    pub fn restriction(&self) -> Option<&[String]> {
        match self {
            ScopeSet::Unrestricted => None,
            ScopeSet::Only(names) => Some(names),
        }
    }
}

/// Rules for a single commit type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRule {
    /// The type token.
    pub name: String,
    /// Whether a scope is mandatory.
    pub requires_scope: bool,
    /// Scopes accepted for this type.
    pub allowed_scopes: ScopeSet,
}

impl TypeRule {
    /// Create an unrestricted rule with an optional scope.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requires_scope: false,
            allowed_scopes: ScopeSet::Unrestricted,
        }
    }

    /// Require a scope for this type.
    pub fn with_required_scope(mut self) -> Self {
        self.requires_scope = true;
        self
    }

    /// Restrict the accepted scopes.
    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_scopes = ScopeSet::only(scopes);
        self
    }
}

/// The normalized, read-only rule set used for a run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleConfiguration {
    /// Allowed types in lookup order.
    pub allowed_types: Vec<TypeRule>,
    /// Breaking-change marker tokens. Informational only.
    pub breaking_change_indicators: BTreeSet<String>,
}

impl RuleConfiguration {
    /// Create a configuration from already-built rules.
    pub fn new(allowed_types: Vec<TypeRule>) -> Self {
        Self {
            allowed_types,
            breaking_change_indicators: BTreeSet::new(),
        }
    }

    /// Load configuration from the default locations.
    pub fn load() -> Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Validate a parsed document and normalize it.
    pub fn from_document(document: RuleDocument) -> Result<Self> {
        if document.allowed_types.is_empty() {
            return Err(invalid(
                "allowedTypes",
                "at least one type must be listed",
            ));
        }

        let mut names = HashSet::new();
        let mut allowed_types = Vec::with_capacity(document.allowed_types.len());

        for entry in document.allowed_types {
            let well_formed =
                !entry.name.is_empty() && entry.name.bytes().all(|b| b.is_ascii_lowercase());
            if !well_formed {
                return Err(invalid(
                    "allowedTypes.name",
                    format!("'{}' must be lowercase ASCII letters only", entry.name),
                ));
            }
            if !names.insert(entry.name.clone()) {
                return Err(GuardError::Config(ConfigError::DuplicateType { name: entry.name }));
            }

            let scopes = entry.scopes.map(ScopesDocument::into_names).unwrap_or_default();
            if scopes.iter().any(|s| s.trim().is_empty()) {
                return Err(invalid(
                    "allowedTypes.scopes",
                    format!("type '{}' lists an empty scope", entry.name),
                ));
            }

            allowed_types.push(TypeRule {
                name: entry.name,
                requires_scope: entry.requires_scope,
                allowed_scopes: ScopeSet::only(scopes),
            });
        }

        Ok(Self {
            allowed_types,
            breaking_change_indicators: document
                .breaking_change_indicators
                .into_iter()
                .filter(|t| !t.is_empty())
                .collect(),
        })
    }

    /// Find the rule for a type. The first matching entry wins.
    pub fn rule_for(&self, name: &str) -> Option<&TypeRule> {
        self.allowed_types.iter().find(|rule| rule.name == name)
    }

    /// The allowed type names in configuration order.
    pub fn type_names(&self) -> Vec<&str> {
        self.allowed_types.iter().map(|r| r.name.as_str()).collect()
    }
}

fn invalid(key: &str, message: impl Into<String>) -> GuardError {
    GuardError::Config(ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.into(),
    })
}
