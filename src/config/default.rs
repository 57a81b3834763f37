// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default rule set.

use std::collections::BTreeSet;

use super::schema::{RuleConfiguration, TypeRule};

/// Types accepted when no rule file is present.
const DEFAULT_TYPES: &[&str] = &[
    "feat", "fix", "docs", "style", "refactor", "perf", "test", "build", "ci", "chore", "revert",
];

/// Get the built-in rule set.
pub fn default_config() -> RuleConfiguration {
    RuleConfiguration {
        allowed_types: DEFAULT_TYPES.iter().map(|name| TypeRule::new(*name)).collect(),
        breaking_change_indicators: ["BREAKING CHANGE", "BREAKING-CHANGE"]
            .iter()
            .map(|s| s.to_string())
            .collect::<BTreeSet<_>>(),
    }
}

/// Generate an example rule file.
pub fn example_config() -> &'static str {
    r#"# commit-guard rule file
#
# Every commit subject in a pull request must read
#   <type>(<scope>): <Description>
# where <type> is listed below.

breakingChangeIndicators = ["BREAKING CHANGE", "BREAKING-CHANGE"]

[[allowedTypes]]
name = "feat"
requiresScope = false
scopes = ["api", "ui", "cli", "config"]

[[allowedTypes]]
name = "fix"
requiresScope = true

[[allowedTypes]]
name = "docs"
requiresScope = false

[[allowedTypes]]
name = "refactor"
requiresScope = false

[[allowedTypes]]
name = "test"
requiresScope = false

[[allowedTypes]]
name = "ci"
requiresScope = false

[allowedTypes.scopes]
workflows = "GitHub Actions workflows"
scripts = "Workflow helper scripts"

[[allowedTypes]]
name = "chore"
requiresScope = false
"#
}
