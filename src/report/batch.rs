// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation of every commit in a range.

use serde::Serialize;

use crate::config::RuleConfiguration;
use crate::error::Result;
use crate::git::{CommitExtractor, CommitRange, CommitRecord, CommitSource};
use crate::rules::{RuleEngine, ValidationResult};

/// How a completed run turned out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    /// The range held no commits.
    NoCommits,
    /// Every commit passed.
    AllValid,
    /// At least one commit has violations.
    ViolationsPresent,
}

/// Process-level status of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionStatus {
    Success,
    ViolationsPresent,
    FatalInputError,
}

impl CompletionStatus {
    /// The process exit code for this status.
    pub fn exit_code(self) -> i32 {
        match self {
            CompletionStatus::Success => 0,
            CompletionStatus::ViolationsPresent => 1,
            CompletionStatus::FatalInputError => 2,
        }
    }
}

impl From<RunOutcome> for CompletionStatus {
    fn from(outcome: RunOutcome) -> Self {
        match outcome {
            RunOutcome::NoCommits | RunOutcome::AllValid => CompletionStatus::Success,
            RunOutcome::ViolationsPresent => CompletionStatus::ViolationsPresent,
        }
    }
}

/// One validated commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitOutcome {
    pub record: CommitRecord,
    pub result: ValidationResult,
}

impl CommitOutcome {
    /// Violations tagged as `<short id> (<author>): <message>`.
    pub fn tagged_errors(&self) -> Vec<String> {
        self.result
            .violations
            .iter()
            .map(|v| format!("{} ({}): {}", self.record.short_id(), self.record.author, v))
            .collect()
    }
}

/// Aggregate result of validating a range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    /// Number of commits validated.
    pub total: usize,
    /// Ids of commits with at least one violation, in history order.
    pub failed_shas: Vec<String>,
    /// Every violation of the run, tagged with its commit.
    pub all_errors: Vec<String>,
    /// Per-commit results.
    pub commits: Vec<CommitOutcome>,
    pub outcome: RunOutcome,
}

impl BatchReport {
    /// The status to hand to the process.
    pub fn status(&self) -> CompletionStatus {
        self.outcome.into()
    }
}

/// Drives extraction and validation for a range.
pub struct BatchReporter<'a, S: CommitSource + ?Sized> {
    source: &'a S,
    engine: RuleEngine,
}

impl<'a, S: CommitSource + ?Sized> BatchReporter<'a, S> {
    /// Create a reporter reading history from `source`.
    pub fn new(source: &'a S, config: RuleConfiguration) -> Self {
        Self {
            source,
            engine: RuleEngine::new(config),
        }
    }

    /// Validate every commit in the range.
    pub fn run(&self, range: CommitRange) -> Result<BatchReport> {
        self.run_with(range, |_| {})
    }

    /// Validate every commit, calling `on_commit` as each one is checked.
    ///
    /// Extraction failures abort the run. Invalid commits never do.
    pub fn run_with<F>(&self, range: CommitRange, mut on_commit: F) -> Result<BatchReport>
    where
        F: FnMut(&CommitOutcome),
    {
        let records = CommitExtractor::new(self.source, range).extract()?;

        if records.is_empty() {
            tracing::info!("No commits to validate");
            return Ok(BatchReport {
                total: 0,
                failed_shas: Vec::new(),
                all_errors: Vec::new(),
                commits: Vec::new(),
                outcome: RunOutcome::NoCommits,
            });
        }

        tracing::info!("Found {} commits to validate", records.len());

        let mut failed_shas = Vec::new();
        let mut all_errors = Vec::new();
        let mut commits = Vec::with_capacity(records.len());

        for record in records {
            let result = self.engine.validate_record(&record);
            let outcome = CommitOutcome { record, result };

            if !outcome.result.is_valid() {
                tracing::debug!(
                    "{} has {} violations",
                    outcome.record.short_id(),
                    outcome.result.violations.len()
                );
                failed_shas.push(outcome.record.id.clone());
                all_errors.extend(outcome.tagged_errors());
            }

            on_commit(&outcome);
            commits.push(outcome);
        }

        let outcome = if failed_shas.is_empty() {
            RunOutcome::AllValid
        } else {
            RunOutcome::ViolationsPresent
        };

        Ok(BatchReport {
            total: commits.len(),
            failed_shas,
            all_errors,
            commits,
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TypeRule;
    use crate::error::{GitError, GuardError};

    fn config() -> RuleConfiguration {
        RuleConfiguration::new(vec![
            TypeRule::new("feat").with_scopes(["api", "ui"]),
            TypeRule::new("fix").with_required_scope(),
        ])
    }

    fn range() -> CommitRange {
        CommitRange::new("base123", "head456")
    }

    #[test]
    fn test_empty_range_succeeds() {
        let source = |_: &CommitRange| -> Result<String> { Ok("\n".to_string()) };
        let report = BatchReporter::new(&source, config()).run(range()).unwrap();

        assert_eq!(report.total, 0);
        assert!(report.all_errors.is_empty());
        assert_eq!(report.outcome, RunOutcome::NoCommits);
        assert_eq!(report.status(), CompletionStatus::Success);
    }

    #[test]
    fn test_all_valid() {
        let source = |_: &CommitRange| -> Result<String> {
            Ok(concat!(
                "aaaaaaaaaa|feat(api): Add route|Ann\n",
                "bbbbbbbbbb|fix(ui): Align button|Bob\n"
            )
            .to_string())
        };
        let report = BatchReporter::new(&source, config()).run(range()).unwrap();

        assert_eq!(report.total, 2);
        assert_eq!(report.outcome, RunOutcome::AllValid);
        assert_eq!(report.status().exit_code(), 0);
    }

    #[test]
    fn test_mixed_commits_reports_every_failure() {
        let source = |_: &CommitRange| -> Result<String> {
            Ok([
                "1111111111|update stuff|Ann",
                "2222222222|feat(api): Add route|Bob",
                "3333333333|fix: lower|Cy | Dee",
            ]
            .join("\n"))
        };
        let mut seen = Vec::new();
        let report = BatchReporter::new(&source, config())
            .run_with(range(), |outcome| seen.push(outcome.record.id.clone()))
            .unwrap();

        assert_eq!(seen, vec!["1111111111", "2222222222", "3333333333"]);
        assert_eq!(report.total, 3);
        assert_eq!(report.failed_shas, vec!["1111111111", "3333333333"]);
        assert_eq!(
            report.all_errors,
            vec![
                "1111111 (Ann): Invalid format. Expected: \"<type>(<scope>): <description>\"",
                "3333333 (Cy | Dee): Type \"fix\" requires a scope",
                "3333333 (Cy | Dee): Description must start with a capital letter",
            ]
        );
        assert_eq!(report.status(), CompletionStatus::ViolationsPresent);
        assert_eq!(report.status().exit_code(), 1);
    }

    #[test]
    fn test_extraction_failure_is_fatal() {
        let source = |_: &CommitRange| -> Result<String> {
            Err(GuardError::Git(GitError::CommandFailed {
                command: "git log".to_string(),
                message: "unknown revision".to_string(),
            }))
        };
        let err = BatchReporter::new(&source, config()).run(range()).unwrap_err();
        assert!(err.is_extraction_failure());
    }

    #[test]
    fn test_completion_status_codes() {
        assert_eq!(CompletionStatus::from(RunOutcome::NoCommits), CompletionStatus::Success);
        assert_eq!(CompletionStatus::FatalInputError.exit_code(), 2);
    }
}
