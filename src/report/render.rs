// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Terminal and JSON rendering of batch results.

use console::style;

use super::batch::{BatchReport, CommitOutcome, RunOutcome};

/// One status line for a commit, followed by its violations.
pub fn format_commit(outcome: &CommitOutcome) -> String {
    let status = if outcome.result.is_valid() {
        style("✓").green().bold()
    } else {
        style("✗").red().bold()
    };

    let mut output = format!(
        "{} {} {} {}",
        status,
        style(outcome.record.short_id()).cyan(),
        outcome.record.message,
        style(format!("({})", outcome.record.author)).dim()
    );

    if outcome.result.breaking {
        output.push_str(&format!(" {}", style("[breaking]").yellow()));
    }

    for violation in &outcome.result.violations {
        output.push_str(&format!("\n  {}", violation.format()));
    }

    output
}

/// The closing summary of a run.
pub fn format_summary(report: &BatchReport) -> String {
    match report.outcome {
        RunOutcome::NoCommits => "No commits to validate".to_string(),
        RunOutcome::AllValid => format!(
            "{} All {} commits are valid",
            style("✓").green().bold(),
            report.total
        ),
        RunOutcome::ViolationsPresent => {
            let mut output = format!(
                "{} {} of {} commits have invalid messages:",
                style("✗").red().bold(),
                report.failed_shas.len(),
                report.total
            );
            for error in &report.all_errors {
                output.push_str(&format!("\n  - {}", error));
            }
            output
        }
    }
}

/// Print a commit line to stdout.
pub fn print_commit(outcome: &CommitOutcome) {
    println!("{}", format_commit(outcome));
}

/// Print the run summary to stdout.
pub fn print_summary(report: &BatchReport) {
    println!();
    println!("{}", format_summary(report));
}

/// Print the whole report as JSON.
pub fn print_json(report: &BatchReport) {
    println!(
        "{}",
        serde_json::to_string_pretty(report).unwrap_or_default()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::CommitRecord;
    use crate::rules::{ValidationResult, Violation};

    fn outcome(valid: bool) -> CommitOutcome {
        let mut result = ValidationResult::new("fix: lower");
        if !valid {
            result.violations.push(Violation::new(
                "description-case",
                "Description must start with a capital letter",
            ));
        }
        CommitOutcome {
            record: CommitRecord {
                id: "abcdef0123456".to_string(),
                message: "fix: lower".to_string(),
                author: "Ann".to_string(),
            },
            result,
        }
    }

    fn report(commits: Vec<CommitOutcome>, outcome: RunOutcome) -> BatchReport {
        let failed: Vec<&CommitOutcome> =
            commits.iter().filter(|c| !c.result.is_valid()).collect();
        let failed_shas = failed.iter().map(|c| c.record.id.clone()).collect();
        let all_errors = failed.iter().flat_map(|c| c.tagged_errors()).collect();
        BatchReport {
            total: commits.len(),
            failed_shas,
            all_errors,
            commits,
            outcome,
        }
    }

    #[test]
    fn test_format_commit() {
        let line = format_commit(&outcome(false));
        assert!(line.contains("abcdef0"));
        assert!(line.contains("fix: lower"));
        assert!(line.contains("(Ann)"));
        assert!(line.contains("capital letter"));

        let line = format_commit(&outcome(true));
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_format_summary() {
        let empty = report(Vec::new(), RunOutcome::NoCommits);
        assert_eq!(format_summary(&empty), "No commits to validate");

        let ok = report(vec![outcome(true)], RunOutcome::AllValid);
        assert!(format_summary(&ok).contains("All 1 commits are valid"));

        let bad = report(vec![outcome(true), outcome(false)], RunOutcome::ViolationsPresent);
        let summary = format_summary(&bad);
        assert!(summary.contains("1 of 2 commits"));
        assert!(summary.contains("abcdef0 (Ann): Description must start with a capital letter"));
    }

    #[test]
    fn test_report_serializes() {
        let bad = report(vec![outcome(false)], RunOutcome::ViolationsPresent);
        let json = serde_json::to_value(&bad).unwrap();
        assert_eq!(json["outcome"], "violations_present");
        assert_eq!(json["failed_shas"][0], "abcdef0123456");
        assert_eq!(json["commits"][0]["result"]["violations"][0]["code"], "description-case");
    }
}
