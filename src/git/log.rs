// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit extraction from delimited history output.

use serde::Serialize;

use crate::error::{GitError, GuardError, InputError, Result};

use super::source::CommitSource;

/// Delimiter between the fields of one history line.
pub const FIELD_DELIMITER: char = '|';

/// `git log` format producing `id|subject|author` lines.
pub const LOG_FORMAT: &str = "%H|%s|%an";

/// A span of history: commits reachable from `head_id` but not `base_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRange {
    pub base_id: String,
    pub head_id: String,
}

impl CommitRange {
    /// Create a range from two revision identifiers.
    pub fn new(base_id: impl Into<String>, head_id: impl Into<String>) -> Self {
        Self {
            base_id: base_id.into(),
            head_id: head_id.into(),
        }
    }

    /// Build a range from optional run inputs, failing if either is absent.
    pub fn from_inputs(base_id: Option<String>, head_id: Option<String>) -> Result<Self> {
        let base_id = required("BASE_SHA", base_id)?;
        let head_id = required("HEAD_SHA", head_id)?;
        Ok(Self::new(base_id, head_id))
    }

    /// The `base..head` revision spec.
    pub fn revspec(&self) -> String {
        format!("{}..{}", self.base_id, self.head_id)
    }
}

impl std::fmt::Display for CommitRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}..{}",
            abbreviate(&self.base_id),
            abbreviate(&self.head_id)
        )
    }
}

fn required(name: &str, value: Option<String>) -> Result<String> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| {
            GuardError::Input(InputError::Missing {
                name: name.to_string(),
            })
        })?;

    // Anything starting with '-' would be read by git as an option.
    if value.starts_with('-') {
        return Err(GuardError::Input(InputError::Invalid {
            name: name.to_string(),
            message: format!("'{}' is not a revision", value),
        }));
    }

    Ok(value)
}

/// One commit from the history output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitRecord {
    /// Full revision identifier.
    pub id: String,
    /// Commit subject (first line of the message).
    pub message: String,
    /// Author display name.
    pub author: String,
}

impl CommitRecord {
    /// The abbreviated identifier used in reports.
    pub fn short_id(&self) -> &str {
        abbreviate(&self.id)
    }
}

fn abbreviate(id: &str) -> &str {
    match id.char_indices().nth(7) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}

/// Pulls the commits of one range out of a history source.
pub struct CommitExtractor<'a, S: CommitSource + ?Sized> {
    source: &'a S,
    range: CommitRange,
    delimiter: char,
}

impl<'a, S: CommitSource + ?Sized> CommitExtractor<'a, S> {
    /// Create an extractor for a range.
    pub fn new(source: &'a S, range: CommitRange) -> Self {
        Self {
            source,
            range,
            delimiter: FIELD_DELIMITER,
        }
    }

    /// Use a different field delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Query the source once and parse its output, keeping the source's order.
    pub fn extract(&self) -> Result<Vec<CommitRecord>> {
        tracing::debug!("Extracting commits in {}", self.range.revspec());
        let raw = self.source.log(&self.range)?;
        let records = parse_log(&raw, self.delimiter)?;
        tracing::debug!("Extracted {} commits", records.len());
        Ok(records)
    }
}

/// Parse raw history output into commit records. Blank lines are skipped.
pub fn parse_log(raw: &str, delimiter: char) -> Result<Vec<CommitRecord>> {
    raw.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| parse_record(line, delimiter, index + 1))
        .collect()
}

fn parse_record(line: &str, delimiter: char, line_no: usize) -> Result<CommitRecord> {
    let (id, rest) = line
        .split_once(delimiter)
        .ok_or_else(|| malformed(line_no, "no field delimiter"))?;

    if id.is_empty() {
        return Err(malformed(line_no, "empty commit id"));
    }

    let (message, author) = match message_boundary(rest, delimiter) {
        Some(at) => (&rest[..at], &rest[at + delimiter.len_utf8()..]),
        None => (rest, ""),
    };

    Ok(CommitRecord {
        id: id.to_string(),
        message: message.to_string(),
        author: author.to_string(),
    })
}

/// Locate the delimiter separating subject from author.
///
/// Subjects and names may contain the delimiter themselves, usually padded
/// with spaces (`a | b`). The structural one is the first occurrence with no
/// whitespace on either side; failing that, the first occurrence.
fn message_boundary(rest: &str, delimiter: char) -> Option<usize> {
    let mut first = None;

    for (at, c) in rest.char_indices() {
        if c != delimiter {
            continue;
        }
        first.get_or_insert(at);

        let before = rest[..at].chars().next_back();
        let after = rest[at + delimiter.len_utf8()..].chars().next();
        if !before.is_some_and(char::is_whitespace) && !after.is_some_and(char::is_whitespace) {
            return Some(at);
        }
    }

    first
}

fn malformed(line: usize, message: &str) -> GuardError {
    GuardError::Git(GitError::MalformedRecord {
        line,
        message: message.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(output: &'static str) -> impl Fn(&CommitRange) -> Result<String> {
        move |_: &CommitRange| Ok(output.to_string())
    }

    fn extract(output: &'static str) -> Result<Vec<CommitRecord>> {
        let source = fixed(output);
        CommitExtractor::new(&source, CommitRange::new("base123", "def456")).extract()
    }

    #[test]
    fn test_parse_git_log_output() {
        let commits =
            extract("sha1|feat: Add new feature|John Doe\nsha2|fix: Fix bug|Jane Smith").unwrap();
        assert_eq!(
            commits,
            vec![
                CommitRecord {
                    id: "sha1".to_string(),
                    message: "feat: Add new feature".to_string(),
                    author: "John Doe".to_string(),
                },
                CommitRecord {
                    id: "sha2".to_string(),
                    message: "fix: Fix bug".to_string(),
                    author: "Jane Smith".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_blank_lines_filtered() {
        let raw = "sha1|feat: Add new feature|John Doe\n\nsha2|fix: Fix bug|Jane Smith\n\n";
        let commits = extract(raw).unwrap();
        let ids: Vec<_> = commits.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["sha1", "sha2"]);

        let commits = extract("  \n\t\nsha3|docs: Explain|Ann\n").unwrap();
        assert_eq!(commits.len(), 1);
    }

    #[test]
    fn test_delimiter_in_message_and_author_preserved() {
        let commits = extract("sha1|feat: Add feature | with pipe|John | Doe").unwrap();
        assert_eq!(
            commits[0],
            CommitRecord {
                id: "sha1".to_string(),
                message: "feat: Add feature | with pipe".to_string(),
                author: "John | Doe".to_string(),
            }
        );
    }

    #[test]
    fn test_tail_absorbs_tight_delimiters() {
        let commits = extract("sha1|fix: a|b|c").unwrap();
        assert_eq!(commits[0].message, "fix: a");
        assert_eq!(commits[0].author, "b|c");
    }

    #[test]
    fn test_missing_author_field() {
        let commits = extract("sha1|chore: Bump deps").unwrap();
        assert_eq!(commits[0].message, "chore: Bump deps");
        assert_eq!(commits[0].author, "");
    }

    #[test]
    fn test_empty_output_is_not_an_error() {
        assert!(extract("").unwrap().is_empty());
        assert!(extract("\n\n").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_lines_fail() {
        let err = extract("sha1|ok|Ann\n|feat: X|Bob").unwrap_err();
        assert!(matches!(
            err,
            GuardError::Git(GitError::MalformedRecord { line: 2, .. })
        ));

        let err = extract("no delimiter here").unwrap_err();
        assert!(err.is_extraction_failure());
    }

    #[test]
    fn test_source_failure_propagates() {
        let source = |_: &CommitRange| -> Result<String> {
            Err(GuardError::Git(GitError::InvalidReference {
                reference: "base123".to_string(),
            }))
        };
        let err = CommitExtractor::new(&source, CommitRange::new("base123", "def456"))
            .extract()
            .unwrap_err();
        assert!(err.to_string().contains("base123"));
    }

    #[test]
    fn test_custom_delimiter() {
        let source = fixed("sha1\u{1f}feat: A | B\u{1f}Ann");
        let commits = CommitExtractor::new(&source, CommitRange::new("a", "b"))
            .with_delimiter('\u{1f}')
            .extract()
            .unwrap();
        assert_eq!(commits[0].message, "feat: A | B");
    }

    #[test]
    fn test_range_from_inputs() {
        let range = CommitRange::from_inputs(Some("abc".into()), Some(" def ".into())).unwrap();
        assert_eq!(range.revspec(), "abc..def");

        let err = CommitRange::from_inputs(None, Some("def".into())).unwrap_err();
        assert!(err.to_string().contains("BASE_SHA"));

        let err = CommitRange::from_inputs(Some("abc".into()), Some("  ".into())).unwrap_err();
        assert!(err.to_string().contains("HEAD_SHA"));

        let err = CommitRange::from_inputs(Some("--all".into()), Some("def".into())).unwrap_err();
        assert!(matches!(err, GuardError::Input(InputError::Invalid { .. })));
    }

    #[test]
    fn test_short_id() {
        let record = CommitRecord {
            id: "0123456789abcdef".to_string(),
            message: String::new(),
            author: String::new(),
        };
        assert_eq!(record.short_id(), "0123456");
        assert_eq!(abbreviate("abc"), "abc");
        assert_eq!(
            CommitRange::new("0123456789", "fedcba9876").to_string(),
            "0123456..fedcba9"
        );
    }
}
