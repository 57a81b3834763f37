// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! History sources that answer "which commits are in this range".

use crate::error::{GitError, GuardError, Result};
use git2::Sort;
use std::path::{Path, PathBuf};
use std::process::Command;

use super::log::{CommitRange, FIELD_DELIMITER, LOG_FORMAT};
use super::repo::Repository;

/// Something that lists the commits of a range as delimited text lines.
///
/// Each line is `id|subject|author`, in the source's natural order.
pub trait CommitSource {
    /// Return the raw history text for a range.
    fn log(&self, range: &CommitRange) -> Result<String>;
}

impl<F> CommitSource for F
where
    F: Fn(&CommitRange) -> Result<String>,
{
    fn log(&self, range: &CommitRange) -> Result<String> {
        self(range)
    }
}

/// Reads history by running the `git` executable.
#[derive(Debug, Clone, Default)]
pub struct GitCli {
    workdir: Option<PathBuf>,
}

impl GitCli {
    /// Run git in the current directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run git in a specific directory.
    pub fn in_dir(path: impl Into<PathBuf>) -> Self {
        Self {
            workdir: Some(path.into()),
        }
    }
}

impl CommitSource for GitCli {
    fn log(&self, range: &CommitRange) -> Result<String> {
        let revspec = range.revspec();
        let format = format!("--format={}", LOG_FORMAT);

        let mut cmd = Command::new("git");
        cmd.args(["log", "--no-color", &format, &revspec, "--"]);
        if let Some(ref dir) = self.workdir {
            cmd.current_dir(dir);
        }

        tracing::debug!("Running git log {}", revspec);

        let output = cmd.output().map_err(|e| {
            GuardError::Git(GitError::CommandFailed {
                command: format!("git log {}", revspec),
                message: format!("Failed to run git: {}", e),
            })
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GuardError::Git(GitError::CommandFailed {
                command: format!("git log {}", revspec),
                message: stderr.trim().to_string(),
            }));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Reads history in-process through libgit2.
pub struct LibGitSource {
    repo: Repository,
}

impl LibGitSource {
    /// Open the repository containing the current directory.
    pub fn open_current() -> Result<Self> {
        Ok(Self {
            repo: Repository::open_current()?,
        })
    }

    /// Open the repository containing `path`.
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self {
            repo: Repository::open(path)?,
        })
    }
}

impl CommitSource for LibGitSource {
    fn log(&self, range: &CommitRange) -> Result<String> {
        let base = self.repo.get_commit(&range.base_id)?;
        let head = self.repo.get_commit(&range.head_id)?;

        let mut revwalk = self.repo.inner().revwalk().map_err(|e| walk_error("revwalk", e))?;
        revwalk
            .set_sorting(Sort::TOPOLOGICAL | Sort::TIME)
            .map_err(|e| walk_error("revwalk.set_sorting", e))?;
        revwalk.push(head.id()).map_err(|e| walk_error("revwalk.push", e))?;
        revwalk.hide(base.id()).map_err(|e| walk_error("revwalk.hide", e))?;

        let mut out = String::new();
        for oid in revwalk {
            let oid = oid.map_err(|e| walk_error("revwalk", e))?;
            let commit = self.repo.inner().find_commit(oid).map_err(|e| {
                GuardError::Git(GitError::InvalidReference {
                    reference: format!("{}: {}", oid, e.message()),
                })
            })?;

            let subject = commit.summary().unwrap_or("");
            let author = commit.author();
            out.push_str(&format!(
                "{}{d}{}{d}{}\n",
                oid,
                subject,
                author.name().unwrap_or(""),
                d = FIELD_DELIMITER
            ));
        }

        Ok(out)
    }
}

fn walk_error(command: &str, err: git2::Error) -> GuardError {
    GuardError::Git(GitError::CommandFailed {
        command: command.to_string(),
        message: err.message().to_string(),
    })
}
