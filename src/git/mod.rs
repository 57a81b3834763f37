// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! History is read through a [`CommitSource`]; the [`CommitExtractor`] turns
//! its output into [`CommitRecord`]s.

mod log;
mod repo;
mod source;

pub use log::{parse_log, CommitExtractor, CommitRange, CommitRecord, FIELD_DELIMITER, LOG_FORMAT};
pub use repo::Repository;
pub use source::{CommitSource, GitCli, LibGitSource};
