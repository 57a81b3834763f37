// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Batch validation of a commit range and its output.

mod batch;
pub mod render;

pub use batch::{BatchReport, BatchReporter, CommitOutcome, CompletionStatus, RunOutcome};
