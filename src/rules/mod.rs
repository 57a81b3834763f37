// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! This module checks commit subjects against the allowed types, scope
//! requirements and description formatting of a rule configuration.

mod builtin;
mod engine;
mod validator;

pub use builtin::{invalid_format, INVALID_FORMAT_MESSAGE};
pub use engine::{validate, RuleEngine};
pub use validator::{ValidationResult, Violation};
