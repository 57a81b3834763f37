// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule configuration for commit-guard.
//!
//! This module handles finding, parsing and validating the rule file, and
//! provides the built-in rule set used when no file is present.

pub mod default;
mod loader;
mod schema;

pub use default::default_config;
pub use loader::{
    discover_config, find_config_file, find_config_file_from, load_config, load_config_from,
    parse_config, ConfigFormat,
};
pub use schema::*;
