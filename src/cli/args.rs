// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// commit-guard - Conventional commit gate
///
/// Validates every commit of a pull request against a rule file.
#[derive(Parser, Debug)]
#[command(name = "commit-guard")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Conventional commit gate for pull request commit ranges", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to the rule file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// How history is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Backend {
    /// Run the git executable
    #[default]
    Cli,
    /// Read the repository in-process with libgit2
    Libgit2,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate every commit between two revisions
    Check(CheckArgs),

    /// Validate a single commit message
    Message(MessageArgs),

    /// Write an example rule file
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the check command.
#[derive(Parser, Debug, Default, Clone)]
pub struct CheckArgs {
    /// Base revision (commits reachable from it are excluded)
    #[arg(long, env = "BASE_SHA")]
    pub base: Option<String>,

    /// Head revision
    #[arg(long, env = "HEAD_SHA")]
    pub head: Option<String>,

    /// Pull request number, used in log output only
    #[arg(long, env = "PR_NUMBER")]
    pub pr: Option<String>,

    /// History backend
    #[arg(long, value_enum, default_value_t = Backend::Cli)]
    pub backend: Backend,

    /// Repository directory (defaults to the current directory)
    #[arg(long)]
    pub repo: Option<PathBuf>,
}

/// Arguments for the message command.
#[derive(Parser, Debug, Default, Clone)]
pub struct MessageArgs {
    /// Commit message text
    #[arg(conflicts_with = "file")]
    pub message: Option<String>,

    /// Read the message from a file (e.g. .git/COMMIT_EDITMSG)
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite an existing rule file
    #[arg(short, long)]
    pub force: bool,

    /// Where to write the rule file
    #[arg(long, default_value = "commit-rules.toml")]
    pub path: PathBuf,
}

impl Cli {
    /// Whether JSON output was requested.
    pub fn wants_json(&self) -> bool {
        self.format == Some(OutputFormat::Json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check() {
        let args = Cli::parse_from([
            "commit-guard",
            "check",
            "--base",
            "abc",
            "--head",
            "def",
            "--backend",
            "libgit2",
        ]);
        if let Commands::Check(check_args) = args.command {
            assert_eq!(check_args.base.as_deref(), Some("abc"));
            assert_eq!(check_args.head.as_deref(), Some("def"));
            assert_eq!(check_args.backend, Backend::Libgit2);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_parse_message() {
        let args = Cli::parse_from(["commit-guard", "message", "feat: Add x"]);
        if let Commands::Message(message_args) = args.command {
            assert_eq!(message_args.message.as_deref(), Some("feat: Add x"));
            assert!(message_args.file.is_none());
        } else {
            panic!("Expected Message command");
        }
    }

    #[test]
    fn test_message_and_file_conflict() {
        let result =
            Cli::try_parse_from(["commit-guard", "message", "feat: X", "--file", "msg.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags() {
        let args = Cli::parse_from(["commit-guard", "--format", "json", "version", "--debug"]);
        assert!(args.debug);
        assert!(args.wants_json());
        assert!(matches!(args.command, Commands::Version));
    }

    #[test]
    fn test_init_default_path() {
        let args = Cli::parse_from(["commit-guard", "init"]);
        if let Commands::Init(init_args) = args.command {
            assert_eq!(init_args.path, PathBuf::from("commit-rules.toml"));
            assert!(!init_args.force);
        } else {
            panic!("Expected Init command");
        }
    }
}
