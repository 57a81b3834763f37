// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use crate::config::{default::example_config, discover_config, RuleConfiguration};
use crate::error::{GuardError, InputError, Result, ResultExt};
use crate::git::{CommitRange, CommitSource, GitCli, LibGitSource};
use crate::report::{render, BatchReporter, CompletionStatus};
use crate::rules::validate;

use std::path::Path;

use super::args::{Backend, CheckArgs, Cli, Commands, InitArgs, MessageArgs};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<CompletionStatus> {
    match cli.command.clone() {
        Commands::Check(args) => run_check(&cli, args),
        Commands::Message(args) => run_message(&cli, args),
        Commands::Init(args) => run_init(args),
        Commands::Version => run_version(),
    }
}

/// Load the rule file named on the command line, or discover one.
///
/// Discovery starts at `start_dir` when given, else the working directory.
fn load_rules(cli: &Cli, start_dir: Option<&Path>) -> Result<RuleConfiguration> {
    match (&cli.config, start_dir) {
        (Some(config_path), _) => RuleConfiguration::load_from(config_path),
        (None, Some(dir)) => discover_config(dir),
        (None, None) => RuleConfiguration::load(),
    }
}

/// Run the check command.
fn run_check(cli: &Cli, args: CheckArgs) -> Result<CompletionStatus> {
    tracing::debug!("Running check command with args: {:?}", args);

    let range = CommitRange::from_inputs(args.base, args.head)?;
    let config = load_rules(cli, args.repo.as_deref())?;

    let source: Box<dyn CommitSource> = match (args.backend, args.repo) {
        (Backend::Cli, Some(dir)) => Box::new(GitCli::in_dir(dir)),
        (Backend::Cli, None) => Box::new(GitCli::new()),
        (Backend::Libgit2, Some(dir)) => Box::new(LibGitSource::open(&dir)?),
        (Backend::Libgit2, None) => Box::new(LibGitSource::open_current()?),
    };

    let json = cli.wants_json();
    if !json {
        if let Some(ref pr) = args.pr {
            println!("Validating commits in PR #{}", pr);
        }
        println!("Range {}", range);
    }

    let reporter = BatchReporter::new(source.as_ref(), config);
    let report = reporter.run_with(range, |outcome| {
        if !json {
            render::print_commit(outcome);
        }
    })?;

    if json {
        render::print_json(&report);
    } else {
        render::print_summary(&report);
    }

    Ok(report.status())
}

/// Run the message command.
fn run_message(cli: &Cli, args: MessageArgs) -> Result<CompletionStatus> {
    tracing::debug!("Running message command with args: {:?}", args);

    let message = match (args.message, args.file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .context(format!("Failed to read {}", path.display()))?,
        (None, None) => {
            return Err(GuardError::Input(InputError::Missing {
                name: "message".to_string(),
            }))
        }
    };

    let config = load_rules(cli, None)?;
    let result = validate(&message, &config);

    if cli.wants_json() {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).unwrap_or_default()
        );
    } else if result.is_valid() {
        println!("{} {}", console::style("✓").green().bold(), result.subject);
    } else {
        println!("{} {}", console::style("✗").red().bold(), result.subject);
        for violation in &result.violations {
            println!("  {}", violation.format());
        }
    }

    if result.is_valid() {
        Ok(CompletionStatus::Success)
    } else {
        Ok(CompletionStatus::ViolationsPresent)
    }
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<CompletionStatus> {
    tracing::debug!("Running init command with args: {:?}", args);

    if args.path.exists() && !args.force {
        return Err(GuardError::WithContext {
            context: "init".to_string(),
            message: format!(
                "{} already exists. Use --force to overwrite.",
                args.path.display()
            ),
        });
    }

    std::fs::write(&args.path, example_config())?;

    println!("✓ Created {}", args.path.display());

    Ok(CompletionStatus::Success)
}

/// Run the version command.
fn run_version() -> Result<CompletionStatus> {
    println!("commit-guard {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }
    if let Some(date) = crate::version::BUILD_DATE {
        println!("build date: {}", date);
    }

    Ok(CompletionStatus::Success)
}
