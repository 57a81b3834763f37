// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commit-guard - Conventional commit gate
//!
//! Validates every commit of a pull request in one pass.

use clap::Parser;
use commit_guard::cli::{run, Cli};
use commit_guard::report::CompletionStatus;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Set up logging
    setup_logging(cli.debug);

    let status = match run(cli) {
        Ok(status) => status,
        Err(e) => {
            eprintln!("Error: {}", e);
            CompletionStatus::FatalInputError
        }
    };

    std::process::exit(status.exit_code());
}

/// Set up logging/tracing.
fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::try_new("commit_guard=debug,warn").unwrap_or_else(|_| EnvFilter::new("warn"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if debug {
        tracing::debug!("Debug logging enabled");
    }
}
