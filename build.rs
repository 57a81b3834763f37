// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use vergen::EmitBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Embedded into `commit-guard version`
    EmitBuilder::builder()
        .build_date()
        .git_sha(false)
        .git_commit_date()
        .emit()?;
    Ok(())
}
