//! Report command implementation

use anyhow::{Context, Result};
use mr_core::{CoreError, Reporter, RunOutcome};
use std::io::{self, Write};

use crate::cli::GlobalArgs;
use crate::commands::common::{resolve_layout, ExitCode};

/// Execute the report pass, writing to stdout
pub fn execute(global: &GlobalArgs) -> Result<()> {
    let layout = resolve_layout(global)?;
    log::debug!(
        "Project root {}, settings {}, migrations {}",
        layout.root.display(),
        layout.env_file().display(),
        layout.migrations_dir().display()
    );

    let stdout = io::stdout();
    let mut reporter = Reporter::new(stdout.lock());
    let outcome = reporter.run(&layout);
    reporter
        .into_inner()
        .flush()
        .context("Failed to flush report")?;

    finish(outcome)
}

/// Map a run outcome onto the command result
fn finish(outcome: RunOutcome) -> Result<()> {
    let code = outcome.exit_code();
    match outcome {
        RunOutcome::NoMigrations => Ok(()),
        RunOutcome::AllListed { count } => {
            log::debug!("Listed {} migration(s)", count);
            Ok(())
        }
        RunOutcome::Failed(CoreError::Output(e)) => Err(e).context("Failed to write report"),
        RunOutcome::Failed(e) => {
            log::debug!("Run failed: {}", e);
            Err(ExitCode(code).into())
        }
    }
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
