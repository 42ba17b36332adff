//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use mr_core::ProjectLayout;
use std::fmt;

use crate::cli::GlobalArgs;

/// Error type representing a non-zero process exit code.
///
/// Use `return Err(ExitCode(N).into())` instead of `std::process::exit(N)`
/// so that RAII destructors run and stdout is flushed.
#[derive(Debug)]
pub(crate) struct ExitCode(pub(crate) i32);

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Empty on purpose: the report has already said what went wrong.
        write!(f, "")
    }
}

impl std::error::Error for ExitCode {}

/// Resolve the project layout from global arguments.
///
/// Without `--project-dir` the root is two levels above the running
/// executable.
pub(crate) fn resolve_layout(global: &GlobalArgs) -> Result<ProjectLayout> {
    let mut layout = match &global.project_dir {
        Some(dir) => ProjectLayout::new(dir),
        None => {
            let exe = std::env::current_exe().context("Failed to locate the running executable")?;
            ProjectLayout::for_program(&exe)
        }
    };

    if let Some(env_file) = &global.env_file {
        layout = layout.with_env_file(env_file);
    }
    if let Some(migrations_dir) = &global.migrations_dir {
        layout = layout.with_migrations_dir(migrations_dir);
    }
    Ok(layout)
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
