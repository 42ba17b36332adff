//! CLI argument definitions using clap derive API

use clap::{Args, Parser};
use std::path::PathBuf;

/// mr - print Supabase migrations for manual application
#[derive(Parser, Debug)]
#[command(name = "mr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Options locating the project inputs
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Project root (default: two levels above the executable)
    #[arg(short = 'p', long, env = "MR_PROJECT_DIR")]
    pub project_dir: Option<PathBuf>,

    /// Override settings file path (default: <root>/.env.local)
    #[arg(short, long, env = "MR_ENV_FILE")]
    pub env_file: Option<PathBuf>,

    /// Override migrations directory (default: <root>/supabase/migrations)
    #[arg(short, long, env = "MR_MIGRATIONS_DIR")]
    pub migrations_dir: Option<PathBuf>,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
