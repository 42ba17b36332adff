//! The single reporting pass
//!
//! Validates configuration, discovers migrations, and prints each one
//! framed for manual execution. Every failure is rendered into the report
//! output; the caller only maps the [`RunOutcome`] to an exit status.

use crate::client::{ClientCapability, ProbeOutcome, ServiceClient};
use crate::config::Config;
use crate::error::{CoreError, CoreResult};
use crate::layout::ProjectLayout;
use crate::migration::{discover_migrations, MigrationFile};
use std::io::Write;

/// Fixed footer printed after every migration has been listed
pub const INSTRUCTIONS: [&str; 4] = [
    "1. Go to https://app.supabase.com/project/[YOUR-PROJECT]/",
    "2. Open SQL Editor tab",
    "3. Paste the SQL statements above and execute",
    "4. Or use supabase CLI: supabase db push",
];

/// Terminal state of a run
#[derive(Debug)]
pub enum RunOutcome {
    /// Directory exists but holds no `*.sql` files
    NoMigrations,

    /// Every migration was printed
    AllListed { count: usize },

    /// The run stopped at the first error
    Failed(CoreError),
}

impl RunOutcome {
    /// True for both success states
    pub fn is_success(&self) -> bool {
        !matches!(self, RunOutcome::Failed(_))
    }

    /// Process exit status for this outcome
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

/// Writes the report for one project to `out`
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    /// Create a reporter writing to `out`
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the reporter, returning the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Full pass: load settings from the layout, then report.
    ///
    /// Nothing is read from the migrations directory until both
    /// configuration values are present.
    pub fn run(&mut self, layout: &ProjectLayout) -> RunOutcome {
        match Config::load(&layout.env_file()) {
            Ok(config) => self.run_with_config(layout, &config),
            Err(e) => self.fail(e),
        }
    }

    /// Report with configuration that has already passed the gate
    pub fn run_with_config(&mut self, layout: &ProjectLayout, config: &Config) -> RunOutcome {
        let capability = match ClientCapability::detect(config) {
            Ok(capability) => capability,
            Err(e) => return self.fail(e),
        };
        self.run_with(layout, &capability)
    }

    /// Report with an already-selected client capability
    pub fn run_with(&mut self, layout: &ProjectLayout, capability: &ClientCapability) -> RunOutcome {
        let client = match capability {
            ClientCapability::Available(client) => client,
            ClientCapability::Unavailable { capability } => {
                return self.fail(CoreError::ClientUnavailable {
                    capability: capability.clone(),
                })
            }
        };

        match self.report(layout, client) {
            Ok(outcome) => outcome,
            Err(e) => self.fail(e),
        }
    }

    fn report(&mut self, layout: &ProjectLayout, client: &ServiceClient) -> CoreResult<RunOutcome> {
        let migrations = discover_migrations(&layout.migrations_dir())?;

        if migrations.is_empty() {
            writeln!(self.out, "No migrations found")?;
            return Ok(RunOutcome::NoMigrations);
        }

        writeln!(self.out, "Found {} migration(s):", migrations.len())?;
        for migration in &migrations {
            writeln!(self.out, "  - {}", migration.name)?;
        }
        writeln!(self.out)?;

        for migration in &migrations {
            self.report_migration(migration, client)?;
        }

        writeln!(self.out, "Instructions:")?;
        for line in INSTRUCTIONS {
            writeln!(self.out, "{}", line)?;
        }

        Ok(RunOutcome::AllListed {
            count: migrations.len(),
        })
    }

    fn report_migration(&mut self, migration: &MigrationFile, client: &ServiceClient) -> CoreResult<()> {
        writeln!(self.out, "Applying migration: {}", migration.name)?;

        let sql = migration.read_sql()?;

        match client.probe(&sql) {
            ProbeOutcome::DdlUnsupported { endpoint } => {
                log::debug!("{} cannot execute {}", endpoint, migration.name);
                writeln!(
                    self.out,
                    "   Supabase client does not support arbitrary DDL execution."
                )?;
                writeln!(
                    self.out,
                    "   Please execute this SQL manually in Supabase SQL Editor:\n"
                )?;
            }
        }

        writeln!(self.out, "--- START SQL ({}) ---", migration.name)?;
        writeln!(self.out, "{}", sql)?;
        writeln!(self.out, "--- END SQL ---\n")?;
        Ok(())
    }

    /// Render `err` into the report and wrap it as the failed outcome
    fn fail(&mut self, err: CoreError) -> RunOutcome {
        if let Err(write_err) = self.render_error(&err) {
            log::warn!("Could not write error report: {}", write_err);
        }
        RunOutcome::Failed(err)
    }

    fn render_error(&mut self, err: &CoreError) -> std::io::Result<()> {
        match err {
            CoreError::MigrationRead { name, source } => {
                writeln!(self.out, "Error processing {}:", name)?;
                writeln!(self.out, "   {}\n", source)
            }
            CoreError::ClientUnavailable { .. } => {
                writeln!(self.out, "{}", err)?;
                writeln!(self.out, "\nAlternatively, use Supabase CLI:")?;
                writeln!(self.out, "  supabase db push")
            }
            CoreError::Output(_) => Ok(()),
            other => writeln!(self.out, "{}", other),
        }
    }
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
