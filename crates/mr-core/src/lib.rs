//! mr-core - Core library for the migration reporter
//!
//! Loads Supabase credentials from `.env.local`, discovers the `*.sql` files
//! under `supabase/migrations`, and prints each one framed for manual
//! execution. Nothing is ever executed against the remote service.

pub mod client;
pub mod config;
pub mod error;
pub mod layout;
pub mod migration;
pub mod report;

pub use client::{ClientCapability, ProbeOutcome, ServiceClient};
pub use config::Config;
pub use error::{CoreError, CoreResult};
pub use layout::ProjectLayout;
pub use migration::{discover_migrations, MigrationFile};
pub use report::{Reporter, RunOutcome};
