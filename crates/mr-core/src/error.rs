//! Error types for mr-core

use thiserror::Error;

/// Core error type for the migration reporter
#[derive(Error, Debug)]
pub enum CoreError {
    /// Service URL or service-role key absent or empty
    #[error("Missing SUPABASE_URL or SERVICE_ROLE_KEY in .env.local")]
    MissingConfig,

    /// Settings file exists but could not be parsed
    #[error("Failed to parse {path}: {details}")]
    EnvFileParse { path: String, details: String },

    /// Service URL is not a usable http(s) endpoint
    #[error("Invalid service URL '{url}': {reason}")]
    InvalidServiceUrl { url: String, reason: String },

    /// Service client was not compiled into this build
    #[error("Supabase client not available ({capability})")]
    ClientUnavailable { capability: String },

    /// Migrations directory does not exist
    #[error("Migrations directory not found: {path}")]
    MigrationsDirNotFound { path: String },

    /// Glob pattern for migration discovery was rejected
    #[error("Invalid migration pattern '{pattern}': {source}")]
    MigrationPattern {
        pattern: String,
        source: glob::PatternError,
    },

    /// Reading or processing a single migration file failed
    #[error("Error processing {name}: {source}")]
    MigrationRead {
        name: String,
        source: std::io::Error,
    },

    /// Writing the report itself failed
    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
