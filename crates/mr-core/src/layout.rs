//! Fixed on-disk locations the reporter reads from

use std::path::{Path, PathBuf};

/// Name of the local settings file at the project root
pub const ENV_FILE_NAME: &str = ".env.local";

/// Migrations directory relative to the project root
pub const MIGRATIONS_SUBDIR: [&str; 2] = ["supabase", "migrations"];

/// Project root plus the two inputs derived from it.
///
/// Either input can be relocated independently; unset overrides fall back
/// to the conventional paths under `root`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    /// Project root directory
    pub root: PathBuf,

    env_file: Option<PathBuf>,
    migrations_dir: Option<PathBuf>,
}

impl ProjectLayout {
    /// Layout rooted at `root` with conventional paths
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            env_file: None,
            migrations_dir: None,
        }
    }

    /// Layout rooted two directory levels above `program`.
    ///
    /// `program` is the executable path, so `<root>/bin/mr` yields `<root>`.
    /// Paths too shallow to have a grandparent fall back to the nearest
    /// ancestor available.
    pub fn for_program(program: &Path) -> Self {
        let root = program
            .parent()
            .and_then(Path::parent)
            .or_else(|| program.parent())
            .unwrap_or(program);
        let root = if root.as_os_str().is_empty() {
            Path::new(".")
        } else {
            root
        };
        Self::new(root)
    }

    /// Override the settings file location
    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    /// Override the migrations directory location
    pub fn with_migrations_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.migrations_dir = Some(path.into());
        self
    }

    /// Settings file path
    pub fn env_file(&self) -> PathBuf {
        self.env_file
            .clone()
            .unwrap_or_else(|| self.root.join(ENV_FILE_NAME))
    }

    /// Migrations directory path
    pub fn migrations_dir(&self) -> PathBuf {
        self.migrations_dir.clone().unwrap_or_else(|| {
            MIGRATIONS_SUBDIR
                .iter()
                .fold(self.root.clone(), |path, part| path.join(part))
        })
    }
}

#[cfg(test)]
#[path = "layout_test.rs"]
mod tests;
