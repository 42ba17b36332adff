//! Migration file discovery

use crate::error::{CoreError, CoreResult};
use std::path::{Path, PathBuf};

/// Pattern matched against entries of the migrations directory
pub const MIGRATION_PATTERN: &str = "*.sql";

/// A `.sql` file in the migrations directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationFile {
    /// File name, e.g. `20240101_init.sql`
    pub name: String,

    /// Full path to the file
    pub path: PathBuf,
}

impl MigrationFile {
    /// Read the file's full text as UTF-8
    pub fn read_sql(&self) -> CoreResult<String> {
        std::fs::read_to_string(&self.path).map_err(|e| CoreError::MigrationRead {
            name: self.name.clone(),
            source: e,
        })
    }
}

/// List `*.sql` files in `dir`, sorted by file name.
///
/// Ordering is plain string comparison, so `10_x.sql` sorts before
/// `2_y.sql`. Subdirectories are not descended into. A path that exists but
/// is not a directory holds no migrations.
pub fn discover_migrations(dir: &Path) -> CoreResult<Vec<MigrationFile>> {
    if !dir.exists() {
        return Err(CoreError::MigrationsDirNotFound {
            path: dir.display().to_string(),
        });
    }
    if !dir.is_dir() {
        log::warn!("{} is not a directory; no migrations to list", dir.display());
        return Ok(Vec::new());
    }

    let escaped = glob::Pattern::escape(&dir.to_string_lossy());
    let pattern = format!("{}/{}", escaped, MIGRATION_PATTERN);
    let entries = glob::glob(&pattern).map_err(|e| CoreError::MigrationPattern {
        pattern: pattern.clone(),
        source: e,
    })?;

    let mut migrations: Vec<MigrationFile> = Vec::new();
    for entry in entries {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                log::warn!("Skipping unreadable entry {}: {}", e.path().display(), e);
                continue;
            }
        };
        let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };
        migrations.push(MigrationFile { name, path });
    }

    migrations.sort_by(|a, b| a.name.cmp(&b.name));
    log::debug!(
        "Discovered {} migration(s) in {}",
        migrations.len(),
        dir.display()
    );
    Ok(migrations)
}

#[cfg(test)]
#[path = "migration_test.rs"]
mod tests;
