//! Settings loaded from the local `.env.local` file

use crate::error::{CoreError, CoreResult};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// Public endpoint URL of the Supabase project
pub const URL_VAR: &str = "NEXT_PUBLIC_SUPABASE_URL";

/// Privileged service-role key
pub const SERVICE_KEY_VAR: &str = "SUPABASE_SERVICE_ROLE_KEY";

/// The two values the reporter needs before it touches the file system
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Service endpoint URL
    pub supabase_url: String,

    /// Service-role key, never printed
    pub service_role_key: String,
}

impl Config {
    /// Load configuration from a settings file, with the process
    /// environment taking precedence over the file.
    pub fn load(env_file: &Path) -> CoreResult<Self> {
        let file_vars = read_env_file(env_file)?;
        Self::resolve(&file_vars, |key| std::env::var(key).ok())
    }

    /// Resolve both values from file entries and an environment lookup.
    ///
    /// A variable the lookup knows about wins even when empty, matching how
    /// dotenv loaders refuse to override an already-set variable.
    pub fn resolve<F>(file_vars: &HashMap<String, String>, env: F) -> CoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| env(key).or_else(|| file_vars.get(key).cloned());

        match (lookup(URL_VAR), lookup(SERVICE_KEY_VAR)) {
            (Some(url), Some(key)) if !url.is_empty() && !key.is_empty() => Ok(Self {
                supabase_url: url,
                service_role_key: key,
            }),
            _ => Err(CoreError::MissingConfig),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("supabase_url", &self.supabase_url)
            .field("service_role_key", &"<redacted>")
            .finish()
    }
}

/// Parse a dotenv-style settings file into a map.
///
/// A missing file yields an empty map; the missing values surface later as
/// [`CoreError::MissingConfig`]. Lines the parser rejects are skipped with a
/// warning, so unrelated entries never block the run.
pub fn read_env_file(path: &Path) -> CoreResult<HashMap<String, String>> {
    let parse_error = |e: dotenvy::Error| CoreError::EnvFileParse {
        path: path.display().to_string(),
        details: e.to_string(),
    };

    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if e.not_found() => {
            log::debug!("Settings file not found: {}", path.display());
            return Ok(HashMap::new());
        }
        Err(e) => return Err(parse_error(e)),
    };

    let mut vars = HashMap::new();
    for item in iter {
        match item {
            Ok((key, value)) => {
                vars.insert(key, value);
            }
            Err(e @ dotenvy::Error::LineParse(..)) => {
                log::warn!("Skipping unparsable line in {}: {}", path.display(), e);
            }
            Err(e) => return Err(parse_error(e)),
        }
    }
    log::debug!("Read {} entries from {}", vars.len(), path.display());
    Ok(vars)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
