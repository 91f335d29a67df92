//! Environment variable sources and `.env` file loading.
//!
//! Resolution reads variables through [`EnvSource`] so that the process
//! environment and an explicit map are interchangeable.

use std::collections::HashMap;
use std::env::VarError;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::errors::{ConfigError, ConfigResult};

/// Source of environment variables.
#[cfg_attr(test, automock)]
pub trait EnvSource {
    /// Look up a variable. Absent values are `Ok(None)`; values that cannot
    /// be read as text are an error.
    fn var(&self, key: &str) -> ConfigResult<Option<String>>;
}

/// Reads from the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> ConfigResult<Option<String>> {
        match std::env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::invalid(
                key,
                "<non-unicode>",
                "value is not valid unicode",
            )),
        }
    }
}

/// Explicit key/value environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable, replacing any previous value.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> ConfigResult<Option<String>> {
        Ok(self.vars.get(key).cloned())
    }
}

/// Read an env file into a [`MapEnv`] without touching the process
/// environment. Returns `Ok(None)` when the file does not exist.
pub fn read_env_file(path: &Path) -> ConfigResult<Option<MapEnv>> {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if e.not_found() => return Ok(None),
        Err(e) => return Err(env_file_error(path, e)),
    };

    let mut vars = HashMap::new();
    for item in iter {
        let (key, value) = item.map_err(|e| env_file_error(path, e))?;
        vars.insert(key, value);
    }

    Ok(Some(MapEnv { vars }))
}

/// Load an env file into the process environment.
///
/// Variables that are already set keep their value. A missing file is not
/// an error; returns whether a file was loaded.
pub fn load_env_file(path: &Path) -> ConfigResult<bool> {
    match dotenvy::from_path(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "Loaded env file");
            Ok(true)
        }
        Err(e) if e.not_found() => {
            tracing::debug!(path = %path.display(), "No env file found, skipping");
            Ok(false)
        }
        Err(e) => Err(env_file_error(path, e)),
    }
}

fn env_file_error(path: &Path, source: dotenvy::Error) -> ConfigError {
    ConfigError::EnvFile {
        path: path.to_path_buf(),
        source,
    }
}
