//! Centralized error handling.
//!
//! Every failure during settings resolution is fatal: the process must
//! refuse to start rather than run with undefined values.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::CheckMessage;

/// Settings resolution error types
#[derive(Error, Debug)]
pub enum ConfigError {
    // Environment values
    #[error("required setting {key} is not set")]
    MissingVar { key: String },

    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("insecure {key}: {reason}")]
    InsecureSecret { key: String, reason: String },

    // Env file
    #[error("failed to load env file {}: {source}", .path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    // System checks
    #[error("{} system check(s) failed: {}", .0.len(), join_checks(.0))]
    FailedChecks(Vec<CheckMessage>),

    // Lookup
    #[error("unknown setting {0}")]
    UnknownSetting(String),

    #[error("failed to serialize settings: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

fn join_checks(checks: &[CheckMessage]) -> String {
    checks
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ConfigError {
    /// Stable error code for logs and exit diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::MissingVar { .. } => "MISSING_SETTING",
            ConfigError::InvalidValue { .. } => "INVALID_SETTING",
            ConfigError::InsecureSecret { .. } => "INSECURE_SECRET",
            ConfigError::EnvFile { .. } => "ENV_FILE_ERROR",
            ConfigError::FailedChecks(_) => "SYSTEM_CHECK_FAILED",
            ConfigError::UnknownSetting(_) => "UNKNOWN_SETTING",
            ConfigError::Serialization(_) => "SERIALIZATION_ERROR",
            ConfigError::Io(_) => "IO_ERROR",
        }
    }

    /// Name of the offending setting, when the error concerns one
    pub fn key(&self) -> Option<&str> {
        match self {
            ConfigError::MissingVar { key }
            | ConfigError::InvalidValue { key, .. }
            | ConfigError::InsecureSecret { key, .. } => Some(key),
            ConfigError::UnknownSetting(name) => Some(name),
            _ => None,
        }
    }
}

/// Result type alias
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience constructors
impl ConfigError {
    pub fn missing(key: impl Into<String>) -> Self {
        ConfigError::MissingVar { key: key.into() }
    }

    pub fn invalid(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ConfigError::InvalidValue {
            key: key.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn insecure(key: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InsecureSecret {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_var_names_key() {
        let err = ConfigError::missing("DB_PASSWORD");
        assert_eq!(err.to_string(), "required setting DB_PASSWORD is not set");
        assert_eq!(err.code(), "MISSING_SETTING");
        assert_eq!(err.key(), Some("DB_PASSWORD"));
    }

    #[test]
    fn test_invalid_value_message() {
        let err = ConfigError::invalid("DB_PORT", "abc", "expected a port number");
        assert_eq!(
            err.to_string(),
            "invalid value \"abc\" for DB_PORT: expected a port number"
        );
        assert_eq!(err.key(), Some("DB_PORT"));
    }
}
