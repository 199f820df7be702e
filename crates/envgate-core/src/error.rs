//! Error types for loading and configuring a validation run.
//!
//! A failing [`Verdict`](crate::Verdict) is not an error here: it is the normal
//! output of a pass. [`EnvgateError`] covers what stops a pass from happening
//! at all, and [`ValidationError`] is the `Result` view of a failing verdict.

use std::path::PathBuf;

use envgate_policy::{format_list, PolicyBuildError};

/// Infrastructure failures: unreadable files, bad config, unbuildable policies.
#[derive(Debug, thiserror::Error)]
pub enum EnvgateError {
    /// Env or config file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Env content could not be tokenised.
    #[error("failed to parse env content: {message}")]
    Parse { message: String },

    /// Config file is not valid YAML for the expected shape.
    #[error("invalid config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Config parsed but is semantically wrong.
    #[error("configuration error: {message}")]
    Config { message: String },

    #[error(transparent)]
    Policy(#[from] PolicyBuildError),
}

impl EnvgateError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}

/// A failing verdict, as an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A policy rejected a value.
    #[error("{reason}")]
    ContentViolation {
        key: String,
        policy: String,
        reason: String,
    },

    /// Declared-required keys never appeared.
    #[error("missing required keys: {}", format_list(.keys))]
    MissingRequiredKeys { keys: Vec<String> },
}

/// Result type for envgate operations.
pub type EnvgateResult<T> = Result<T, EnvgateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_display() {
        let err = ValidationError::MissingRequiredKeys {
            keys: vec!["API_URL".into(), "DB_HOST".into()],
        };
        assert_eq!(err.to_string(), "missing required keys: [API_URL DB_HOST]");
    }

    #[test]
    fn test_content_violation_displays_reason() {
        let err = ValidationError::ContentViolation {
            key: "ENVIRONMENT".into(),
            policy: "EnumPolicy".into(),
            reason: "value for key \"ENVIRONMENT\" must be one of [A B]".into(),
        };
        assert_eq!(
            err.to_string(),
            "value for key \"ENVIRONMENT\" must be one of [A B]"
        );
    }

    #[test]
    fn test_read_error_names_path() {
        let err = EnvgateError::read(
            "/nope/.env",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().contains("/nope/.env"));
    }
}
