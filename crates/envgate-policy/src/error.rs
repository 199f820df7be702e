//! Errors raised while constructing a policy.

/// A policy could not be built from its parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyBuildError {
    /// Integer range whose lower bound exceeds its upper bound.
    #[error("empty range for key {key}: min {min} is greater than max {max}")]
    EmptyRange { key: String, min: i64, max: i64 },

    /// Regular expression that does not compile.
    #[error("invalid pattern for key {key}: {pattern} - {message}")]
    InvalidPattern {
        key: String,
        pattern: String,
        message: String,
    },
}
