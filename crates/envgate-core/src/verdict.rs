use serde::Serialize;

use crate::error::ValidationError;

/// The first rejected value of a pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub key: String,
    pub policy: String,
    pub reason: String,
}

/// Outcome of one validation pass.
///
/// Content violations stop the pass at the first rejected value; missing keys
/// are reported all at once, and only when no value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Verdict {
    Valid,
    ContentViolation(Violation),
    MissingKeys { keys: Vec<String> },
}

impl Verdict {
    pub fn violation(
        key: impl Into<String>,
        policy: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Verdict::ContentViolation(Violation {
            key: key.into(),
            policy: policy.into(),
            reason: reason.into(),
        })
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    /// Human-readable failure text, `None` when valid.
    pub fn message(&self) -> Option<String> {
        self.clone().into_result().err().map(|e| e.to_string())
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        match self {
            Verdict::Valid => Ok(()),
            Verdict::ContentViolation(Violation {
                key,
                policy,
                reason,
            }) => Err(ValidationError::ContentViolation {
                key,
                policy,
                reason,
            }),
            Verdict::MissingKeys { keys } => Err(ValidationError::MissingRequiredKeys { keys }),
        }
    }
}
