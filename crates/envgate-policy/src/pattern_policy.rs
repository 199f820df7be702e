use regex::Regex;

use crate::error::PolicyBuildError;
use crate::policy::{Outcome, Policy};

/// Accepts a value matched by a regular expression.
///
/// The expression is used as written; anchor it (`^...$`) to require a full match.
#[derive(Debug, Clone)]
pub struct PatternPolicy {
    key: String,
    pattern: Regex,
}

impl PatternPolicy {
    pub fn new(key: impl Into<String>, pattern: &str) -> Result<Self, PolicyBuildError> {
        let key = key.into();
        let pattern = Regex::new(pattern).map_err(|e| PolicyBuildError::InvalidPattern {
            key: key.clone(),
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { key, pattern })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Policy for PatternPolicy {
    fn name(&self) -> &str {
        "PatternPolicy"
    }

    fn check(&self, key: &str, value: &str) -> Outcome {
        if key != self.key {
            return Outcome::NotApplicable;
        }
        if self.pattern.is_match(value) {
            Outcome::Accepted
        } else {
            Outcome::Rejected(format!(
                "value for key {key:?} must match pattern {}",
                self.pattern.as_str()
            ))
        }
    }

    fn describe(&self) -> String {
        format!("{} {} ~ {}", self.name(), self.key, self.pattern.as_str())
    }
}
