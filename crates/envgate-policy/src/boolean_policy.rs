use crate::policy::{format_list, Outcome, Policy};

/// Literals accepted by the default `ENABLE_DEBUG` rule.
pub const DEFAULT_BOOLEAN_LITERALS: &[&str] = &["true", "false", "1", "0", "yes", "no"];

/// Accepts a value when it matches one of a set of boolean spellings.
///
/// Matching trims surrounding whitespace and ignores case on both sides.
#[derive(Debug, Clone)]
pub struct BooleanPolicy {
    key: String,
    accepted: Vec<String>,
}

impl BooleanPolicy {
    pub fn new(key: impl Into<String>, accepted: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            key: key.into(),
            accepted: accepted.into_iter().map(Into::into).collect(),
        }
    }

    /// Policy over `key` with the conventional `true/false/1/0/yes/no` spellings.
    pub fn with_default_literals(key: impl Into<String>) -> Self {
        Self::new(key, DEFAULT_BOOLEAN_LITERALS.iter().copied())
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn accepted(&self) -> &[String] {
        &self.accepted
    }
}

impl Policy for BooleanPolicy {
    fn name(&self) -> &str {
        "BooleanPolicy"
    }

    fn check(&self, key: &str, value: &str) -> Outcome {
        if key != self.key {
            return Outcome::NotApplicable;
        }

        let normalized = value.trim().to_lowercase();
        if self
            .accepted
            .iter()
            .any(|literal| literal.to_lowercase() == normalized)
        {
            return Outcome::Accepted;
        }

        Outcome::Rejected(format!(
            "value for key {key:?} must be a boolean (accepted values: {})",
            format_list(&self.accepted)
        ))
    }

    fn describe(&self) -> String {
        format!("{} {} in {}", self.name(), self.key, format_list(&self.accepted))
    }
}
