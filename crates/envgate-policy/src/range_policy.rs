use crate::error::PolicyBuildError;
use crate::policy::{Outcome, Policy};

/// Accepts a base-10 integer within an inclusive range.
#[derive(Debug, Clone)]
pub struct IntegerRangePolicy {
    key: String,
    min: i64,
    max: i64,
}

impl IntegerRangePolicy {
    pub fn new(key: impl Into<String>, min: i64, max: i64) -> Result<Self, PolicyBuildError> {
        let key = key.into();
        if min > max {
            return Err(PolicyBuildError::EmptyRange { key, min, max });
        }
        Ok(Self { key, min, max })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn bounds(&self) -> (i64, i64) {
        (self.min, self.max)
    }
}

impl Policy for IntegerRangePolicy {
    fn name(&self) -> &str {
        "IntegerRangePolicy"
    }

    fn check(&self, key: &str, value: &str) -> Outcome {
        if key != self.key {
            return Outcome::NotApplicable;
        }
        let Ok(n) = value.trim().parse::<i64>() else {
            return Outcome::Rejected(format!("value for key {key:?} must be an integer"));
        };
        if n < self.min || n > self.max {
            return Outcome::Rejected(format!(
                "value for key {key:?} must be between {} and {}",
                self.min, self.max
            ));
        }
        Outcome::Accepted
    }

    fn describe(&self) -> String {
        format!("{} {} in {}..={}", self.name(), self.key, self.min, self.max)
    }
}
