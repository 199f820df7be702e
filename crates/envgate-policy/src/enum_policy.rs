use crate::policy::{format_list, Outcome, Policy};

/// Accepts a value only when it is one of a fixed set of options.
#[derive(Debug, Clone)]
pub struct EnumPolicy {
    key: String,
    allowed: Vec<String>,
    case_sensitive: bool,
}

impl EnumPolicy {
    pub fn new(
        key: impl Into<String>,
        allowed: impl IntoIterator<Item = impl Into<String>>,
        case_sensitive: bool,
    ) -> Self {
        Self {
            key: key.into(),
            allowed: allowed.into_iter().map(Into::into).collect(),
            case_sensitive,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    fn matches(&self, value: &str) -> bool {
        if self.case_sensitive {
            self.allowed.iter().any(|allowed| allowed == value)
        } else {
            let folded = value.to_lowercase();
            self.allowed
                .iter()
                .any(|allowed| allowed.to_lowercase() == folded)
        }
    }
}

impl Policy for EnumPolicy {
    fn name(&self) -> &str {
        "EnumPolicy"
    }

    fn check(&self, key: &str, value: &str) -> Outcome {
        if key != self.key {
            return Outcome::NotApplicable;
        }
        if self.matches(value) {
            return Outcome::Accepted;
        }
        Outcome::Rejected(format!(
            "value for key {key:?} must be one of {}",
            format_list(&self.allowed)
        ))
    }

    fn describe(&self) -> String {
        let mode = if self.case_sensitive {
            "case-sensitive"
        } else {
            "case-insensitive"
        };
        format!(
            "{} {} in {} ({mode})",
            self.name(),
            self.key,
            format_list(&self.allowed)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn environment(case_sensitive: bool) -> EnumPolicy {
        EnumPolicy::new(
            "ENVIRONMENT",
            ["DEVELOPMENT", "STAGING", "PRODUCTION"],
            case_sensitive,
        )
    }

    #[test]
    fn test_case_sensitive_exact_match() {
        let p = environment(true);
        assert_eq!(p.check("ENVIRONMENT", "PRODUCTION"), Outcome::Accepted);
        assert!(p.check("ENVIRONMENT", "production").is_rejected());
    }

    #[test]
    fn test_rejection_reason_lists_options() {
        let outcome = environment(true).check("ENVIRONMENT", "INVALID_ENV");
        assert_eq!(
            outcome.reason(),
            Some("value for key \"ENVIRONMENT\" must be one of [DEVELOPMENT STAGING PRODUCTION]")
        );
    }

    #[test]
    fn test_case_insensitive_mode() {
        let p = environment(false);
        assert_eq!(p.check("ENVIRONMENT", "production"), Outcome::Accepted);
        assert_eq!(p.check("ENVIRONMENT", "Staging"), Outcome::Accepted);
        assert!(p.check("ENVIRONMENT", "qa").is_rejected());
    }

    #[test]
    fn test_value_is_not_trimmed() {
        assert!(environment(true).check("ENVIRONMENT", " STAGING").is_rejected());
    }

    #[test]
    fn test_other_keys_not_applicable() {
        assert_eq!(environment(true).check("LOG_LEVEL", "x"), Outcome::NotApplicable);
    }
}
