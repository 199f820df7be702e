//! The policy capability shared by built-in and caller-supplied rules.

use std::fmt::Display;

/// Result of offering one entry to one policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The policy does not own this key.
    NotApplicable,
    /// The policy owns this key and the value passed.
    Accepted,
    /// The policy owns this key and the value failed, with a human-readable reason.
    Rejected(String),
}

impl Outcome {
    pub fn is_applicable(&self) -> bool {
        !matches!(self, Outcome::NotApplicable)
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected(_))
    }

    /// Reason carried by a rejection, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Outcome::Rejected(reason) => Some(reason),
            _ => None,
        }
    }
}

/// A pluggable rule that inspects one key's value and accepts, rejects, or abstains.
///
/// Implementations must return [`Outcome::NotApplicable`] for every key they do
/// not own, and must decide from `(key, value)` alone: no other entry, no I/O,
/// no interior state that changes between calls. A registry may hold any number
/// of policies as long as each one abstains on keys it does not target.
///
/// ```
/// use envgate_policy::{Outcome, Policy};
///
/// struct NonEmpty(&'static str);
///
/// impl Policy for NonEmpty {
///     fn name(&self) -> &str {
///         "NonEmpty"
///     }
///
///     fn check(&self, key: &str, value: &str) -> Outcome {
///         if key != self.0 {
///             return Outcome::NotApplicable;
///         }
///         if value.trim().is_empty() {
///             return Outcome::Rejected(format!("value for key {key:?} must not be empty"));
///         }
///         Outcome::Accepted
///     }
/// }
///
/// assert_eq!(NonEmpty("DB_HOST").check("DB_PORT", ""), Outcome::NotApplicable);
/// assert!(NonEmpty("DB_HOST").check("DB_HOST", " ").is_rejected());
/// ```
pub trait Policy: Send + Sync {
    /// Name reported when this policy rejects a value.
    fn name(&self) -> &str;

    /// Decide whether the policy applies to `key` and, if so, whether `value` passes.
    fn check(&self, key: &str, value: &str) -> Outcome;

    /// One-line description used when listing a registry.
    fn describe(&self) -> String {
        self.name().to_string()
    }
}

/// Render a list the way rejection reasons show it: `[a b c]`.
pub fn format_list<T: Display>(items: &[T]) -> String {
    let joined = items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    format!("[{joined}]")
}
