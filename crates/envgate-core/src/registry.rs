use envgate_policy::{default_policies, Policy};

/// Ordered policies consulted for every entry: built-ins first, then caller
/// additions in the order given.
///
/// No deduplication happens. Two policies claiming the same key both run, in
/// registry order.
#[derive(Default)]
pub struct PolicyRegistry {
    policies: Vec<Box<dyn Policy>>,
}

impl PolicyRegistry {
    pub fn build(
        built_ins: Vec<Box<dyn Policy>>,
        caller_supplied: impl IntoIterator<Item = Box<dyn Policy>>,
    ) -> Self {
        let mut policies = built_ins;
        policies.extend(caller_supplied);
        Self { policies }
    }

    /// Default built-ins followed by `caller_supplied`.
    pub fn with_defaults(caller_supplied: impl IntoIterator<Item = Box<dyn Policy>>) -> Self {
        Self::build(default_policies(), caller_supplied)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Box<dyn Policy>> {
        self.policies.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.policies.iter().map(|p| p.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}

impl std::fmt::Debug for PolicyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolicyRegistry")
            .field("policies", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use envgate_policy::{IntegerRangePolicy, PatternPolicy};

    #[test]
    fn test_builtins_precede_caller_policies() {
        let extra: Vec<Box<dyn Policy>> = vec![
            Box::new(IntegerRangePolicy::new("CACHE_SIZE", 128, 1024).unwrap()),
            Box::new(PatternPolicy::new("SERVICE_VERSION", "^v[0-9]+$").unwrap()),
        ];
        let registry = PolicyRegistry::with_defaults(extra);

        assert_eq!(
            registry.names(),
            vec![
                "UrlPolicy",
                "EnumPolicy",
                "BooleanPolicy",
                "IpAddressPolicy",
                "IntegerRangePolicy",
                "PatternPolicy"
            ]
        );
    }

    #[test]
    fn test_no_deduplication() {
        let extra: Vec<Box<dyn Policy>> = vec![
            Box::new(IntegerRangePolicy::new("CACHE_SIZE", 1, 2).unwrap()),
            Box::new(IntegerRangePolicy::new("CACHE_SIZE", 1, 2).unwrap()),
        ];
        let registry = PolicyRegistry::build(Vec::new(), extra);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_empty_registry() {
        let registry = PolicyRegistry::build(Vec::new(), Vec::new());
        assert!(registry.is_empty());
        assert_eq!(format!("{registry:?}"), "PolicyRegistry { policies: [] }");
    }
}
