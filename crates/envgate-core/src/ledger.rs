use std::collections::BTreeMap;

/// Per-run record of which required keys have been seen.
///
/// Flags start false and only ever flip to true. Build a new ledger for each
/// pass; nothing here is meant to survive one.
#[derive(Debug, Clone, Default)]
pub struct RequiredKeyLedger {
    seen: BTreeMap<String, bool>,
}

impl RequiredKeyLedger {
    pub fn new<I, S>(required: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            seen: required.into_iter().map(|k| (k.into(), false)).collect(),
        }
    }

    /// Marks `key` as seen. Returns whether it is a required key; keys outside
    /// the required set are ignored.
    pub fn mark_seen(&mut self, key: &str) -> bool {
        match self.seen.get_mut(key) {
            Some(flag) => {
                *flag = true;
                true
            }
            None => false,
        }
    }

    pub fn is_required(&self, key: &str) -> bool {
        self.seen.contains_key(key)
    }

    /// Required keys not yet seen, sorted by name.
    pub fn unsatisfied(&self) -> Vec<String> {
        self.seen
            .iter()
            .filter(|(_, seen)| !**seen)
            .map(|(key, _)| key.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
