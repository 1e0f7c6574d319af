use peerguard_types::{ClassifiedEntry, PackageEntry};
use std::collections::BTreeSet;

/// Exact allowlist keys accepted for one target major.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Allowlist {
    keys: BTreeSet<String>,
}

impl Allowlist {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}

/// Flagged entries split by allowlist outcome, plus the keys nothing matched.
#[derive(Clone, Debug, Default)]
pub struct Classification {
    pub allowed: Vec<ClassifiedEntry>,
    pub blocked: Vec<ClassifiedEntry>,
    /// Sorted allowlist keys that matched no flagged entry.
    pub stale: Vec<String>,
}

pub fn classify(entries: Vec<PackageEntry>, allowlist: &Allowlist) -> Classification {
    let mut out = Classification::default();
    for entry in entries {
        let classified = ClassifiedEntry::new(entry, |key| allowlist.contains(key.as_str()));
        if classified.allowed {
            out.allowed.push(classified);
        } else {
            out.blocked.push(classified);
        }
    }

    let used: BTreeSet<&str> = out.allowed.iter().map(|c| c.key.as_str()).collect();
    out.stale = allowlist
        .iter()
        .filter(|key| !used.contains(key))
        .map(str::to_string)
        .collect();

    tracing::debug!(
        allowed = out.allowed.len(),
        blocked = out.blocked.len(),
        stale = out.stale.len(),
        "classified flagged entries"
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::flagged;

    #[test]
    fn allowlisted_entries_are_allowed() {
        let entries = vec![
            flagged("node_modules/a", "a", "1.0.0", &[("react", "^16.8.0")], true),
            flagged("node_modules/b", "b", "2.0.0", &[("react", "^15.0.0")], false),
        ];
        let allowlist = Allowlist::new(["a@1.0.0::react=^16.8.0"]);

        let out = classify(entries, &allowlist);
        assert_eq!(out.allowed.len(), 1);
        assert_eq!(out.allowed[0].entry.name, "a");
        assert_eq!(out.blocked.len(), 1);
        assert_eq!(out.blocked[0].key.as_str(), "b@2.0.0::react=^15.0.0");
        assert!(out.stale.is_empty());
    }

    #[test]
    fn unmatched_keys_are_stale_and_sorted() {
        let entries = vec![flagged(
            "node_modules/a",
            "a",
            "1.0.0",
            &[("react", "^16.8.0")],
            true,
        )];
        let allowlist = Allowlist::new([
            "z@1.0.0::react=^15.0.0",
            "a@1.0.0::react=^16.8.0",
            "gone@3.0.0::react-dom=^16.0.0",
        ]);

        let out = classify(entries, &allowlist);
        assert_eq!(
            out.stale,
            vec![
                "gone@3.0.0::react-dom=^16.0.0".to_string(),
                "z@1.0.0::react=^15.0.0".to_string()
            ]
        );
    }

    #[test]
    fn one_key_covers_every_occurrence() {
        let entries = vec![
            flagged("node_modules/x/node_modules/b", "b", "2.0.0", &[("react", "^16")], false),
            flagged("node_modules/y/node_modules/b", "b", "2.0.0", &[("react", "^16")], false),
        ];
        let out = classify(entries, &Allowlist::new(["b@2.0.0::react=^16"]));
        assert_eq!(out.allowed.len(), 2);
        assert!(out.blocked.is_empty());
        assert!(out.stale.is_empty());
    }

    #[test]
    fn version_mismatch_is_not_allowed() {
        let entries = vec![flagged("node_modules/a", "a", "1.0.1", &[("react", "^16.8.0")], true)];
        let out = classify(entries, &Allowlist::new(["a@1.0.0::react=^16.8.0"]));
        assert_eq!(out.blocked.len(), 1);
        assert_eq!(out.stale, vec!["a@1.0.0::react=^16.8.0".to_string()]);
    }
}
