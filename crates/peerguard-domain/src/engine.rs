use crate::allowlist::{Allowlist, classify};
use crate::model::{LockfileModel, ManifestModel};
use crate::policy::PeerPolicy;
use crate::report::{DomainReport, TransitiveGroup, Verdict};
use crate::scan::scan;
use peerguard_types::ClassifiedEntry;
use std::collections::BTreeMap;

pub fn evaluate(
    lockfile: &LockfileModel,
    manifest: &ManifestModel,
    allowlist: &Allowlist,
    policy: &PeerPolicy,
) -> DomainReport {
    let flagged = scan(lockfile, manifest, policy);
    tracing::debug!(
        entries = lockfile.entry_count(),
        flagged = flagged.len(),
        target_major = policy.target_major,
        "scanned lockfile"
    );

    let classification = classify(flagged, allowlist);
    let blocked_total = classification.blocked.len();
    let (blocked_direct, blocked_transitive): (Vec<_>, Vec<_>) = classification
        .blocked
        .into_iter()
        .partition(|c| c.entry.direct);

    let verdict = if blocked_total == 0 {
        Verdict::Pass
    } else {
        Verdict::Fail
    };

    DomainReport {
        verdict,
        framework: policy.framework.clone(),
        target_major: policy.target_major,
        entries_scanned: lockfile.entry_count(),
        allowed: classification.allowed,
        blocked_direct,
        blocked_transitive: group_transitive(&blocked_transitive),
        blocked_total,
        stale: classification.stale,
    }
}

/// Collapse repeated (name, version, signature) rows, keeping first-seen order for ties
/// and sorting by `name@version`.
fn group_transitive(entries: &[ClassifiedEntry]) -> Vec<TransitiveGroup> {
    let mut groups: Vec<TransitiveGroup> = Vec::new();
    let mut index: BTreeMap<&str, usize> = BTreeMap::new();

    for c in entries {
        match index.get(c.key.as_str()) {
            Some(&i) => groups[i].occurrences += 1,
            None => {
                index.insert(c.key.as_str(), groups.len());
                groups.push(TransitiveGroup {
                    name: c.entry.name.clone(),
                    version: c.entry.version.clone(),
                    signature: c.signature.clone(),
                    occurrences: 1,
                });
            }
        }
    }

    groups.sort_by_key(TransitiveGroup::label);
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{lockfile, manifest, meta, policy};

    #[test]
    fn direct_conflict_fails() {
        let lock = lockfile(vec![(
            "node_modules/a",
            meta(None, Some("1.0.0"), &[("react", "^16.8.0")]),
        )]);
        let report = evaluate(&lock, &manifest(&["a"]), &Allowlist::default(), &policy(17));

        assert_eq!(report.verdict, Verdict::Fail);
        assert_eq!(report.blocked_total, 1);
        assert_eq!(report.blocked_direct.len(), 1);
        assert_eq!(report.blocked_direct[0].entry.label(), "a@1.0.0");
        assert!(report.blocked_transitive.is_empty());
    }

    #[test]
    fn allowlisted_conflict_passes() {
        let lock = lockfile(vec![(
            "node_modules/a",
            meta(None, Some("1.0.0"), &[("react", "^16.8.0")]),
        )]);
        let allowlist = Allowlist::new(["a@1.0.0::react=^16.8.0"]);
        let report = evaluate(&lock, &manifest(&["a"]), &allowlist, &policy(17));

        assert_eq!(report.verdict, Verdict::Pass);
        assert_eq!(report.allowed_count(), 1);
        assert_eq!(report.entries_scanned, 1);
    }

    #[test]
    fn transitive_duplicates_are_grouped() {
        let lock = lockfile(vec![
            (
                "node_modules/x/node_modules/b",
                meta(None, Some("2.0.0"), &[("react", "^16.0.0")]),
            ),
            (
                "node_modules/y/node_modules/b",
                meta(None, Some("2.0.0"), &[("react", "^16.0.0")]),
            ),
            (
                "node_modules/a-lib",
                meta(None, Some("0.1.0"), &[("react-dom", "^15.0.0")]),
            ),
        ]);
        let report = evaluate(&lock, &manifest(&[]), &Allowlist::default(), &policy(17));

        assert_eq!(report.blocked_total, 3);
        assert_eq!(
            report.blocked_transitive,
            vec![
                TransitiveGroup {
                    name: "a-lib".to_string(),
                    version: "0.1.0".to_string(),
                    signature: report.blocked_transitive[0].signature.clone(),
                    occurrences: 1,
                },
                TransitiveGroup {
                    name: "b".to_string(),
                    version: "2.0.0".to_string(),
                    signature: report.blocked_transitive[1].signature.clone(),
                    occurrences: 2,
                },
            ]
        );
        assert_eq!(
            report.blocked_transitive[1].signature.as_str(),
            "react=^16.0.0"
        );
    }

    #[test]
    fn same_version_with_different_signatures_keeps_separate_rows() {
        let lock = lockfile(vec![
            (
                "node_modules/p/node_modules/c",
                meta(None, Some("1.0.0"), &[("react", "^15.0.0")]),
            ),
            (
                "node_modules/q/node_modules/c",
                meta(None, Some("1.0.0"), &[("react", "^16.0.0")]),
            ),
        ]);
        let report = evaluate(&lock, &manifest(&[]), &Allowlist::default(), &policy(17));
        let sigs: Vec<&str> = report
            .blocked_transitive
            .iter()
            .map(|g| g.signature.as_str())
            .collect();
        assert_eq!(sigs, vec!["react=^15.0.0", "react=^16.0.0"]);
    }

    #[test]
    fn stale_keys_surface_on_pass() {
        let lock = lockfile(vec![(
            "node_modules/fine",
            meta(None, Some("1.0.0"), &[("react", ">=16")]),
        )]);
        let allowlist = Allowlist::new(["old@1.0.0::react=^15.0.0"]);
        let report = evaluate(&lock, &manifest(&[]), &allowlist, &policy(17));

        assert_eq!(report.verdict, Verdict::Pass);
        assert_eq!(report.stale, vec!["old@1.0.0::react=^15.0.0".to_string()]);
    }
}
