use crate::allowlist::Allowlist;
use crate::evaluate;
use crate::range::{normalize_range, range_supports_major};
use crate::test_support::{lockfile, manifest, meta, policy};
use proptest::prelude::*;

proptest! {
    #[test]
    fn blank_ranges_are_always_compatible(ws in "[ \t\n]{0,8}", major in 1u64..1000) {
        prop_assert!(range_supports_major(Some(ws.as_str()), major));
        prop_assert!(range_supports_major(None, major));
    }

    #[test]
    fn normalize_is_idempotent(raw in "[<>=~^|0-9.x, \u{a0}\t-]{0,24}") {
        let once = normalize_range(&raw);
        prop_assert_eq!(normalize_range(&once), once.clone());
    }

    #[test]
    fn caret_range_supports_only_its_own_major(
        major in 1u64..500,
        minor in 0u64..50,
        patch in 0u64..50,
    ) {
        let range = format!("^{major}.{minor}.{patch}");
        prop_assert!(range_supports_major(Some(range.as_str()), major));
        prop_assert!(!range_supports_major(Some(range.as_str()), major + 1));
    }

    #[test]
    fn or_of_two_carets(a in 1u64..100, b in 1u64..100, m in 1u64..100) {
        let range = format!("^{a}.0.0 || ^{b}.0.0");
        prop_assert_eq!(range_supports_major(Some(range.as_str()), m), m == a || m == b);
    }

    #[test]
    fn evaluation_is_deterministic(
        rows in prop::collection::vec(
            ("[a-c]{1,2}", "[a-c]{1,2}", 14u64..20, any::<bool>()),
            0..12,
        ),
        target in 15u64..19,
    ) {
        let entries: Vec<(String, String)> = rows
            .iter()
            .map(|(parent, name, peer_major, nested)| {
                let path = if *nested {
                    format!("node_modules/{parent}/node_modules/{name}")
                } else {
                    format!("node_modules/{name}")
                };
                (path, format!("^{peer_major}.0.0"))
            })
            .collect();
        let lock = lockfile(
            entries
                .iter()
                .map(|(path, range)| {
                    (path.as_str(), meta(None, Some("1.0.0"), &[("react", range.as_str())]))
                })
                .collect(),
        );
        let direct = manifest(&["a", "b"]);
        let allowlist = Allowlist::new(["a@1.0.0::react=^16.0.0"]);

        let first = evaluate(&lock, &direct, &allowlist, &policy(target));
        let second = evaluate(&lock, &direct, &allowlist, &policy(target));

        prop_assert_eq!(first.verdict, second.verdict);
        prop_assert_eq!(&first.blocked_direct, &second.blocked_direct);
        prop_assert_eq!(&first.blocked_transitive, &second.blocked_transitive);
        prop_assert_eq!(&first.stale, &second.stale);
        prop_assert_eq!(
            first.blocked_total + first.allowed.len(),
            first.blocked_direct.len()
                + first.blocked_transitive.iter().map(|g| g.occurrences as usize).sum::<usize>()
                + first.allowed.len()
        );
    }
}
