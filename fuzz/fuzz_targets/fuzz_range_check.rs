//! Fuzz target for peer range normalization and the major-version check.
//!
//! Goal: `range_supports_major` should **never panic**, and normalization must be idempotent.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_range_check
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use peerguard_domain::range::{normalize_range, range_supports_major};

#[derive(Arbitrary, Debug)]
struct RangeInput {
    range: String,
    major: u64,
}

fuzz_target!(|input: RangeInput| {
    if input.range.len() > 512 {
        return;
    }

    let once = normalize_range(&input.range);
    assert_eq!(normalize_range(&once), once);

    let _ = range_supports_major(Some(&input.range), input.major);
});
