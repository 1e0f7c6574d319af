//! Fuzz target for allowlist document parsing.
//!
//! Goal: Selecting keys for a target major should **never panic** on any input.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_allowlist_parser
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct AllowlistInput {
    text: String,
    major: u64,
}

fuzz_target!(|input: AllowlistInput| {
    let _ = peerguard_settings::parse_allowlist_json(&input.text, input.major);
});
