//! Fuzz target for `package-lock.json` and `package.json` parsing.
//!
//! Goal: The parsers should **never panic** on any input.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_lockfile_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = peerguard_repo::fuzz::parse_lockfile(text);
        let _ = peerguard_repo::fuzz::parse_manifest(text);
    }
});
