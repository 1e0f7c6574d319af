//! Stable DTOs and IDs used across the peerguard workspace.
//!
//! This crate is intentionally boring:
//! - lockfile package paths and the name derivation rules that go with them
//! - flagged entries, failing peers, peer signatures and allowlist keys
//! - stable string IDs and default input locations

#![forbid(unsafe_code)]

pub mod entry;
pub mod ids;
pub mod path;

pub use entry::{AllowlistKey, ClassifiedEntry, FailingPeer, PackageEntry, PeerSignature};
pub use path::LockPath;
