//! Allowlist parsing and framework preset/override resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod allowlist;
mod presets;
mod resolve;

pub use allowlist::parse_allowlist_json;
pub use presets::{DEFAULT_PRESET, FrameworkPreset, REACT};
pub use resolve::{Overrides, resolve_policy};
