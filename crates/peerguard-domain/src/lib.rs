//! Pure peer-range evaluation (no IO).
//!
//! Input: a lockfile model and manifest model constructed elsewhere, plus the loaded allowlist.
//! Output: flagged entries classified into allowed/blocked, stale allowlist keys and a verdict.

#![forbid(unsafe_code)]

pub mod allowlist;
pub mod interval;
pub mod model;
pub mod policy;
pub mod range;
pub mod report;
pub mod scan;

mod engine;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod test_support;

pub use engine::evaluate;
