//! Use case orchestration for peerguard.
//!
//! This crate provides the application layer: it loads inputs through the repo layer, resolves
//! the policy through settings, evaluates in the domain and hands the result to the renderer.
//!
//! The CLI crate depends on this; it only handles argument parsing, logging and stream output.

#![forbid(unsafe_code)]

mod check;
mod report;

pub use check::{CheckInput, CheckOutput, run_check, verdict_exit_code};
pub use report::{render_check, to_renderable};
