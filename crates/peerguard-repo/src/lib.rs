//! Input adapters: read and parse the lockfile, the project manifest and the allowlist file.
//!
//! This crate is allowed to do filesystem IO. Allowlist *interpretation* (selecting the target
//! major) lives in `peerguard-settings`; this crate only supplies the text.

#![forbid(unsafe_code)]

mod error;
mod parse;

use camino::Utf8Path;
use peerguard_domain::model::{LockfileModel, ManifestModel};

pub use error::{InputError, InputKind, ParseError};

/// Fuzz-friendly API for testing parsing robustness without filesystem access.
/// These functions are designed to never panic on any input.
pub mod fuzz {
    use super::*;

    /// Parse arbitrary text as a `package-lock.json`. **Never panics** on any input.
    pub fn parse_lockfile(text: &str) -> Result<LockfileModel, ParseError> {
        parse::parse_lockfile(text)
    }

    /// Parse arbitrary text as a `package.json`. **Never panics** on any input.
    pub fn parse_manifest(text: &str) -> Result<ManifestModel, ParseError> {
        parse::parse_manifest(text)
    }
}

pub fn load_lockfile(path: &Utf8Path) -> Result<LockfileModel, InputError> {
    let kind = InputKind::Lockfile;
    let text = read_required(kind, path)?;
    let model = parse::parse_lockfile(&text).map_err(|e| InputError::from_parse(kind, path, e))?;
    tracing::debug!(path = %path, entries = model.entry_count(), "loaded lockfile");
    Ok(model)
}

pub fn load_manifest(path: &Utf8Path) -> Result<ManifestModel, InputError> {
    let kind = InputKind::Manifest;
    let text = read_required(kind, path)?;
    let model = parse::parse_manifest(&text).map_err(|e| InputError::from_parse(kind, path, e))?;
    tracing::debug!(
        path = %path,
        direct = model.direct_dependencies.len(),
        "loaded manifest"
    );
    Ok(model)
}

/// Read an input that may legitimately be absent. `Ok(None)` when the file does not exist.
pub fn read_optional(kind: InputKind, path: &Utf8Path) -> Result<Option<String>, InputError> {
    match read_required(kind, path) {
        Ok(text) => Ok(Some(text)),
        Err(InputError::NotFound { .. }) => {
            tracing::debug!(path = %path, %kind, "optional input absent");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn read_required(kind: InputKind, path: &Utf8Path) -> Result<String, InputError> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(InputError::NotFound {
            kind,
            path: path.to_path_buf(),
        }),
        Err(source) => Err(InputError::Read {
            kind,
            path: path.to_path_buf(),
            source,
        }),
    }
}
