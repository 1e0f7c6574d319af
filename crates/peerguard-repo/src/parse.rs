//! JSON documents mapped to the typed models the engine consumes.
//!
//! Only the top-level shape is enforced. Inside `packages`, fields with unexpected types are
//! ignored rather than rejected.

use crate::error::ParseError;
use peerguard_domain::model::{LockfileModel, ManifestModel, PackageMeta};
use peerguard_types::LockPath;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Top-level `package-lock.json` fields the scan reads.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LockfileRecord {
    lockfile_version: Option<Value>,
    packages: Option<Value>,
    /// lockfileVersion 1 tree; only used to explain an empty scan.
    dependencies: Option<Value>,
}

/// One `packages` entry. Fields stay untyped so odd values degrade instead of failing the load.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackageRecord {
    name: Option<Value>,
    version: Option<Value>,
    peer_dependencies: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ManifestRecord {
    dependencies: Option<Value>,
    dev_dependencies: Option<Value>,
}

pub fn parse_lockfile(text: &str) -> Result<LockfileModel, ParseError> {
    let doc = parse_object(text)?;
    let record = LockfileRecord::deserialize(&doc)?;

    let packages = match record.packages {
        None => {
            if record.dependencies.is_some() {
                tracing::warn!(
                    lockfile_version = ?record.lockfile_version,
                    "lockfile has no `packages` map; only lockfileVersion 2+ is scanned"
                );
            }
            return Ok(LockfileModel::default());
        }
        Some(Value::Object(packages)) => packages,
        Some(_) => return Err(ParseError::Shape("`packages` must be an object".to_string())),
    };

    let mut model = LockfileModel::default();
    for (path, value) in &packages {
        // Non-object entries still count as scanned; they just carry no metadata.
        let meta = match value {
            Value::Object(_) => package_meta(PackageRecord::deserialize(value)?),
            _ => {
                tracing::trace!(path = %path, "package entry is not an object");
                PackageMeta::default()
            }
        };
        model.packages.insert(LockPath::new(path.as_str()), meta);
    }
    Ok(model)
}

pub fn parse_manifest(text: &str) -> Result<ManifestModel, ParseError> {
    let doc = parse_object(text)?;
    let record = ManifestRecord::deserialize(&doc)?;

    let mut model = ManifestModel::default();
    for section in [record.dependencies, record.dev_dependencies] {
        if let Some(Value::Object(deps)) = section {
            model.direct_dependencies.extend(deps.into_iter().map(|(name, _)| name));
        }
    }
    Ok(model)
}

/// Parse `text` and require a JSON object at the top level.
fn parse_object(text: &str) -> Result<Value, ParseError> {
    let value: Value = serde_json::from_str(text)?;
    if value.is_object() {
        Ok(value)
    } else {
        Err(ParseError::Shape(format!(
            "expected a JSON object at the top level, found {}",
            type_name(&value)
        )))
    }
}

fn package_meta(record: PackageRecord) -> PackageMeta {
    PackageMeta {
        name: into_string(record.name),
        version: into_string(record.version),
        peer_dependencies: match record.peer_dependencies {
            Some(Value::Object(peers)) => Some(peer_ranges(peers)),
            _ => None,
        },
    }
}

fn peer_ranges(peers: Map<String, Value>) -> BTreeMap<String, Option<String>> {
    peers
        .into_iter()
        .map(|(key, value)| {
            let range = match value {
                Value::Null => None,
                Value::String(s) => Some(s),
                other => Some(other.to_string()),
            };
            (key, range)
        })
        .collect()
}

fn into_string(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
