use peerguard_domain::allowlist::Allowlist;
use serde_json::Value;

/// Parse an allowlist document and select the keys for `target_major`.
///
/// Shape: `{ "<major>": ["name@version::signature", ...], ... }`.
///
/// Only invalid JSON is an error. A non-object document, a missing major or a non-array value
/// all yield an empty allowlist. Non-string items are kept by their JSON text; items are trimmed
/// and blanks dropped.
pub fn parse_allowlist_json(input: &str, target_major: u64) -> Result<Allowlist, serde_json::Error> {
    let doc: Value = serde_json::from_str(input)?;

    let Some(Value::Array(items)) = doc.get(target_major.to_string()) else {
        return Ok(Allowlist::default());
    };

    let keys = items
        .iter()
        .map(|item| match item {
            Value::String(s) => s.trim().to_string(),
            other => other.to_string().trim().to_string(),
        })
        .filter(|key| !key.is_empty());

    Ok(Allowlist::new(keys))
}
