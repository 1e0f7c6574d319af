use crate::model::{LockfileModel, ManifestModel, PackageMeta};
use crate::policy::PeerPolicy;
use crate::range::range_supports_major;
use peerguard_types::ids::UNKNOWN_VERSION;
use peerguard_types::{FailingPeer, LockPath, PackageEntry};

/// Walk every lockfile entry and return those with at least one failing framework peer,
/// sorted by lockfile path.
pub fn scan(
    lockfile: &LockfileModel,
    manifest: &ManifestModel,
    policy: &PeerPolicy,
) -> Vec<PackageEntry> {
    let mut flagged: Vec<PackageEntry> = lockfile
        .packages
        .iter()
        .filter_map(|(path, meta)| scan_entry(path, meta, manifest, policy))
        .collect();

    // Deterministic ordering for diffing across runs.
    flagged.sort_by(|a, b| a.path.cmp(&b.path));
    flagged
}

fn scan_entry(
    path: &LockPath,
    meta: &PackageMeta,
    manifest: &ManifestModel,
    policy: &PeerPolicy,
) -> Option<PackageEntry> {
    let declared = meta.peer_dependencies.as_ref()?;

    let mut failing_peers = Vec::new();
    for key in &policy.peer_keys {
        let Some(range) = declared.get(key) else { continue };
        if !range_supports_major(range.as_deref(), policy.target_major) {
            let range_text = range.as_deref().unwrap_or_default();
            failing_peers.push(FailingPeer::new(key.as_str(), range_text));
        }
    }
    if failing_peers.is_empty() {
        return None;
    }

    let name = display_name(path, meta);
    let direct = manifest.is_direct(&name) && path.is_top_level_of(&name);
    let version = meta
        .version
        .clone()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| UNKNOWN_VERSION.to_string());

    tracing::trace!(
        path = %path,
        name = %name,
        version = %version,
        direct,
        failing = failing_peers.len(),
        "flagged lockfile entry"
    );

    Some(PackageEntry {
        path: path.clone(),
        name,
        version,
        failing_peers,
        direct,
    })
}

/// Explicit `name` wins; otherwise the name is derived from the lockfile path.
pub fn display_name(path: &LockPath, meta: &PackageMeta) -> String {
    match meta.name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => path.package_name(),
    }
}
