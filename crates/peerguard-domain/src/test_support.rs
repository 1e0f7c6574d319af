use crate::model::{LockfileModel, ManifestModel, PackageMeta};
use crate::policy::PeerPolicy;
use peerguard_types::{FailingPeer, LockPath, PackageEntry};

pub fn meta(name: Option<&str>, version: Option<&str>, peers: &[(&str, &str)]) -> PackageMeta {
    PackageMeta {
        name: name.map(str::to_string),
        version: version.map(str::to_string),
        peer_dependencies: Some(
            peers
                .iter()
                .map(|(k, r)| (k.to_string(), Some(r.to_string())))
                .collect(),
        ),
    }
}

/// An entry with no `peerDependencies` section.
pub fn bare(version: Option<&str>) -> PackageMeta {
    PackageMeta {
        name: None,
        version: version.map(str::to_string),
        peer_dependencies: None,
    }
}

pub fn lockfile(entries: Vec<(&str, PackageMeta)>) -> LockfileModel {
    LockfileModel {
        packages: entries
            .into_iter()
            .map(|(path, meta)| (LockPath::new(path), meta))
            .collect(),
    }
}

pub fn manifest(direct: &[&str]) -> ManifestModel {
    ManifestModel {
        direct_dependencies: direct.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn policy(target_major: u64) -> PeerPolicy {
    PeerPolicy::new(
        "React",
        target_major,
        vec!["react".to_string(), "react-dom".to_string()],
    )
}

pub fn flagged(
    path: &str,
    name: &str,
    version: &str,
    failing: &[(&str, &str)],
    direct: bool,
) -> PackageEntry {
    let failing_peers: Vec<FailingPeer> = failing
        .iter()
        .map(|(k, r)| FailingPeer::new(*k, *r))
        .collect();
    PackageEntry {
        path: LockPath::new(path),
        name: name.to_string(),
        version: version.to_string(),
        failing_peers,
        direct,
    }
}
