use peerguard_types::LockPath;
use std::collections::{BTreeMap, BTreeSet};

/// The lockfile as the engine sees it: every `packages` entry, keyed by its raw path.
#[derive(Clone, Debug, Default)]
pub struct LockfileModel {
    pub packages: BTreeMap<LockPath, PackageMeta>,
}

impl LockfileModel {
    pub fn entry_count(&self) -> usize {
        self.packages.len()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PackageMeta {
    /// Explicit `name` field; only present for aliased or linked packages.
    pub name: Option<String>,
    pub version: Option<String>,
    /// `None` when the entry declares no `peerDependencies` at all.
    /// A `None` range means the peer was declared without a usable value.
    pub peer_dependencies: Option<BTreeMap<String, Option<String>>>,
}

/// The project manifest, reduced to what classification needs.
#[derive(Clone, Debug, Default)]
pub struct ManifestModel {
    /// Union of `dependencies` and `devDependencies` names.
    pub direct_dependencies: BTreeSet<String>,
}

impl ManifestModel {
    pub fn is_direct(&self, name: &str) -> bool {
        self.direct_dependencies.contains(name)
    }
}
