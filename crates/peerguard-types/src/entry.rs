use crate::LockPath;
use crate::ids::{ALLOWLIST_KEY_SEPARATOR, SIGNATURE_SEPARATOR};
use std::fmt;

/// A declared peer range that excludes the target major.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FailingPeer {
    pub key: String,
    pub range: String,
}

impl FailingPeer {
    pub fn new(key: impl Into<String>, range: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            range: range.into(),
        }
    }
}

impl fmt::Display for FailingPeer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.range)
    }
}

/// One flagged lockfile entry: at least one framework peer range fails the target major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackageEntry {
    pub path: LockPath,
    pub name: String,
    pub version: String,
    pub failing_peers: Vec<FailingPeer>,
    /// Declared in the manifest and resolved at its top-level placement.
    pub direct: bool,
}

impl PackageEntry {
    pub fn signature(&self) -> PeerSignature {
        PeerSignature::from_peers(&self.failing_peers)
    }

    pub fn allowlist_key(&self) -> AllowlistKey {
        AllowlistKey::new(&self.name, &self.version, &self.signature())
    }

    /// `name@version`, the label used in reports and for sorting grouped rows.
    pub fn label(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }
}

/// Canonical, order-independent rendering of a set of failing peers: `key=range` pairs,
/// sorted, joined with `", "`.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PeerSignature(String);

impl PeerSignature {
    pub fn from_peers(peers: &[FailingPeer]) -> Self {
        let mut pairs: Vec<String> = peers.iter().map(ToString::to_string).collect();
        pairs.sort();
        Self(pairs.join(SIGNATURE_SEPARATOR))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PeerSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `name@version::signature`, the identifier users write into the allowlist file.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AllowlistKey(String);

impl AllowlistKey {
    pub fn new(name: &str, version: &str, signature: &PeerSignature) -> Self {
        Self(format!(
            "{name}@{version}{ALLOWLIST_KEY_SEPARATOR}{signature}"
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AllowlistKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A flagged entry after the allowlist has been consulted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassifiedEntry {
    pub entry: PackageEntry,
    pub signature: PeerSignature,
    pub key: AllowlistKey,
    pub allowed: bool,
}

impl ClassifiedEntry {
    pub fn new(entry: PackageEntry, allowed_if: impl FnOnce(&AllowlistKey) -> bool) -> Self {
        let signature = entry.signature();
        let key = AllowlistKey::new(&entry.name, &entry.version, &signature);
        let allowed = allowed_if(&key);
        Self {
            entry,
            signature,
            key,
            allowed,
        }
    }
}
