use peerguard_types::{ClassifiedEntry, PeerSignature};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
}

/// Blocked transitive entries sharing name, version and peer signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitiveGroup {
    pub name: String,
    pub version: String,
    pub signature: PeerSignature,
    pub occurrences: u32,
}

impl TransitiveGroup {
    pub fn label(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }
}

#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: Verdict,
    pub framework: String,
    pub target_major: u64,
    /// Every `packages` entry in the lockfile, flagged or not.
    pub entries_scanned: usize,
    pub allowed: Vec<ClassifiedEntry>,
    /// Blocked direct dependencies, one per lockfile occurrence, in path order.
    pub blocked_direct: Vec<ClassifiedEntry>,
    pub blocked_transitive: Vec<TransitiveGroup>,
    /// Total blocked entries before grouping.
    pub blocked_total: usize,
    pub stale: Vec<String>,
}

impl DomainReport {
    pub fn allowed_count(&self) -> usize {
        self.allowed.len()
    }
}
