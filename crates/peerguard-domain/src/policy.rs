/// What the scan checks: which framework peers, against which major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PeerPolicy {
    /// Human label of the framework, e.g. `React`.
    pub framework: String,
    pub target_major: u64,
    /// Peer names tested on every entry, in report order.
    pub peer_keys: Vec<String>,
}

impl PeerPolicy {
    pub fn new(framework: impl Into<String>, target_major: u64, peer_keys: Vec<String>) -> Self {
        Self {
            framework: framework.into(),
            target_major,
            peer_keys,
        }
    }
}
