use crate::presets::DEFAULT_PRESET;
use peerguard_domain::policy::PeerPolicy;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub target_major: Option<u64>,
    /// Replaces the preset peer keys when non-empty.
    pub peer_keys: Vec<String>,
}

/// Resolve the effective policy (framework preset + overrides).
pub fn resolve_policy(overrides: Overrides) -> anyhow::Result<PeerPolicy> {
    let preset = DEFAULT_PRESET;

    let target_major = match overrides.target_major {
        Some(0) => anyhow::bail!("target major must be a positive integer"),
        Some(m) => m,
        None => anyhow::bail!("target major is required"),
    };

    let mut peer_keys: Vec<String> = Vec::new();
    let requested: Vec<String> = if overrides.peer_keys.is_empty() {
        preset.peer_keys()
    } else {
        overrides.peer_keys
    };
    for key in requested {
        let key = key.trim().to_string();
        if key.is_empty() {
            anyhow::bail!("peer key must not be empty");
        }
        if !peer_keys.contains(&key) {
            peer_keys.push(key);
        }
    }

    Ok(PeerPolicy::new(preset.label, target_major, peer_keys))
}
