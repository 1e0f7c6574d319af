/// Framework presets: report label plus the peer keys tested on every lockfile entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameworkPreset {
    pub label: &'static str,
    pub peer_keys: &'static [&'static str],
}

pub const REACT: FrameworkPreset = FrameworkPreset {
    label: "React",
    peer_keys: &["react", "react-dom"],
};

pub const DEFAULT_PRESET: FrameworkPreset = REACT;

impl FrameworkPreset {
    pub fn peer_keys(&self) -> Vec<String> {
        self.peer_keys.iter().map(|k| k.to_string()).collect()
    }
}
