//! Shared test utilities for the peerguard workspace.
//!
//! Builds throwaway npm projects (`package.json`, `package-lock.json`, allowlist) in a temp dir
//! so the app, CLI and BDD tests all describe inputs the same way.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Map, Value, json};
use tempfile::TempDir;

pub use peerguard_types::ids::DEFAULT_ALLOWLIST;

/// In-memory `package-lock.json` (lockfileVersion 3).
#[derive(Clone, Debug)]
pub struct LockfileBuilder {
    packages: Map<String, Value>,
}

impl LockfileBuilder {
    pub fn new() -> Self {
        let mut packages = Map::new();
        packages.insert("".to_string(), json!({ "name": "fixture-app", "version": "0.0.0" }));
        Self { packages }
    }

    /// Add an entry whose name is implied by its path.
    pub fn package(self, path: &str, version: &str, peers: &[(&str, &str)]) -> Self {
        self.entry(path, json!({ "version": version, "peerDependencies": peer_map(peers) }))
    }

    /// Add an entry with an explicit `name` field (aliases, workspace links).
    pub fn named(self, path: &str, name: &str, version: &str, peers: &[(&str, &str)]) -> Self {
        self.entry(
            path,
            json!({ "name": name, "version": version, "peerDependencies": peer_map(peers) }),
        )
    }

    /// Add an entry with no peer dependencies.
    pub fn plain(self, path: &str, version: &str) -> Self {
        self.entry(path, json!({ "version": version }))
    }

    /// Add an entry with arbitrary metadata.
    pub fn entry(mut self, path: &str, meta: Value) -> Self {
        self.packages.insert(path.to_string(), meta);
        self
    }

    pub fn to_json(&self) -> Value {
        json!({
            "name": "fixture-app",
            "version": "0.0.0",
            "lockfileVersion": 3,
            "requires": true,
            "packages": Value::Object(self.packages.clone()),
        })
    }

    pub fn to_text(&self) -> String {
        pretty(&self.to_json())
    }
}

impl Default for LockfileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn peer_map(peers: &[(&str, &str)]) -> Value {
    Value::Object(
        peers
            .iter()
            .map(|(k, r)| (k.to_string(), Value::String(r.to_string())))
            .collect(),
    )
}

fn pretty(value: &Value) -> String {
    let mut text = serde_json::to_string_pretty(value).expect("serialize fixture json");
    text.push('\n');
    text
}

/// `package.json` text declaring the given runtime dependencies.
pub fn manifest_text(dependencies: &[&str], dev_dependencies: &[&str]) -> String {
    let section = |names: &[&str]| -> Value {
        Value::Object(
            names
                .iter()
                .map(|n| (n.to_string(), Value::String("*".to_string())))
                .collect(),
        )
    };
    pretty(&json!({
        "name": "fixture-app",
        "private": true,
        "dependencies": section(dependencies),
        "devDependencies": section(dev_dependencies),
    }))
}

/// Allowlist document text with keys for a single major.
pub fn allowlist_text(major: u64, keys: &[&str]) -> String {
    let mut doc = Map::new();
    doc.insert(major.to_string(), json!(keys));
    pretty(&Value::Object(doc))
}

/// A temporary npm project on disk.
#[derive(Debug)]
pub struct ProjectFixture {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl ProjectFixture {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("temp dir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf8 temp path");
        Self { _dir: dir, root }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub fn path(&self, rel: &str) -> Utf8PathBuf {
        self.root.join(rel)
    }

    /// Write `contents` at `rel`, creating parent directories.
    pub fn write(self, rel: &str, contents: &str) -> Self {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(&path, contents).expect("write fixture file");
        self
    }

    pub fn with_manifest(self, dependencies: &[&str]) -> Self {
        self.write("package.json", &manifest_text(dependencies, &[]))
    }

    pub fn with_lockfile(self, lockfile: &LockfileBuilder) -> Self {
        self.write("package-lock.json", &lockfile.to_text())
    }

    pub fn with_allowlist(self, major: u64, keys: &[&str]) -> Self {
        self.write(DEFAULT_ALLOWLIST, &allowlist_text(major, keys))
    }
}

impl Default for ProjectFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Replace the fixture root in tool output so expectations are path-independent.
pub fn redact_root(text: &str, root: &Utf8Path) -> String {
    text.replace(root.as_str(), "<ROOT>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lockfile_builder_shapes_entries() {
        let lock = LockfileBuilder::new()
            .package("node_modules/a", "1.0.0", &[("react", "^16.8.0")])
            .named("node_modules/alias", "real", "2.0.0", &[])
            .plain("node_modules/b", "3.0.0")
            .to_json();

        let packages = &lock["packages"];
        assert_eq!(packages[""]["name"], "fixture-app");
        assert_eq!(packages["node_modules/a"]["peerDependencies"]["react"], "^16.8.0");
        assert_eq!(packages["node_modules/alias"]["name"], "real");
        assert!(packages["node_modules/b"].get("peerDependencies").is_none());
        assert_eq!(lock["lockfileVersion"], 3);
    }

    #[test]
    fn allowlist_text_is_keyed_by_major() {
        let value: Value =
            serde_json::from_str(&allowlist_text(17, &["a@1.0.0::react=^16.8.0"])).unwrap();
        assert_eq!(value["17"][0], "a@1.0.0::react=^16.8.0");
    }

    #[test]
    fn fixture_writes_files_and_redacts() {
        let fixture = ProjectFixture::new()
            .with_manifest(&["a"])
            .with_allowlist(18, &[]);
        assert!(fixture.path("package.json").is_file());
        assert!(fixture.path(DEFAULT_ALLOWLIST).is_file());

        let msg = format!("lockfile not found at {}", fixture.path("package-lock.json"));
        assert_eq!(
            redact_root(&msg, fixture.root()),
            "lockfile not found at <ROOT>/package-lock.json"
        );
    }
}
