//! Stable identifiers: lockfile layout markers, placeholder names and default input paths.

// Lockfile layout
pub const NODE_MODULES_PREFIX: &str = "node_modules/";
pub const NESTED_NODE_MODULES: &str = "/node_modules/";

// Placeholders used when the lockfile leaves a field out
pub const ROOT_PACKAGE_NAME: &str = "(root)";
pub const UNKNOWN_VERSION: &str = "(unknown)";

// Default inputs, relative to the working directory
pub const DEFAULT_LOCKFILE: &str = "package-lock.json";
pub const DEFAULT_MANIFEST: &str = "package.json";
pub const DEFAULT_ALLOWLIST: &str = "docs/react-peer-allowlist.json";

// Separators used by signatures and allowlist keys
pub const SIGNATURE_SEPARATOR: &str = ", ";
pub const ALLOWLIST_KEY_SEPARATOR: &str = "::";
