use crate::ids::{NESTED_NODE_MODULES, NODE_MODULES_PREFIX, ROOT_PACKAGE_NAME};
use std::fmt;

/// A key of the lockfile `packages` map, e.g. `node_modules/@scope/pkg/node_modules/dep`.
///
/// Unlike repo paths, lock paths are never normalized: the raw key is the identity used for
/// ordering, for the `direct` placement test and in the report.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LockPath(String);

impl LockPath {
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The empty key describes the project itself.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Package name implied by the path alone.
    ///
    /// Rules:
    /// - empty path -> `(root)`
    /// - paths outside `node_modules/` (workspace links) are returned unchanged
    /// - otherwise the innermost `node_modules` segment wins; scoped names keep two components
    pub fn package_name(&self) -> String {
        if self.is_root() {
            return ROOT_PACKAGE_NAME.to_string();
        }
        let Some(without_prefix) = self.0.strip_prefix(NODE_MODULES_PREFIX) else {
            return self.0.clone();
        };
        let innermost = without_prefix
            .rsplit(NESTED_NODE_MODULES)
            .next()
            .unwrap_or(without_prefix);

        if innermost.starts_with('@') {
            let mut parts = innermost.split('/');
            return match (parts.next(), parts.next()) {
                (Some(scope), Some(name)) => format!("{scope}/{name}"),
                _ => innermost.to_string(),
            };
        }
        innermost.split('/').next().unwrap_or(innermost).to_string()
    }

    /// True when this path is the hoisted, top-level placement of `name`.
    pub fn is_top_level_of(&self, name: &str) -> bool {
        self.0
            .strip_prefix(NODE_MODULES_PREFIX)
            .is_some_and(|rest| rest == name)
    }
}

impl fmt::Display for LockPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LockPath {
    fn from(value: &str) -> Self {
        LockPath::new(value)
    }
}

impl From<String> for LockPath {
    fn from(value: String) -> Self {
        LockPath::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_path_is_named_root() {
        assert_eq!(LockPath::new("").package_name(), "(root)");
        assert!(LockPath::new("").is_root());
    }

    #[test]
    fn paths_outside_node_modules_are_unchanged() {
        assert_eq!(
            LockPath::new("packages/ui").package_name(),
            "packages/ui"
        );
    }

    #[test]
    fn top_level_and_nested_names() {
        assert_eq!(LockPath::new("node_modules/a").package_name(), "a");
        assert_eq!(
            LockPath::new("node_modules/a/node_modules/b").package_name(),
            "b"
        );
        assert_eq!(
            LockPath::new("node_modules/a/node_modules/b/node_modules/c").package_name(),
            "c"
        );
    }

    #[test]
    fn scoped_names_keep_scope() {
        assert_eq!(
            LockPath::new("node_modules/@mui/material").package_name(),
            "@mui/material"
        );
        assert_eq!(
            LockPath::new("node_modules/x/node_modules/@emotion/react").package_name(),
            "@emotion/react"
        );
        assert_eq!(LockPath::new("node_modules/@lonely").package_name(), "@lonely");
    }

    #[test]
    fn top_level_placement() {
        assert!(LockPath::new("node_modules/a").is_top_level_of("a"));
        assert!(LockPath::new("node_modules/@s/a").is_top_level_of("@s/a"));
        assert!(!LockPath::new("node_modules/x/node_modules/a").is_top_level_of("a"));
        assert!(!LockPath::new("a").is_top_level_of("a"));
    }
}
