use camino::Utf8PathBuf;
use std::fmt;

/// Which input file an error is about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Lockfile,
    Manifest,
    Allowlist,
}

impl InputKind {
    pub fn as_str(self) -> &'static str {
        match self {
            InputKind::Lockfile => "lockfile",
            InputKind::Manifest => "manifest",
            InputKind::Allowlist => "allowlist",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("{kind} not found at {path}")]
    NotFound { kind: InputKind, path: Utf8PathBuf },

    #[error("failed to read {kind} at {path}")]
    Read {
        kind: InputKind,
        path: Utf8PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {kind} JSON at {path}")]
    Malformed {
        kind: InputKind,
        path: Utf8PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid {kind} at {path}: {reason}")]
    Invalid {
        kind: InputKind,
        path: Utf8PathBuf,
        reason: String,
    },
}

impl InputError {
    pub fn kind(&self) -> InputKind {
        match self {
            InputError::NotFound { kind, .. }
            | InputError::Read { kind, .. }
            | InputError::Malformed { kind, .. }
            | InputError::Invalid { kind, .. } => *kind,
        }
    }

    pub(crate) fn from_parse(kind: InputKind, path: &camino::Utf8Path, err: ParseError) -> Self {
        match err {
            ParseError::Json(source) => InputError::Malformed {
                kind,
                path: path.to_path_buf(),
                source,
            },
            ParseError::Shape(reason) => InputError::Invalid {
                kind,
                path: path.to_path_buf(),
                reason,
            },
        }
    }
}

/// Parse failure without file context; the loaders attach kind and path.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Shape(String),
}
