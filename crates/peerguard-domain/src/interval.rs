//! Contiguous version intervals ordered by semver precedence.

use node_semver::{Identifier, Version};
use std::cmp::Ordering;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Endpoint {
    version: Version,
    inclusive: bool,
}

/// A contiguous run of versions. Missing ends are unbounded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Interval {
    lower: Option<Endpoint>,
    upper: Option<Endpoint>,
}

impl Interval {
    pub fn any() -> Self {
        Self::default()
    }

    /// Admits nothing: everything below the lowest possible version.
    pub fn empty() -> Self {
        Self::below(lowest(0, 0, 0))
    }

    pub fn at_least(version: Version) -> Self {
        Self {
            lower: Some(Endpoint {
                version,
                inclusive: true,
            }),
            upper: None,
        }
    }

    pub fn above(version: Version) -> Self {
        Self {
            lower: Some(Endpoint {
                version,
                inclusive: false,
            }),
            upper: None,
        }
    }

    pub fn below(version: Version) -> Self {
        Self {
            lower: None,
            upper: Some(Endpoint {
                version,
                inclusive: false,
            }),
        }
    }

    pub fn at_most(version: Version) -> Self {
        Self {
            lower: None,
            upper: Some(Endpoint {
                version,
                inclusive: true,
            }),
        }
    }

    pub fn exact(version: Version) -> Self {
        Self::at_least(version.clone()).intersect(&Self::at_most(version))
    }

    /// `[lower, upper)`
    pub fn between(lower: Version, upper: Version) -> Self {
        Self::at_least(lower).intersect(&Self::below(upper))
    }

    pub fn intersect(&self, other: &Self) -> Self {
        Self {
            lower: tighter(self.lower.as_ref(), other.lower.as_ref(), Ordering::Greater),
            upper: tighter(self.upper.as_ref(), other.upper.as_ref(), Ordering::Less),
        }
    }

    pub fn is_empty(&self) -> bool {
        let Some(upper) = &self.upper else {
            return false;
        };
        let floor = Endpoint {
            version: lowest(0, 0, 0),
            inclusive: true,
        };
        let lower = self.lower.as_ref().unwrap_or(&floor);
        match lower.version.cmp(&upper.version) {
            Ordering::Less => false,
            Ordering::Equal => !(lower.inclusive && upper.inclusive),
            Ordering::Greater => true,
        }
    }

    pub fn contains(&self, version: &Version) -> bool {
        let above_lower = self.lower.as_ref().is_none_or(|l| match l.version.cmp(version) {
            Ordering::Less => true,
            Ordering::Equal => l.inclusive,
            Ordering::Greater => false,
        });
        let below_upper = self.upper.as_ref().is_none_or(|u| match version.cmp(&u.version) {
            Ordering::Less => true,
            Ordering::Equal => u.inclusive,
            Ordering::Greater => false,
        });
        above_lower && below_upper
    }
}

/// Pick the more restrictive endpoint. `wins` is the ordering that marks `a` as tighter; on equal
/// versions an exclusive endpoint is tighter than an inclusive one.
fn tighter(a: Option<&Endpoint>, b: Option<&Endpoint>, wins: Ordering) -> Option<Endpoint> {
    match (a, b) {
        (None, None) => None,
        (Some(x), None) | (None, Some(x)) => Some(x.clone()),
        (Some(a), Some(b)) => {
            let a_wins = match a.version.cmp(&b.version) {
                Ordering::Equal => !a.inclusive,
                ord => ord == wins,
            };
            Some(if a_wins { a.clone() } else { b.clone() })
        }
    }
}

/// `major.minor.patch` with no pre-release.
pub fn release(major: u64, minor: u64, patch: u64) -> Version {
    Version::from((major, minor, patch))
}

/// `major.minor.patch-0`, the lowest version with that core.
pub fn lowest(major: u64, minor: u64, patch: u64) -> Version {
    Version {
        major,
        minor,
        patch,
        build: Vec::new(),
        pre_release: vec![Identifier::Numeric(0)],
    }
}
