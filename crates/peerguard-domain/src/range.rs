//! Peer range normalization and the "does this range allow major N" check.
//!
//! Ranges follow npm's loose grammar with pre-releases included: partial versions desugar to
//! `-0` bounds, comparators within a `||` arm are intersected, and tokens that are not
//! comparators are skipped.

use crate::interval::{Interval, lowest, release};
use node_semver::{Identifier, Version};

const OPERATOR_CHARS: [char; 5] = ['<', '>', '=', '~', '^'];

/// Operator tokens that may stand apart from their version (`>= v16`).
const OPERATORS: [&str; 8] = [">=", "<=", ">", "<", "=", "~>", "~", "^"];

/// Clean a raw peer range into the form the range parser accepts.
///
/// - non-breaking spaces and commas become spaces
/// - whitespace runs collapse to one space, ends are trimmed
/// - an operator separated from its version (`>= 16`) is rejoined (`>=16`)
///
/// Normalization is idempotent.
pub fn normalize_range(raw: &str) -> String {
    let spaced: String = raw
        .chars()
        .map(|c| if c == '\u{a0}' || c == ',' { ' ' } else { c })
        .collect();
    let collapsed = spaced.split_whitespace().collect::<Vec<_>>().join(" ");

    let chars: Vec<char> = collapsed.chars().collect();
    let mut out = String::with_capacity(collapsed.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == ' ' && i > 0 {
            let before = chars[i - 1];
            let after = chars.get(i + 1).copied();
            if OPERATOR_CHARS.contains(&before) && after.is_some_and(|a| a.is_ascii_digit()) {
                continue;
            }
        }
        out.push(c);
    }
    out
}

/// `>=major.0.0 <(major + 1).0.0`
pub fn major_window(major: u64) -> Interval {
    match major.checked_add(1) {
        Some(next) => Interval::between(release(major, 0, 0), release(next, 0, 0)),
        None => Interval::at_least(release(major, 0, 0)),
    }
}

/// One interval per `||` arm of a normalized range.
///
/// An empty arm admits everything. Arms without a single comparator are dropped, and `None`
/// means no arm survived.
pub fn parse_range(normalized: &str) -> Option<Vec<Interval>> {
    let arms: Vec<Interval> = normalized
        .split("||")
        .filter_map(|arm| comparator_set(arm.trim()))
        .collect();
    if arms.is_empty() { None } else { Some(arms) }
}

/// True when `range` admits at least one version in the `major` window.
///
/// Absent or blank ranges impose no constraint. Ranges that do not parse are treated as
/// incompatible.
pub fn range_supports_major(range: Option<&str>, major: u64) -> bool {
    let Some(range) = range else { return true };
    if range.trim().is_empty() {
        return true;
    }

    let normalized = normalize_range(range);
    let Some(arms) = parse_range(&normalized) else {
        tracing::trace!(range, normalized = %normalized, "unparseable peer range");
        return false;
    };
    let window = major_window(major);
    arms.iter().any(|arm| !arm.intersect(&window).is_empty())
}

fn comparator_set(arm: &str) -> Option<Interval> {
    if arm.is_empty() {
        return Some(Interval::any());
    }

    let tokens = tokens(arm);
    if let [from, dash, to] = tokens.as_slice()
        && dash == "-"
        && let Some(interval) = hyphen(from, to)
    {
        return Some(interval);
    }

    let comparators: Vec<Interval> = tokens.iter().filter_map(|t| comparator(t)).collect();
    if comparators.is_empty() {
        return None;
    }
    Some(
        comparators
            .iter()
            .fold(Interval::any(), |acc, c| acc.intersect(c)),
    )
}

/// Split an arm on whitespace, gluing a bare operator onto the token after it.
fn tokens(arm: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut pending = String::new();
    for word in arm.split_whitespace() {
        if OPERATORS.contains(&word) {
            pending.push_str(word);
            continue;
        }
        out.push(format!("{pending}{word}"));
        pending.clear();
    }
    if !pending.is_empty() {
        out.push(pending);
    }
    out
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Operator {
    Caret,
    Tilde,
    Eq,
    Gt,
    Gte,
    Lt,
    Lte,
}

fn split_operator(token: &str) -> (Operator, &str) {
    const TABLE: [(&str, Operator); 8] = [
        ("~>", Operator::Tilde),
        ("~", Operator::Tilde),
        ("^", Operator::Caret),
        (">=", Operator::Gte),
        ("<=", Operator::Lte),
        (">", Operator::Gt),
        ("<", Operator::Lt),
        ("=", Operator::Eq),
    ];
    for (prefix, op) in TABLE {
        if let Some(rest) = token.strip_prefix(prefix) {
            return (op, rest);
        }
    }
    (Operator::Eq, token)
}

/// A version with optional wildcard components. A wildcard makes every later part a wildcard.
#[derive(Debug, Default)]
struct Partial {
    major: Option<u64>,
    minor: Option<u64>,
    patch: Option<u64>,
    pre_release: Vec<Identifier>,
}

impl Partial {
    fn parse(text: &str) -> Option<Self> {
        let text = text.trim_start_matches(|c: char| c == 'v' || c == '=');
        let text = text.split_once('+').map_or(text, |(core, _build)| core);
        if text.is_empty() {
            return None;
        }

        let mut parts = text.splitn(3, '.');
        let major = component(parts.next()?)?;
        let minor = match parts.next() {
            Some(text) => component(text)?,
            None => None,
        };
        let mut partial = Partial {
            major,
            minor,
            ..Partial::default()
        };
        if let Some(rest) = parts.next() {
            let (patch, pre_release) = patch_and_pre(rest)?;
            partial.patch = patch;
            partial.pre_release = pre_release;
        }

        if partial.major.is_none() {
            partial.minor = None;
        }
        if partial.minor.is_none() {
            partial.patch = None;
        }
        if partial.patch.is_none() {
            partial.pre_release.clear();
        }
        Some(partial)
    }

    fn version(&self) -> Version {
        Version {
            major: self.major.unwrap_or(0),
            minor: self.minor.unwrap_or(0),
            patch: self.patch.unwrap_or(0),
            build: Vec::new(),
            pre_release: self.pre_release.clone(),
        }
    }
}

/// `Some(None)` for a wildcard, `None` when the text is not a version component.
fn component(text: &str) -> Option<Option<u64>> {
    match text {
        "x" | "X" | "*" => Some(None),
        _ if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) => {
            text.parse().ok().map(Some)
        }
        _ => None,
    }
}

/// Patch number plus a pre-release that may be attached without a dash (`3beta`).
fn patch_and_pre(text: &str) -> Option<(Option<u64>, Vec<Identifier>)> {
    if let Some(wild) = component(text) {
        return Some((wild, Vec::new()));
    }
    let digits = text.find(|c: char| !c.is_ascii_digit()).unwrap_or(text.len());
    if digits == 0 {
        return None;
    }
    let patch = text[..digits].parse().ok()?;
    let tail = &text[digits..];
    let pre = tail.strip_prefix('-').unwrap_or(tail);
    let pre_release = if pre.is_empty() {
        Vec::new()
    } else {
        identifiers(pre)?
    };
    Some((Some(patch), pre_release))
}

fn identifiers(text: &str) -> Option<Vec<Identifier>> {
    text.split('.')
        .map(|part| {
            if part.is_empty() || !part.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
                None
            } else if part.bytes().all(|b| b.is_ascii_digit()) {
                part.parse().ok().map(Identifier::Numeric)
            } else {
                Some(Identifier::AlphaNumeric(part.to_string()))
            }
        })
        .collect()
}

fn comparator(token: &str) -> Option<Interval> {
    let (op, rest) = split_operator(token);
    let partial = Partial::parse(rest)?;
    match op {
        Operator::Caret => caret(&partial),
        Operator::Tilde => tilde(&partial),
        _ => primitive(op, &partial),
    }
}

fn caret(p: &Partial) -> Option<Interval> {
    let Some(major) = p.major else {
        return Some(Interval::any());
    };
    let Some(minor) = p.minor else {
        return Some(Interval::between(
            lowest(major, 0, 0),
            lowest(major.checked_add(1)?, 0, 0),
        ));
    };
    let Some(patch) = p.patch else {
        let upper = if major == 0 {
            lowest(0, minor.checked_add(1)?, 0)
        } else {
            lowest(major.checked_add(1)?, 0, 0)
        };
        return Some(Interval::between(lowest(major, minor, 0), upper));
    };

    let upper = match (major, minor) {
        (0, 0) => lowest(0, 0, patch.checked_add(1)?),
        (0, _) => lowest(0, minor.checked_add(1)?, 0),
        _ => lowest(major.checked_add(1)?, 0, 0),
    };
    let lower = if major == 0 && p.pre_release.is_empty() {
        lowest(major, minor, patch)
    } else {
        p.version()
    };
    Some(Interval::between(lower, upper))
}

fn tilde(p: &Partial) -> Option<Interval> {
    let Some(major) = p.major else {
        return Some(Interval::any());
    };
    let Some(minor) = p.minor else {
        return Some(Interval::between(
            release(major, 0, 0),
            lowest(major.checked_add(1)?, 0, 0),
        ));
    };
    let lower = match p.patch {
        Some(_) => p.version(),
        None => release(major, minor, 0),
    };
    Some(Interval::between(
        lower,
        lowest(major, minor.checked_add(1)?, 0),
    ))
}

/// `=`, `<`, `<=`, `>`, `>=` or a bare version.
fn primitive(op: Operator, p: &Partial) -> Option<Interval> {
    let Some(major) = p.major else {
        return Some(match op {
            Operator::Gt | Operator::Lt => Interval::empty(),
            _ => Interval::any(),
        });
    };

    if p.patch.is_some() {
        let version = p.version();
        return Some(match op {
            Operator::Gt => Interval::above(version),
            Operator::Gte => Interval::at_least(version),
            Operator::Lt => Interval::below(version),
            Operator::Lte => Interval::at_most(version),
            _ => Interval::exact(version),
        });
    }

    // Wildcard patch (and maybe minor): compare against whole release lines.
    let start = lowest(major, p.minor.unwrap_or(0), 0);
    let next = match p.minor {
        Some(minor) => lowest(major, minor.checked_add(1)?, 0),
        None => lowest(major.checked_add(1)?, 0, 0),
    };
    Some(match op {
        Operator::Gte => Interval::at_least(start),
        Operator::Lt => Interval::below(start),
        Operator::Gt => Interval::at_least(next),
        Operator::Lte => Interval::below(next),
        _ => Interval::between(start, next),
    })
}

/// `from - to` with inclusive ends; partial ends widen to their whole release line.
fn hyphen(from: &str, to: &str) -> Option<Interval> {
    let from = Partial::parse(from)?;
    let to = Partial::parse(to)?;

    let lower = match (from.major, from.minor, from.patch) {
        (None, ..) => Interval::any(),
        (Some(major), None, _) => Interval::at_least(lowest(major, 0, 0)),
        (Some(major), Some(minor), None) => Interval::at_least(lowest(major, minor, 0)),
        (Some(major), Some(minor), Some(patch)) => {
            if from.pre_release.is_empty() {
                Interval::at_least(lowest(major, minor, patch))
            } else {
                Interval::at_least(from.version())
            }
        }
    };
    let upper = match (to.major, to.minor, to.patch) {
        (None, ..) => Interval::any(),
        (Some(major), None, _) => Interval::below(lowest(major.checked_add(1)?, 0, 0)),
        (Some(major), Some(minor), None) => {
            Interval::below(lowest(major, minor.checked_add(1)?, 0))
        }
        (Some(major), Some(minor), Some(patch)) => {
            if to.pre_release.is_empty() {
                Interval::below(lowest(major, minor, patch.checked_add(1)?))
            } else {
                Interval::at_most(to.version())
            }
        }
    };
    Some(lower.intersect(&upper))
}
