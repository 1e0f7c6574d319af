//! The `check` use case: load inputs, evaluate peer ranges, produce a report.

use camino::{Utf8Path, Utf8PathBuf};
use peerguard_domain::allowlist::Allowlist;
use peerguard_domain::policy::PeerPolicy;
use peerguard_domain::report::{DomainReport, Verdict};
use peerguard_repo::{InputError, InputKind};
use peerguard_settings::Overrides;

/// Input for the check use case. Relative paths resolve against the working directory.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    pub lockfile_path: &'a Utf8Path,
    pub manifest_path: &'a Utf8Path,
    /// A missing allowlist file is treated as an empty allowlist.
    pub allowlist_path: &'a Utf8Path,
    pub overrides: Overrides,
}

#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: DomainReport,
    /// The resolved policy used.
    pub policy: PeerPolicy,
    pub allowlist_path: Utf8PathBuf,
}

pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let policy = peerguard_settings::resolve_policy(input.overrides.clone())?;

    // Input errors already name the file kind and path.
    let lockfile = peerguard_repo::load_lockfile(input.lockfile_path)?;
    let manifest = peerguard_repo::load_manifest(input.manifest_path)?;
    let allowlist = load_allowlist(input.allowlist_path, policy.target_major)?;
    tracing::debug!(
        path = %input.allowlist_path,
        keys = allowlist.len(),
        target_major = policy.target_major,
        "loaded allowlist"
    );

    let report = peerguard_domain::evaluate(&lockfile, &manifest, &allowlist, &policy);
    tracing::debug!(
        verdict = ?report.verdict,
        blocked = report.blocked_total,
        allowed = report.allowed.len(),
        stale = report.stale.len(),
        "evaluated lockfile"
    );

    Ok(CheckOutput {
        report,
        policy,
        allowlist_path: input.allowlist_path.to_path_buf(),
    })
}

fn load_allowlist(path: &Utf8Path, target_major: u64) -> Result<Allowlist, InputError> {
    let kind = InputKind::Allowlist;
    let Some(text) = peerguard_repo::read_optional(kind, path)? else {
        return Ok(Allowlist::default());
    };
    peerguard_settings::parse_allowlist_json(&text, target_major).map_err(|source| {
        InputError::Malformed {
            kind,
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Map verdict to exit code: 0 = pass, 1 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 1,
    }
}
