use crate::CheckOutput;
use peerguard_domain::report::{DomainReport, Verdict};
use peerguard_render::{
    RenderableDirectRow, RenderableReport, RenderableTransitiveRow, RenderableVerdict,
};

pub fn to_renderable(report: &DomainReport, allowlist_path: &str) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdict::Pass,
            Verdict::Fail => RenderableVerdict::Fail,
        },
        framework: report.framework.clone(),
        target_major: report.target_major,
        entries_scanned: report.entries_scanned,
        allowlist_path: allowlist_path.to_string(),
        allowed_count: report.allowed_count(),
        blocked_total: report.blocked_total,
        direct: report
            .blocked_direct
            .iter()
            .map(|c| RenderableDirectRow {
                label: c.entry.label(),
                path: c.entry.path.to_string(),
                signature: c.signature.to_string(),
            })
            .collect(),
        transitive: report
            .blocked_transitive
            .iter()
            .map(|g| RenderableTransitiveRow {
                label: g.label(),
                signature: g.signature.to_string(),
                occurrences: g.occurrences,
            })
            .collect(),
        stale: report.stale.clone(),
    }
}

/// Render a finished check as report text.
pub fn render_check(output: &CheckOutput) -> String {
    peerguard_render::render_text(&to_renderable(
        &output.report,
        output.allowlist_path.as_str(),
    ))
}
