use crate::{RenderableReport, RenderableVerdict};

/// Render the report as plain text. Every line, including the last, ends with `\n`.
pub fn render_text(report: &RenderableReport) -> String {
    match report.verdict {
        RenderableVerdict::Pass => render_pass(report),
        RenderableVerdict::Fail => render_fail(report),
    }
}

fn render_pass(report: &RenderableReport) -> String {
    let fw = &report.framework;
    let mut out = String::new();

    out.push_str(&format!(
        "PASS: all non-allowlisted lockfile {fw} peer ranges support {fw} {} (checked {} package entries).\n",
        report.target_major, report.entries_scanned
    ));
    if report.allowed_count > 0 {
        out.push_str(&format!(
            "INFO: {} unsupported entries are allowlisted in {}.\n",
            report.allowed_count, report.allowlist_path
        ));
    }
    if !report.stale.is_empty() {
        out.push_str(&format!(
            "INFO: {} allowlist entries are stale and can be removed.\n",
            report.stale.len()
        ));
    }
    out
}

fn render_fail(report: &RenderableReport) -> String {
    let fw = &report.framework;
    let mut out = String::new();

    out.push_str(&format!(
        "FAIL: found {} non-allowlisted package entries with {fw} peer ranges excluding {fw} {}.\n",
        report.blocked_total, report.target_major
    ));
    if report.allowed_count > 0 {
        out.push_str(&format!(
            "INFO: {} additional unsupported entries are allowlisted.\n",
            report.allowed_count
        ));
    }

    if !report.direct.is_empty() {
        out.push_str(&format!("\nDirect dependencies ({}):\n", report.direct.len()));
        for row in &report.direct {
            out.push_str(&format!("- {} ({}) -> {}\n", row.label, row.path, row.signature));
        }
    }

    if !report.transitive.is_empty() {
        out.push_str(&format!(
            "\nTransitive dependencies ({} unique signatures):\n",
            report.transitive.len()
        ));
        for row in &report.transitive {
            out.push_str(&format!(
                "- {} -> {} (occurrences: {})\n",
                row.label, row.signature, row.occurrences
            ));
        }
    }

    if !report.stale.is_empty() {
        out.push_str(&format!("\nStale allowlist entries ({}):\n", report.stale.len()));
        for key in &report.stale {
            out.push_str(&format!("- {key}\n"));
        }
    }
    out
}
