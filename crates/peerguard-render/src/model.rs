#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdict {
    Pass,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableDirectRow {
    /// `name@version`
    pub label: String,
    pub path: String,
    pub signature: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableTransitiveRow {
    pub label: String,
    pub signature: String,
    pub occurrences: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub verdict: RenderableVerdict,
    pub framework: String,
    pub target_major: u64,
    pub entries_scanned: usize,
    /// As given on the command line; quoted back in the pass summary.
    pub allowlist_path: String,
    pub allowed_count: usize,
    pub blocked_total: usize,
    pub direct: Vec<RenderableDirectRow>,
    pub transitive: Vec<RenderableTransitiveRow>,
    pub stale: Vec<String>,
}
