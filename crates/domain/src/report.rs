use serde::Serialize;

/// One host that was reachable before the window and unreachable after.
///
/// Field order here is the column order of the CSV artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegressionRow {
    pub pre_address: String,
    pub pre_mac: String,
    pub pre_bridge: String,
    pub pre_logical: String,
    pub pre_reachability: String,
    pub post_address: Option<String>,
    pub post_mac: Option<String>,
    pub post_bridge: Option<String>,
    pub post_logical: Option<String>,
    pub post_reachability: String,
}

/// Probe counters for one snapshot table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhaseCounts {
    pub reachable: u64,
    pub unreachable: u64,
    /// Rows with any recorded verdict.
    pub probed: u64,
}

/// Everything the report phase computes for one snapshot pair.
#[derive(Debug, Clone, Default)]
pub struct ReportSummary {
    pub precheck: PhaseCounts,
    pub postcheck: PhaseCounts,
    pub regressions: Vec<RegressionRow>,
}
