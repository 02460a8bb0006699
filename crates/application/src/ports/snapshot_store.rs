use async_trait::async_trait;
use mwcheck_domain::{
    AddressFilter, ArpEntry, DomainError, PhaseCounts, ProbeOutcome, RegressionRow,
    SnapshotTable,
};

/// Persistence for point-in-time snapshots of the router's ARP table
/// and host reachability.
///
/// Precheck tables are insert-only: a duplicate
/// `(address, hardware_address, bridge_interface)` key means the same
/// host was recorded twice in one capture and surfaces as
/// [`DomainError::DataIntegrity`]. Postcheck tables hold at most one row
/// per address and tolerate repetition.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Create-if-absent DDL for a precheck snapshot.
    async fn create_precheck_table(&self, table: &SnapshotTable) -> Result<(), DomainError>;

    /// Create-if-absent DDL for a postcheck snapshot.
    async fn create_postcheck_table(&self, table: &SnapshotTable) -> Result<(), DomainError>;

    /// Bulk insert of a precheck capture. A unique-key violation aborts
    /// the whole batch.
    async fn insert_precheck_entries(
        &self,
        table: &SnapshotTable,
        entries: &[ArpEntry],
    ) -> Result<(), DomainError>;

    /// Merge a postcheck capture: update the row matching each address,
    /// or insert when no row claims the address yet. Idempotent.
    async fn upsert_postcheck_entries(
        &self,
        table: &SnapshotTable,
        entries: &[ArpEntry],
    ) -> Result<(), DomainError>;

    /// Distinct addresses in a snapshot, narrowed by zero or more
    /// filters.
    async fn select_addresses(
        &self,
        table: &SnapshotTable,
        filters: &[AddressFilter],
    ) -> Result<Vec<String>, DomainError>;

    /// Back-fill verdicts into precheck rows whose reachability is
    /// still unset. Rows that already carry a verdict are left alone.
    async fn record_precheck_reachability(
        &self,
        table: &SnapshotTable,
        outcomes: &[ProbeOutcome],
    ) -> Result<(), DomainError>;

    /// Record verdicts as fresh postcheck rows, one per address.
    async fn record_postcheck_reachability(
        &self,
        table: &SnapshotTable,
        outcomes: &[ProbeOutcome],
    ) -> Result<(), DomainError>;

    /// Hosts reachable in the precheck snapshot and unreachable in the
    /// postcheck snapshot, with both field sets per row.
    async fn correlate_regressions(
        &self,
        precheck: &SnapshotTable,
        postcheck: &SnapshotTable,
    ) -> Result<Vec<RegressionRow>, DomainError>;

    /// Reachable/unreachable/probed counters for one snapshot.
    async fn counts_by_outcome(
        &self,
        table: &SnapshotTable,
    ) -> Result<PhaseCounts, DomainError>;
}
