use super::absorb_store;
use crate::ports::{ArpTableReader, SnapshotStore};
use mwcheck_domain::{DomainError, SnapshotTable};
use std::sync::Arc;
use tracing::info;

/// Captures the ARP table into a fresh precheck snapshot.
///
/// Re-running against an already populated table trips the snapshot's
/// composite key and fails the phase: one precheck table holds exactly
/// one capture.
pub struct PrecheckArpUseCase {
    arp_reader: Arc<dyn ArpTableReader>,
    store: Arc<dyn SnapshotStore>,
}

impl PrecheckArpUseCase {
    pub fn new(arp_reader: Arc<dyn ArpTableReader>, store: Arc<dyn SnapshotStore>) -> Self {
        Self { arp_reader, store }
    }

    pub async fn execute(&self, table: SnapshotTable) -> Result<usize, DomainError> {
        absorb_store(
            self.store.create_precheck_table(&table).await,
            "create precheck table",
        )?;

        let entries = self.arp_reader.fetch_arp_table().await?;
        info!(table = %table, entries = entries.len(), "ARP table fetched");

        absorb_store(
            self.store.insert_precheck_entries(&table, &entries).await,
            "insert precheck entries",
        )?;

        Ok(entries.len())
    }
}
