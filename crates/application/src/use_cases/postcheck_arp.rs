use super::absorb_store;
use crate::ports::{ArpTableReader, SnapshotStore};
use mwcheck_domain::{DomainError, SnapshotTable};
use std::sync::Arc;
use tracing::info;

/// Merges a post-window ARP capture into the postcheck snapshot.
///
/// An address may have moved to a new MAC or interface during the
/// window, so existing rows are updated in place and only genuinely new
/// addresses are inserted. Safe to repeat.
pub struct PostcheckArpUseCase {
    arp_reader: Arc<dyn ArpTableReader>,
    store: Arc<dyn SnapshotStore>,
}

impl PostcheckArpUseCase {
    pub fn new(arp_reader: Arc<dyn ArpTableReader>, store: Arc<dyn SnapshotStore>) -> Self {
        Self { arp_reader, store }
    }

    pub async fn execute(&self, table: SnapshotTable) -> Result<usize, DomainError> {
        absorb_store(
            self.store.create_postcheck_table(&table).await,
            "create postcheck table",
        )?;

        let entries = self.arp_reader.fetch_arp_table().await?;
        info!(table = %table, entries = entries.len(), "ARP table fetched");

        absorb_store(
            self.store.upsert_postcheck_entries(&table, &entries).await,
            "upsert postcheck entries",
        )?;

        Ok(entries.len())
    }
}
