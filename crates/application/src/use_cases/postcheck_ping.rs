use super::absorb_store;
use crate::ports::SnapshotStore;
use crate::services::HostProber;
use mwcheck_domain::{
    AddressFilter, DomainError, FilterField, Reachability, SnapshotTable,
};
use std::sync::Arc;
use tracing::info;

/// Re-probes the hosts that were reachable in a precheck snapshot and
/// records the verdicts into a postcheck snapshot.
///
/// Hosts that already failed before the window are intentionally not
/// probed again; only a before-OK host can regress.
pub struct PostcheckPingUseCase {
    store: Arc<dyn SnapshotStore>,
    prober: Arc<HostProber>,
}

impl PostcheckPingUseCase {
    pub fn new(store: Arc<dyn SnapshotStore>, prober: Arc<HostProber>) -> Self {
        Self { store, prober }
    }

    pub async fn execute(
        &self,
        source: SnapshotTable,
        destination: SnapshotTable,
    ) -> Result<usize, DomainError> {
        absorb_store(
            self.store.create_postcheck_table(&destination).await,
            "create postcheck table",
        )?;

        let filters = [AddressFilter::equals(
            FilterField::Reachability,
            Reachability::Reachable.as_str(),
        )];
        let hosts = absorb_store(
            self.store.select_addresses(&source, &filters).await,
            "select reachable precheck addresses",
        )?;
        if hosts.is_empty() {
            info!(source = %source, "no reachable precheck hosts to re-probe");
            return Ok(0);
        }

        let outcomes = self.prober.probe_hosts(&hosts).await;
        absorb_store(
            self.store
                .record_postcheck_reachability(&destination, &outcomes)
                .await,
            "record postcheck reachability",
        )?;

        Ok(outcomes.len())
    }
}
