use super::absorb_store;
use crate::ports::SnapshotStore;
use crate::services::HostProber;
use mwcheck_domain::{AddressFilter, DomainError, FilterField, SnapshotTable};
use std::sync::Arc;
use tracing::info;

/// Probes the hosts discovered by the precheck ARP capture and
/// back-fills their verdicts into the same snapshot rows.
pub struct PrecheckPingUseCase {
    store: Arc<dyn SnapshotStore>,
    prober: Arc<HostProber>,
}

impl PrecheckPingUseCase {
    pub fn new(store: Arc<dyn SnapshotStore>, prober: Arc<HostProber>) -> Self {
        Self { store, prober }
    }

    /// `irb_pattern` / `logical_pattern` narrow the probed hosts by
    /// interface; a trailing `*` requests substring matching.
    pub async fn execute(
        &self,
        table: SnapshotTable,
        irb_pattern: Option<&str>,
        logical_pattern: Option<&str>,
    ) -> Result<usize, DomainError> {
        let mut filters = Vec::new();
        if let Some(f) = irb_pattern
            .and_then(|p| AddressFilter::from_pattern(FilterField::BridgeInterface, p))
        {
            filters.push(f);
        }
        if let Some(f) = logical_pattern
            .and_then(|p| AddressFilter::from_pattern(FilterField::LogicalInterface, p))
        {
            filters.push(f);
        }

        let hosts = absorb_store(
            self.store.select_addresses(&table, &filters).await,
            "select precheck addresses",
        )?;
        if hosts.is_empty() {
            info!(table = %table, "no hosts to probe");
            return Ok(0);
        }

        let outcomes = self.prober.probe_hosts(&hosts).await;
        absorb_store(
            self.store
                .record_precheck_reachability(&table, &outcomes)
                .await,
            "record precheck reachability",
        )?;

        Ok(outcomes.len())
    }
}
