#![allow(dead_code)]

use async_trait::async_trait;
use mwcheck_application::ports::{
    ArpTableReader, ReachabilityProbe, ReportWriter, SnapshotStore,
};
use mwcheck_domain::{
    AddressFilter, ArpEntry, DomainError, PhaseCounts, ProbeOutcome, RegressionRow,
    SnapshotTable,
};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

/// A plausible echo reply from the given host.
pub fn echo_reply(host: &str) -> String {
    format!(
        "PING {host} ({host}) 56(84) bytes of data.\n\
         64 bytes from {host}: icmp_seq=1 ttl=64 time=0.512 ms\n"
    )
}

#[derive(Default)]
pub struct MockProbe {
    outputs: Mutex<HashMap<String, Result<String, DomainError>>>,
    pub calls: Mutex<Vec<String>>,
}

impl MockProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reachable(self, host: &str) -> Self {
        self.outputs
            .lock()
            .unwrap()
            .insert(host.to_string(), Ok(echo_reply(host)));
        self
    }

    pub fn unreachable(self, host: &str) -> Self {
        self.outputs
            .lock()
            .unwrap()
            .insert(host.to_string(), Ok(String::new()));
        self
    }

    pub fn failing(self, host: &str) -> Self {
        self.outputs.lock().unwrap().insert(
            host.to_string(),
            Err(DomainError::Probe("probe process died".to_string())),
        );
        self
    }
}

#[async_trait]
impl ReachabilityProbe for MockProbe {
    async fn probe(&self, address: &str) -> Result<String, DomainError> {
        self.calls.lock().unwrap().push(address.to_string());
        self.outputs
            .lock()
            .unwrap()
            .get(address)
            .cloned()
            .unwrap_or_else(|| Ok(String::new()))
    }
}

pub struct MockArpReader {
    entries: Mutex<Result<Vec<ArpEntry>, DomainError>>,
}

impl MockArpReader {
    pub fn with_entries(entries: Vec<ArpEntry>) -> Self {
        Self {
            entries: Mutex::new(Ok(entries)),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            entries: Mutex::new(Err(error)),
        }
    }
}

#[async_trait]
impl ArpTableReader for MockArpReader {
    async fn fetch_arp_table(&self) -> Result<Vec<ArpEntry>, DomainError> {
        self.entries.lock().unwrap().clone()
    }
}

/// In-memory stand-in for the snapshot store. Captures every call and
/// serves configurable canned results.
#[derive(Default)]
pub struct MockSnapshotStore {
    pub created_precheck: Mutex<Vec<SnapshotTable>>,
    pub created_postcheck: Mutex<Vec<SnapshotTable>>,
    pub inserted: Mutex<Vec<(SnapshotTable, Vec<ArpEntry>)>>,
    pub upserted: Mutex<Vec<(SnapshotTable, Vec<ArpEntry>)>>,
    pub select_calls: Mutex<Vec<(SnapshotTable, Vec<AddressFilter>)>>,
    pub precheck_outcomes: Mutex<Vec<(SnapshotTable, Vec<ProbeOutcome>)>>,
    pub postcheck_outcomes: Mutex<Vec<(SnapshotTable, Vec<ProbeOutcome>)>>,

    pub addresses: Mutex<Vec<String>>,
    pub regressions: Mutex<Vec<RegressionRow>>,
    pub counts: Mutex<HashMap<String, PhaseCounts>>,
    pub insert_error: Mutex<Option<DomainError>>,
    pub select_error: Mutex<Option<DomainError>>,
    pub correlate_error: Mutex<Option<DomainError>>,
}

impl MockSnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn serve_addresses(&self, addresses: &[&str]) {
        *self.addresses.lock().unwrap() = addresses.iter().map(|a| a.to_string()).collect();
    }

    pub fn serve_regressions(&self, rows: Vec<RegressionRow>) {
        *self.regressions.lock().unwrap() = rows;
    }

    pub fn serve_counts(&self, table: &SnapshotTable, counts: PhaseCounts) {
        self.counts
            .lock()
            .unwrap()
            .insert(table.qualified_name(), counts);
    }

    pub fn fail_insert(&self, error: DomainError) {
        *self.insert_error.lock().unwrap() = Some(error);
    }

    pub fn fail_select(&self, error: DomainError) {
        *self.select_error.lock().unwrap() = Some(error);
    }

    pub fn fail_correlate(&self, error: DomainError) {
        *self.correlate_error.lock().unwrap() = Some(error);
    }
}

#[async_trait]
impl SnapshotStore for MockSnapshotStore {
    async fn create_precheck_table(&self, table: &SnapshotTable) -> Result<(), DomainError> {
        self.created_precheck.lock().unwrap().push(*table);
        Ok(())
    }

    async fn create_postcheck_table(&self, table: &SnapshotTable) -> Result<(), DomainError> {
        self.created_postcheck.lock().unwrap().push(*table);
        Ok(())
    }

    async fn insert_precheck_entries(
        &self,
        table: &SnapshotTable,
        entries: &[ArpEntry],
    ) -> Result<(), DomainError> {
        if let Some(error) = self.insert_error.lock().unwrap().clone() {
            return Err(error);
        }
        self.inserted
            .lock()
            .unwrap()
            .push((*table, entries.to_vec()));
        Ok(())
    }

    async fn upsert_postcheck_entries(
        &self,
        table: &SnapshotTable,
        entries: &[ArpEntry],
    ) -> Result<(), DomainError> {
        self.upserted
            .lock()
            .unwrap()
            .push((*table, entries.to_vec()));
        Ok(())
    }

    async fn select_addresses(
        &self,
        table: &SnapshotTable,
        filters: &[AddressFilter],
    ) -> Result<Vec<String>, DomainError> {
        self.select_calls
            .lock()
            .unwrap()
            .push((*table, filters.to_vec()));
        if let Some(error) = self.select_error.lock().unwrap().clone() {
            return Err(error);
        }
        Ok(self.addresses.lock().unwrap().clone())
    }

    async fn record_precheck_reachability(
        &self,
        table: &SnapshotTable,
        outcomes: &[ProbeOutcome],
    ) -> Result<(), DomainError> {
        self.precheck_outcomes
            .lock()
            .unwrap()
            .push((*table, outcomes.to_vec()));
        Ok(())
    }

    async fn record_postcheck_reachability(
        &self,
        table: &SnapshotTable,
        outcomes: &[ProbeOutcome],
    ) -> Result<(), DomainError> {
        self.postcheck_outcomes
            .lock()
            .unwrap()
            .push((*table, outcomes.to_vec()));
        Ok(())
    }

    async fn correlate_regressions(
        &self,
        _precheck: &SnapshotTable,
        _postcheck: &SnapshotTable,
    ) -> Result<Vec<RegressionRow>, DomainError> {
        if let Some(error) = self.correlate_error.lock().unwrap().clone() {
            return Err(error);
        }
        Ok(self.regressions.lock().unwrap().clone())
    }

    async fn counts_by_outcome(
        &self,
        table: &SnapshotTable,
    ) -> Result<PhaseCounts, DomainError> {
        Ok(self
            .counts
            .lock()
            .unwrap()
            .get(&table.qualified_name())
            .copied()
            .unwrap_or_default())
    }
}

#[derive(Default)]
pub struct MockReportWriter {
    pub written: Mutex<Vec<(String, Vec<RegressionRow>)>>,
}

#[async_trait]
impl ReportWriter for MockReportWriter {
    async fn write(
        &self,
        stem: &str,
        rows: &[RegressionRow],
    ) -> Result<PathBuf, DomainError> {
        self.written
            .lock()
            .unwrap()
            .push((stem.to_string(), rows.to_vec()));
        Ok(PathBuf::from(format!("{stem}.csv")))
    }
}

pub fn regression_row(address: &str) -> RegressionRow {
    RegressionRow {
        pre_address: address.to_string(),
        pre_mac: "aa:bb:cc:dd:ee:01".to_string(),
        pre_bridge: "irb.5".to_string(),
        pre_logical: "ge-0/0/1.100".to_string(),
        pre_reachability: "OK".to_string(),
        post_address: Some(address.to_string()),
        post_mac: Some("aa:bb:cc:dd:ee:01".to_string()),
        post_bridge: Some("irb.5".to_string()),
        post_logical: Some("ge-0/0/1.100".to_string()),
        post_reachability: "FAILED".to_string(),
    }
}
