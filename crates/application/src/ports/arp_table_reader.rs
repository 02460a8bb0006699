use async_trait::async_trait;
use mwcheck_domain::{ArpEntry, DomainError};

/// Fetches the current address-resolution table from the device and
/// returns it as normalized entries.
#[async_trait]
pub trait ArpTableReader: Send + Sync {
    async fn fetch_arp_table(&self) -> Result<Vec<ArpEntry>, DomainError>;
}
