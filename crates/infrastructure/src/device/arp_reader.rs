use super::{ArpResponseParser, DeviceQuery, NetconfSession, SessionSettings};
use async_trait::async_trait;
use mwcheck_application::ports::ArpTableReader;
use mwcheck_domain::{ArpEntry, DomainError};
use tracing::debug;

/// Fetches the ARP table from a device over NETCONF and normalizes the
/// reply.
pub struct NetconfArpReader {
    session: NetconfSession,
}

impl NetconfArpReader {
    pub fn new(settings: SessionSettings) -> Self {
        Self {
            session: NetconfSession::new(settings),
        }
    }
}

#[async_trait]
impl ArpTableReader for NetconfArpReader {
    async fn fetch_arp_table(&self) -> Result<Vec<ArpEntry>, DomainError> {
        let responses = self.session.fetch(&[DeviceQuery::ArpTableNoResolve]).await?;

        let mut entries = Vec::new();
        for (query, xml) in &responses {
            match query {
                DeviceQuery::ArpTableNoResolve => {
                    entries.extend(ArpResponseParser::parse(xml)?);
                }
            }
        }

        debug!(entries = entries.len(), "ARP table parsed");
        Ok(entries)
    }
}
