use async_trait::async_trait;
use mwcheck_application::ports::ReachabilityProbe;
use mwcheck_domain::{config::ProbeConfig, DomainError};
use tokio::process::Command;
use tracing::debug;

/// Shells out to the system `ping`: a small fixed packet count with a
/// short overall deadline. The raw output is returned untouched; the
/// caller decides what counts as success.
pub struct SystemPingProbe {
    packet_count: u32,
    deadline_secs: u32,
}

impl SystemPingProbe {
    pub fn new(config: &ProbeConfig) -> Self {
        Self {
            packet_count: config.packet_count,
            deadline_secs: config.deadline_secs,
        }
    }
}

#[async_trait]
impl ReachabilityProbe for SystemPingProbe {
    async fn probe(&self, address: &str) -> Result<String, DomainError> {
        debug!(address, "pinging host");

        let output = Command::new("ping")
            .arg("-c")
            .arg(self.packet_count.to_string())
            .arg("-w")
            .arg(self.deadline_secs.to_string())
            .arg(address)
            .output()
            .await
            .map_err(|e| DomainError::Probe(format!("ping {address}: {e}")))?;

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
