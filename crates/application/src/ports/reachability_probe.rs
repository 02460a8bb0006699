use async_trait::async_trait;
use mwcheck_domain::DomainError;

/// Issues one liveness probe against a host and returns the raw
/// textual output. Verdicts are derived by the caller from the output,
/// never from the probe's own exit status.
#[async_trait]
pub trait ReachabilityProbe: Send + Sync {
    async fn probe(&self, address: &str) -> Result<String, DomainError>;
}
