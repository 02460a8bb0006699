use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    /// Duplicate precheck key: the same host was recorded twice with
    /// identical discriminating fields. Fatal to the running phase.
    #[error("Snapshot integrity violation: {0}")]
    DataIntegrity(String),

    /// Any other persistence error. Callers log it and degrade to an
    /// empty result.
    #[error("Store error: {0}")]
    Store(String),

    /// Device session or query failure. Without device data there is
    /// nothing to reconcile, so this propagates.
    #[error("Device error: {0}")]
    Device(String),

    /// Malformed device response envelope.
    #[error("Response parse error: {0}")]
    Parse(String),

    /// Probe failure for a single host. Absorbed into a FAILED verdict.
    #[error("Probe error: {0}")]
    Probe(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Report error: {0}")]
    Report(String),
}
