use async_trait::async_trait;
use mwcheck_domain::{DomainError, RegressionRow};
use std::path::PathBuf;

/// Renders regression rows into a delimited report artifact and
/// returns its path.
#[async_trait]
pub trait ReportWriter: Send + Sync {
    async fn write(
        &self,
        stem: &str,
        rows: &[RegressionRow],
    ) -> Result<PathBuf, DomainError>;
}
