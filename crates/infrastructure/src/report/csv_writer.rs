use async_trait::async_trait;
use mwcheck_application::ports::ReportWriter;
use mwcheck_domain::{DomainError, RegressionRow};
use std::path::PathBuf;

/// Renders regression rows into `<stem>.csv`, header row first, one
/// row per regressed host.
pub struct CsvReportWriter {
    directory: PathBuf,
}

impl CsvReportWriter {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }
}

#[async_trait]
impl ReportWriter for CsvReportWriter {
    async fn write(
        &self,
        stem: &str,
        rows: &[RegressionRow],
    ) -> Result<PathBuf, DomainError> {
        let path = self.directory.join(format!("{stem}.csv"));

        let mut writer = csv::Writer::from_path(&path)
            .map_err(|e| DomainError::Report(format!("create {}: {e}", path.display())))?;
        for row in rows {
            writer
                .serialize(row)
                .map_err(|e| DomainError::Report(e.to_string()))?;
        }
        writer
            .flush()
            .map_err(|e| DomainError::Report(e.to_string()))?;

        Ok(path)
    }
}
