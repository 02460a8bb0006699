use super::absorb_store;
use crate::ports::{ReportWriter, SnapshotStore};
use mwcheck_domain::{DomainError, ReportSummary, SnapshotTable};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Result of the report phase: summary counters plus the path of the
/// CSV artifact, present only when at least one host regressed.
#[derive(Debug)]
pub struct ReportOutput {
    pub summary: ReportSummary,
    pub artifact: Option<PathBuf>,
}

/// Correlates a precheck/postcheck snapshot pair into regression rows
/// and summary counts.
///
/// Running the report before any data exists is not an error; it yields
/// empty results.
pub struct ReportUseCase {
    store: Arc<dyn SnapshotStore>,
    writer: Arc<dyn ReportWriter>,
    /// Prefix for the artifact file name, conventionally the database
    /// file name.
    artifact_prefix: String,
}

impl ReportUseCase {
    pub fn new(
        store: Arc<dyn SnapshotStore>,
        writer: Arc<dyn ReportWriter>,
        artifact_prefix: impl Into<String>,
    ) -> Self {
        Self {
            store,
            writer,
            artifact_prefix: artifact_prefix.into(),
        }
    }

    pub async fn execute(
        &self,
        precheck: SnapshotTable,
        postcheck: SnapshotTable,
    ) -> Result<ReportOutput, DomainError> {
        let regressions = absorb_store(
            self.store.correlate_regressions(&precheck, &postcheck).await,
            "correlate regressions",
        )?;
        let precheck_counts = absorb_store(
            self.store.counts_by_outcome(&precheck).await,
            "count precheck outcomes",
        )?;
        let postcheck_counts = absorb_store(
            self.store.counts_by_outcome(&postcheck).await,
            "count postcheck outcomes",
        )?;

        let artifact = if regressions.is_empty() {
            info!(precheck = %precheck, postcheck = %postcheck, "no regressed hosts");
            None
        } else {
            let stem = format!(
                "{}_{}_{}",
                self.artifact_prefix,
                precheck.qualified_name(),
                postcheck.qualified_name()
            );
            let path = self.writer.write(&stem, &regressions).await?;
            info!(path = %path.display(), rows = regressions.len(), "regression report written");
            Some(path)
        };

        Ok(ReportOutput {
            summary: ReportSummary {
                precheck: precheck_counts,
                postcheck: postcheck_counts,
                regressions,
            },
            artifact,
        })
    }
}
