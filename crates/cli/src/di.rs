use mwcheck_application::ports::{ArpTableReader, ReportWriter, SnapshotStore};
use mwcheck_application::services::HostProber;
use mwcheck_domain::config::DeviceConfig;
use mwcheck_domain::CheckerConfig;
use mwcheck_infrastructure::device::{NetconfArpReader, SessionSettings};
use mwcheck_infrastructure::probe::SystemPingProbe;
use mwcheck_infrastructure::report::CsvReportWriter;
use mwcheck_infrastructure::repositories::SqliteSnapshotStore;
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;

/// Shared adapters wired behind the application ports.
pub struct Services {
    pub store: Arc<dyn SnapshotStore>,
    pub prober: Arc<HostProber>,
    pub report_writer: Arc<dyn ReportWriter>,
    device: DeviceConfig,
}

impl Services {
    pub fn new(pool: SqlitePool, config: &CheckerConfig) -> Self {
        let store: Arc<dyn SnapshotStore> = Arc::new(SqliteSnapshotStore::new(pool));
        let probe = Arc::new(SystemPingProbe::new(&config.probe));
        let prober = Arc::new(HostProber::new(probe, config.probe.workers));
        let report_writer: Arc<dyn ReportWriter> = Arc::new(CsvReportWriter::new("."));

        Self {
            store,
            prober,
            report_writer,
            device: config.device.clone(),
        }
    }

    /// Device sessions are built per invocation; credentials are never
    /// held beyond the command that prompted for them.
    pub fn arp_reader(
        &self,
        router: &str,
        username: &str,
        port: Option<u16>,
        password: String,
    ) -> Arc<dyn ArpTableReader> {
        Arc::new(NetconfArpReader::new(SessionSettings {
            host: router.to_string(),
            port: port.unwrap_or(self.device.port),
            username: username.to_string(),
            password,
            request_pause: Duration::from_millis(self.device.request_pause_ms),
            connect_timeout: Duration::from_secs(self.device.connect_timeout_secs),
        }))
    }

    pub fn default_username(&self) -> Option<&str> {
        self.device.username.as_deref()
    }
}
