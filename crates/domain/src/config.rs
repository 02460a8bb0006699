use serde::Deserialize;

/// Root configuration, loaded from an optional TOML file and merged
/// with command-line overrides.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckerConfig {
    #[serde(default)]
    pub device: DeviceConfig,
    #[serde(default)]
    pub probe: ProbeConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Device session settings. Credentials are supplied per invocation,
/// never persisted here.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceConfig {
    #[serde(default = "default_device_port")]
    pub port: u16,
    #[serde(default)]
    pub username: Option<String>,
    /// Pause between consecutive RPCs on one session, as a courtesy to
    /// the device.
    #[serde(default = "default_request_pause_ms")]
    pub request_pause_ms: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            port: default_device_port(),
            username: None,
            request_pause_ms: default_request_pause_ms(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

/// Reachability probe settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ProbeConfig {
    #[serde(default = "default_packet_count")]
    pub packet_count: u32,
    #[serde(default = "default_deadline_secs")]
    pub deadline_secs: u32,
    #[serde(default = "default_workers")]
    pub workers: usize,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            packet_count: default_packet_count(),
            deadline_secs: default_deadline_secs(),
            workers: default_workers(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseConfig {
    /// Directory for per-router database files; current directory when
    /// unset.
    #[serde(default)]
    pub directory: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub username: Option<String>,
    pub log_level: Option<String>,
}

impl CheckerConfig {
    pub fn apply_overrides(&mut self, overrides: &CliOverrides) {
        if let Some(port) = overrides.port {
            self.device.port = port;
        }
        if let Some(username) = &overrides.username {
            self.device.username = Some(username.clone());
        }
        if let Some(level) = &overrides.log_level {
            self.logging.level = level.clone();
        }
    }
}

fn default_device_port() -> u16 {
    830
}

fn default_request_pause_ms() -> u64 {
    1000
}

fn default_connect_timeout_secs() -> u64 {
    30
}

fn default_packet_count() -> u32 {
    2
}

fn default_deadline_secs() -> u32 {
    1
}

fn default_workers() -> usize {
    8
}

fn default_log_level() -> String {
    "info".to_string()
}
