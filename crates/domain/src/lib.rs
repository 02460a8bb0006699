//! Maintenance-window checker domain layer
pub mod arp_entry;
pub mod config;
pub mod errors;
pub mod filter;
pub mod reachability;
pub mod report;
pub mod snapshot;

pub use arp_entry::{ArpEntry, NOT_AVAILABLE};
pub use config::{CheckerConfig, CliOverrides, DeviceConfig, ProbeConfig};
pub use errors::DomainError;
pub use filter::{AddressFilter, FilterField, MatchKind};
pub use reachability::{ProbeOutcome, Reachability};
pub use report::{PhaseCounts, RegressionRow, ReportSummary};
pub use snapshot::{SnapshotPhase, SnapshotTable};
