mod arp_table_reader;
mod reachability_probe;
mod report_writer;
mod snapshot_store;

pub use arp_table_reader::ArpTableReader;
pub use reachability_probe::ReachabilityProbe;
pub use report_writer::ReportWriter;
pub use snapshot_store::SnapshotStore;
