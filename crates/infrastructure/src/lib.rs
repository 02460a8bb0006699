//! Adapters behind the application ports: SQLite persistence, the
//! NETCONF device session, the system ping probe, and report rendering.
pub mod database;
pub mod device;
pub mod probe;
pub mod report;
pub mod repositories;
