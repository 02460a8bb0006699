mod arp_parser;
mod arp_reader;
mod netconf;
mod query;

pub use arp_parser::ArpResponseParser;
pub use arp_reader::NetconfArpReader;
pub use netconf::{NetconfSession, SessionSettings};
pub use query::DeviceQuery;
