use mwcheck_domain::{ArpEntry, DomainError, NOT_AVAILABLE};
use quick_xml::events::Event;
use quick_xml::Reader;

const ENTRY_ELEMENT: &[u8] = b"arp-table-entry";
const ADDRESS_ELEMENT: &[u8] = b"ip-address";
const HARDWARE_ELEMENT: &[u8] = b"mac-address";
const INTERFACE_ELEMENT: &[u8] = b"interface-name";

#[derive(Clone, Copy)]
enum EntryField {
    Address,
    Hardware,
    Interface,
}

/// Extracts address-resolution entries from a device reply.
///
/// Sub-field extraction takes the first matching sub-element's trimmed
/// text; a missing or empty sub-field degrades to the `n_a` sentinel.
/// Only a malformed XML envelope is an error.
pub struct ArpResponseParser;

impl ArpResponseParser {
    pub fn parse(xml: &str) -> Result<Vec<ArpEntry>, DomainError> {
        let mut reader = Reader::from_str(xml);
        let mut entries = Vec::new();

        let mut in_entry = false;
        let mut current_field: Option<EntryField> = None;
        let mut address: Option<String> = None;
        let mut hardware: Option<String> = None;
        let mut interface: Option<String> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(element)) => {
                    let name = element.local_name();
                    if name.as_ref() == ENTRY_ELEMENT {
                        in_entry = true;
                        address = None;
                        hardware = None;
                        interface = None;
                    } else if in_entry {
                        current_field = match name.as_ref() {
                            ADDRESS_ELEMENT => Some(EntryField::Address),
                            HARDWARE_ELEMENT => Some(EntryField::Hardware),
                            INTERFACE_ELEMENT => Some(EntryField::Interface),
                            _ => None,
                        };
                    }
                }
                Ok(Event::Text(text)) => {
                    if let Some(field) = current_field {
                        let value = text
                            .unescape()
                            .map_err(|e| DomainError::Parse(e.to_string()))?;
                        let value = value.trim();
                        if !value.is_empty() {
                            let slot = match field {
                                EntryField::Address => &mut address,
                                EntryField::Hardware => &mut hardware,
                                EntryField::Interface => &mut interface,
                            };
                            if slot.is_none() {
                                *slot = Some(value.to_string());
                            }
                        }
                    }
                }
                Ok(Event::End(element)) => {
                    if element.local_name().as_ref() == ENTRY_ELEMENT {
                        in_entry = false;
                        let raw_interface =
                            interface.take().unwrap_or_else(|| NOT_AVAILABLE.to_string());
                        entries.push(ArpEntry::new(
                            address.take().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                            hardware.take().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                            &raw_interface,
                        ));
                    }
                    current_field = None;
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => {
                    return Err(DomainError::Parse(format!(
                        "malformed device response: {e}"
                    )))
                }
            }
        }

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_complete_entries() {
        let xml = r#"
            <rpc-reply>
              <arp-table-information xmlns="http://xml.juniper.net/junos/arp">
                <arp-table-entry>
                  <mac-address>aa:bb:cc:dd:ee:01</mac-address>
                  <ip-address>10.0.0.1</ip-address>
                  <interface-name>irb.5 [ge-0/0/1.100]</interface-name>
                </arp-table-entry>
                <arp-table-entry>
                  <mac-address>aa:bb:cc:dd:ee:02</mac-address>
                  <ip-address>10.0.0.2</ip-address>
                  <interface-name>ge-0/0/1.200</interface-name>
                </arp-table-entry>
              </arp-table-information>
            </rpc-reply>"#;

        let entries = ArpResponseParser::parse(xml).unwrap();
        assert_eq!(entries.len(), 2);

        assert_eq!(entries[0].address, "10.0.0.1");
        assert_eq!(entries[0].hardware_address, "aa:bb:cc:dd:ee:01");
        assert_eq!(entries[0].bridge_interface, "irb.5");
        assert_eq!(entries[0].logical_interface, "ge-0/0/1.100");

        assert_eq!(entries[1].bridge_interface, NOT_AVAILABLE);
        assert_eq!(entries[1].logical_interface, "ge-0/0/1.200");
    }

    #[test]
    fn missing_sub_fields_degrade_to_sentinel() {
        let xml = r#"
            <arp-table-information>
              <arp-table-entry>
                <ip-address>10.0.0.3</ip-address>
              </arp-table-entry>
              <arp-table-entry>
                <mac-address></mac-address>
                <ip-address>  </ip-address>
                <interface-name>ge-0/0/2.0</interface-name>
              </arp-table-entry>
            </arp-table-information>"#;

        let entries = ArpResponseParser::parse(xml).unwrap();
        assert_eq!(entries.len(), 2);

        assert_eq!(entries[0].address, "10.0.0.3");
        assert_eq!(entries[0].hardware_address, NOT_AVAILABLE);
        assert_eq!(entries[0].bridge_interface, NOT_AVAILABLE);
        assert_eq!(entries[0].logical_interface, NOT_AVAILABLE);

        assert_eq!(entries[1].address, NOT_AVAILABLE);
        assert_eq!(entries[1].hardware_address, NOT_AVAILABLE);
        assert_eq!(entries[1].logical_interface, "ge-0/0/2.0");
    }

    #[test]
    fn surrounding_text_is_trimmed() {
        let xml = r#"
            <arp-table-entry>
              <ip-address>
                10.0.0.9
              </ip-address>
              <mac-address> aa:bb:cc:dd:ee:09 </mac-address>
              <interface-name>irb.19 [xe-1/0/3.19]</interface-name>
            </arp-table-entry>"#;

        let entries = ArpResponseParser::parse(xml).unwrap();
        assert_eq!(entries[0].address, "10.0.0.9");
        assert_eq!(entries[0].hardware_address, "aa:bb:cc:dd:ee:09");
        assert_eq!(entries[0].bridge_interface, "irb.19");
    }

    #[test]
    fn empty_response_yields_no_entries() {
        let entries = ArpResponseParser::parse("<arp-table-information/>").unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn malformed_envelope_is_an_error() {
        let xml = "<arp-table-entry><ip-address>10.0.0.1</mac-address></arp-table-entry>";
        let result = ArpResponseParser::parse(xml);
        assert!(matches!(result, Err(DomainError::Parse(_))));
    }
}
