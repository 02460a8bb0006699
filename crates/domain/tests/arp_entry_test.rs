use mwcheck_domain::{ArpEntry, NOT_AVAILABLE};

#[test]
fn bridge_interface_is_split_from_bracketed_form() {
    let entry = ArpEntry::new("10.0.0.1", "aa:bb:cc:dd:ee:01", "irb.5 [ge-0/0/1.100]");

    assert_eq!(entry.bridge_interface, "irb.5");
    assert_eq!(entry.logical_interface, "ge-0/0/1.100");
}

#[test]
fn plain_interface_keeps_raw_string_and_sentinel_bridge() {
    let entry = ArpEntry::new("10.0.0.2", "aa:bb:cc:dd:ee:02", "ge-0/0/1.200");

    assert_eq!(entry.bridge_interface, NOT_AVAILABLE);
    assert_eq!(entry.logical_interface, "ge-0/0/1.200");
}

#[test]
fn large_unit_numbers_match_the_bridge_pattern() {
    let entry = ArpEntry::new("10.1.2.3", "n_a", "irb.19911 [ae0.1991]");

    assert_eq!(entry.bridge_interface, "irb.19911");
    assert_eq!(entry.logical_interface, "ae0.1991");
}

#[test]
fn bridge_without_brackets_is_not_split() {
    // A bare irb interface carries no logical sub-interface.
    let entry = ArpEntry::new("10.0.0.3", "n_a", "irb.5");

    assert_eq!(entry.bridge_interface, NOT_AVAILABLE);
    assert_eq!(entry.logical_interface, "irb.5");
}

#[test]
fn sentinel_interface_passes_through() {
    let entry = ArpEntry::new("10.0.0.4", NOT_AVAILABLE, NOT_AVAILABLE);

    assert_eq!(entry.hardware_address, NOT_AVAILABLE);
    assert_eq!(entry.bridge_interface, NOT_AVAILABLE);
    assert_eq!(entry.logical_interface, NOT_AVAILABLE);
}
