use mwcheck_domain::{AddressFilter, FilterField, MatchKind};

#[test]
fn trailing_star_requests_substring_match() {
    let filter = AddressFilter::from_pattern(FilterField::BridgeInterface, "irb.101*").unwrap();

    assert_eq!(filter.kind, MatchKind::Contains);
    assert_eq!(filter.value, "irb.101");
    assert_eq!(filter.field.column(), "bridge_interface");
}

#[test]
fn plain_pattern_requests_exact_match() {
    let filter =
        AddressFilter::from_pattern(FilterField::LogicalInterface, "ge-0/0/1.200").unwrap();

    assert_eq!(filter.kind, MatchKind::Equals);
    assert_eq!(filter.value, "ge-0/0/1.200");
}

#[test]
fn empty_pattern_yields_no_filter() {
    assert!(AddressFilter::from_pattern(FilterField::BridgeInterface, "").is_none());
}

#[test]
fn bare_star_yields_no_filter() {
    // Matching everything is the same as not filtering.
    assert!(AddressFilter::from_pattern(FilterField::BridgeInterface, "*").is_none());
}
