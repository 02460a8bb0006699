use regex::Regex;
use std::sync::LazyLock;

/// Sentinel stored when the device response omits a field.
pub const NOT_AVAILABLE: &str = "n_a";

/// Interface strings like `irb.5 [ge-0/0/1.100]` carry both the bridge
/// interface and the physical sub-interface the address was learned on.
static IRB_INTERFACE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<irb>irb\.\d+)\s+\[(?P<logical>.+)\]").expect("valid irb pattern")
});

/// One normalized address-resolution record from the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArpEntry {
    /// IPv4 address as reported by the device.
    pub address: String,
    /// Hardware address, or `n_a` when the device omitted it.
    pub hardware_address: String,
    /// `irb.<n>` when the interface string names a bridge, else `n_a`.
    pub bridge_interface: String,
    /// The sub-interface inside brackets, or the raw interface string.
    pub logical_interface: String,
}

impl ArpEntry {
    /// Builds an entry from raw device fields, splitting the interface
    /// string into its bridge/logical parts when it matches the
    /// `irb.<n> [<logical>]` form.
    pub fn new(
        address: impl Into<String>,
        hardware_address: impl Into<String>,
        raw_interface: &str,
    ) -> Self {
        let (bridge_interface, logical_interface) = match IRB_INTERFACE_PATTERN
            .captures(raw_interface)
        {
            Some(caps) => (caps["irb"].to_string(), caps["logical"].to_string()),
            None => (NOT_AVAILABLE.to_string(), raw_interface.to_string()),
        };

        Self {
            address: address.into(),
            hardware_address: hardware_address.into(),
            bridge_interface,
            logical_interface,
        }
    }
}
