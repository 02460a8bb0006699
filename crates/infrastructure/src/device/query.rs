/// RPCs this tool can issue against a device, keyed by a stable name.
///
/// New query kinds get a variant here plus a body below; everything
/// downstream dispatches on the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceQuery {
    /// Address-resolution table with name resolution disabled.
    ArpTableNoResolve,
}

impl DeviceQuery {
    pub fn name(&self) -> &'static str {
        match self {
            DeviceQuery::ArpTableNoResolve => "arp",
        }
    }

    pub fn rpc_body(&self) -> &'static str {
        match self {
            DeviceQuery::ArpTableNoResolve => {
                "<get-arp-table-information><no-resolve/></get-arp-table-information>"
            }
        }
    }
}
