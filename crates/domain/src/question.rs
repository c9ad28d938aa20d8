/// Query type code for IPv4 address records.
pub const QTYPE_A: u16 = 1;

/// Query class code for the Internet class.
pub const QCLASS_IN: u16 = 1;

/// The question section of a DNS query, as decoded from the wire.
///
/// `name` keeps the case exactly as received; normalization happens at the
/// filter boundary, not here. Constructed only by a successful decode, so a
/// `Question` always carries a non-empty name and class IN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Labels joined by `.`, no trailing dot, at most 255 bytes.
    pub name: String,
    /// Query type as sent on the wire. Only `QTYPE_A` is served; anything
    /// else is answered with NOTIMP by the relay.
    pub qtype: u16,
    /// Query class, always `QCLASS_IN`.
    pub qclass: u16,
}

impl Question {
    /// True when this is a plain IPv4 address query.
    pub fn is_address_query(&self) -> bool {
        self.qtype == QTYPE_A
    }
}
