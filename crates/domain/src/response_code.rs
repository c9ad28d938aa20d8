/// DNS response codes the relay can synthesize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    /// Upstream resolution failed (RCODE 2).
    ServFail,
    /// Domain is blocked by policy (RCODE 3).
    NxDomain,
    /// Query type is not implemented (RCODE 4).
    NotImp,
}

impl ResponseCode {
    /// The 4-bit wire value carried in the low nibble of the second flags byte.
    pub fn code(self) -> u8 {
        match self {
            Self::ServFail => 2,
            Self::NxDomain => 3,
            Self::NotImp => 4,
        }
    }
}
