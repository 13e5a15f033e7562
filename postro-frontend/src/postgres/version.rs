/// Postgres frontend/backend protocol version.
///
/// Written as two big endian `u16`, major then minor, which equals to a single `u32` where
/// the most significant 16 bits are the major version.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProtocolVersion {
    pub major: u16,
    pub minor: u16,
}

impl ProtocolVersion {
    /// The protocol described in postgres 7.4 and later.
    pub const V3_0: ProtocolVersion = ProtocolVersion { major: 3, minor: 0 };

    /// Protocol version as single integer, `196608` for 3.0.
    pub const fn as_u32(self) -> u32 {
        ((self.major as u32) << 16) | self.minor as u32
    }
}

impl Default for ProtocolVersion {
    fn default() -> Self {
        Self::V3_0
    }
}
