use super::OutOfRange;

/// Postgres object identifier.
///
/// The oid type is implemented as an unsigned four-byte integer.
///
/// Stored unsigned, a signed oid converts losslessly with [`From<i32>`], which keeps the same
/// four bytes on the wire.
///
/// <https://www.postgresql.org/docs/current/datatype-oid.html>
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Oid(u32);

impl Oid {
    /// Placing a zero oid is equivalent to leaving the type unspecified.
    pub const UNSPECIFIED: Oid = Oid(0);

    pub const fn new(oid: u32) -> Oid {
        Oid(oid)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for Oid {
    fn from(value: u32) -> Self {
        Oid(value)
    }
}

impl From<Oid> for u32 {
    fn from(value: Oid) -> Self {
        value.0
    }
}

impl From<i32> for Oid {
    fn from(value: i32) -> Self {
        Oid(u32::from_be_bytes(value.to_be_bytes()))
    }
}

impl From<Oid> for i32 {
    fn from(value: Oid) -> Self {
        i32::from_be_bytes(value.0.to_be_bytes())
    }
}

impl TryFrom<i64> for Oid {
    type Error = OutOfRange;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match u32::try_from(value) {
            Ok(ok) => Ok(Oid(ok)),
            Err(_) => Err(OutOfRange { field: "oid", value: value.into(), max: u32::MAX.into() }),
        }
    }
}

/// A type that have corresponding postgres oid.
pub trait PgType {
    const OID: Oid;
}

macro_rules! oid {
    ($ty:ty, $oid:literal $(, $doc:literal)? ) => {
        impl PgType for $ty {
            $(#[doc = $doc])?
            const OID: Oid = Oid::new($oid);
        }
    };
}

oid!(bool, 16);
oid!([u8], 17, "`bytea` variable-length string, binary values escaped");
oid!(Vec<u8>, 17, "`bytea` variable-length string, binary values escaped");
oid!(char, 18);
oid!(i64, 20, "`int8` ~18 digit integer, 8-byte storage");
oid!(i16, 21, "`int2` -32 thousand to 32 thousand, 2-byte storage");
oid!(i32, 23, "`int4` -2 billion to 2 billion integer, 4-byte storage");
oid!(str, 25, "`text` variable-length string, no limit specified");
oid!(String, 25, "`text` variable-length string, no limit specified");
oid!(f32, 700, "`float4` single-precision floating point number, 4-byte storage");
oid!(f64, 701, "`float8` double-precision floating point number, 8-byte storage");

#[cfg(feature = "json")]
impl PgType for serde_json::Value {
    /// Binary JSON
    const OID: Oid = Oid::new(3802);
}

#[cfg(feature = "time")]
impl PgType for time::PrimitiveDateTime {
    /// date and time
    const OID: Oid = Oid::new(1114);
}

#[cfg(feature = "time")]
impl PgType for time::OffsetDateTime {
    /// date and time with timezone
    const OID: Oid = Oid::new(1184);
}

#[cfg(feature = "time")]
impl PgType for time::Date {
    /// date
    const OID: Oid = Oid::new(1082);
}
