use bytes::BufMut;

use crate::postgres::{NulError, OutOfRange};

/// Integer signess in postgres docs is awful.
pub trait UsizeExt {
    /// Length is `usize` in rust, while postgres want `u16` for counts.
    fn try_u16(self, field: &'static str) -> Result<u16, OutOfRange>;
    /// Length is `usize` in rust, while postgres want `u32` for message length.
    fn try_u32(self, field: &'static str) -> Result<u32, OutOfRange>;
    /// Length is `usize` in rust, while postgres want `i32` for value length.
    fn try_i32(self, field: &'static str) -> Result<i32, OutOfRange>;
    /// Same as [`try_u16`][UsizeExt::try_u16], for length that already checked,
    /// this will panic when overflow instead of wrapping.
    fn to_u16(self) -> u16;
    /// Same as [`try_i32`][UsizeExt::try_i32], for length that already checked,
    /// this will panic when overflow instead of wrapping.
    fn to_i32(self) -> i32;
}

/// Nul string operation.
pub trait StrExt {
    /// String length plus nul (1).
    ///
    /// Returns error if string contains nul.
    fn nul_string_len(&self, field: &'static str) -> Result<usize, NulError>;
}

/// Nul string operation in [`BufMut`]
pub trait BufMutExt {
    /// Write string and nul termination.
    fn put_nul_string(&mut self, string: &str);
}

/// Helper trait to [`Display`][std::fmt::Display] bytes.
pub trait FmtExt {
    /// Lossy [`Display`][std::fmt::Display] bytes.
    fn lossy(&self) -> LossyFmt<'_>;
}

/// Lossy [`Display`][std::fmt::Display] implementation for bytes.
pub struct LossyFmt<'a>(pub &'a [u8]);

macro_rules! try_into {
    ($self:ident as $ty:ty, $field:ident) => {
        <$ty>::try_from($self).map_err(|_| OutOfRange {
            field: $field,
            value: $self as i128,
            max: <$ty>::MAX.into(),
        })
    };
}

impl UsizeExt for usize {
    fn try_u16(self, field: &'static str) -> Result<u16, OutOfRange> {
        try_into!(self as u16, field)
    }

    fn try_u32(self, field: &'static str) -> Result<u32, OutOfRange> {
        try_into!(self as u32, field)
    }

    fn try_i32(self, field: &'static str) -> Result<i32, OutOfRange> {
        try_into!(self as i32, field)
    }

    fn to_u16(self) -> u16 {
        self.try_into().expect("message count too large for protocol")
    }

    fn to_i32(self) -> i32 {
        self.try_into().expect("message size too large for protocol")
    }
}

impl StrExt for str {
    fn nul_string_len(&self, field: &'static str) -> Result<usize, NulError> {
        match memchr::memchr(b'\0', self.as_bytes()) {
            Some(position) => Err(NulError { field, position }),
            None => Ok(self.len() + 1/* nul */),
        }
    }
}

impl<B: BufMut> BufMutExt for B {
    fn put_nul_string(&mut self, string: &str) {
        self.put(string.as_bytes());
        self.put_u8(b'\0');
    }
}

impl FmtExt for [u8] {
    fn lossy(&self) -> LossyFmt<'_> {
        LossyFmt(self)
    }
}

impl std::fmt::Display for LossyFmt<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &b in self.0 {
            if b.is_ascii_graphic() || b == b' ' {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "\\x{b:02x}")?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for LossyFmt<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "b\"{self}\"")
    }
}
