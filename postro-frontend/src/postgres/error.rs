//! Encoding error
use std::fmt;

/// A string field contains an embedded nul byte.
///
/// Postgres string is nul terminated, thus it cannot contain nul itself.
pub struct NulError {
    /// Name of the offending field.
    pub field: &'static str,
    /// Byte position of the first nul.
    pub position: usize,
}

/// The number of parameter format codes is not equal to the number of parameter values
/// in a [`Bind`][super::frontend::Bind] message.
pub struct ParamCountMismatch {
    pub formats: usize,
    pub values: usize,
}

/// A count, length or identifier does not fit its wire integer.
pub struct OutOfRange {
    /// Name of the offending field.
    pub field: &'static str,
    pub value: i128,
    pub max: i128,
}

impl std::error::Error for NulError { }
impl std::error::Error for ParamCountMismatch { }
impl std::error::Error for OutOfRange { }

impl fmt::Display for NulError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` contains nul byte at position {}", self.field, self.position)
    }
}

impl fmt::Display for ParamCountMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bind have {} parameter format codes but {} parameter values",
            self.formats, self.values,
        )
    }
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value < 0 {
            write!(f, "`{}` cannot be negative, found {}", self.field, self.value)
        } else {
            write!(f, "`{}` too large for protocol, found {}, max {}", self.field, self.value, self.max)
        }
    }
}

macro_rules! debug_fmt {
    ($($ty:ty),*) => {$(
        impl fmt::Debug for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "\"{self}\"")
            }
        }
    )*};
}

debug_fmt!(NulError, ParamCountMismatch, OutOfRange);
