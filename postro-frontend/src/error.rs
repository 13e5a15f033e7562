//! `postro-frontend` error types.
use std::{backtrace::Backtrace, fmt};

use crate::postgres::{NulError, OutOfRange, ParamCountMismatch};

/// A specialized [`Result`] type for `postro-frontend` operation.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// All possible error from `postro-frontend` library.
///
/// All errors are input contract violation, detected before any byte is written.
pub struct Error {
    backtrace: Backtrace,
    kind: ErrorKind,
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }
}

/// All possible error kind from `postro-frontend` library.
pub enum ErrorKind {
    Nul(NulError),
    ParamCount(ParamCountMismatch),
    OutOfRange(OutOfRange),
}

macro_rules! from {
    (<$ty:ty>$pat:pat => $body:expr) => {
        impl From<$ty> for Error {
            fn from($pat: $ty) -> Self {
                let backtrace = std::backtrace::Backtrace::capture();
                Self { backtrace, kind: $body }
            }
        }
    };
}

from!(<ErrorKind>e => e);
from!(<NulError>e => ErrorKind::Nul(e));
from!(<ParamCountMismatch>e => ErrorKind::ParamCount(e));
from!(<OutOfRange>e => ErrorKind::OutOfRange(e));

impl std::error::Error for Error { }

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)?;

        if let std::backtrace::BacktraceStatus::Captured = self.backtrace.status() {
            let mut backtrace = self.backtrace.to_string();
            write!(f, "\n\n")?;
            writeln!(f, "Stack backtrace:")?;
            backtrace.truncate(backtrace.trim_end().len());
            write!(f, "{}", backtrace)?;
        }

        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}

impl std::error::Error for ErrorKind { }

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nul(e) => e.fmt(f),
            Self::ParamCount(e) => e.fmt(f),
            Self::OutOfRange(e) => e.fmt(f),
        }
    }
}

impl fmt::Debug for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}
