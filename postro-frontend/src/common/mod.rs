//! Supporting utility type.
mod optional;

pub use optional::OptionalStr;

/// Trace when `verbose` feature enabled.
macro_rules! verbose {
    ($($tt:tt)*) => {
        #[cfg(feature = "verbose")]
        tracing::trace!($($tt)*)
    };
}

/// Create and enter `Span` when `verbose` feature enabled.
macro_rules! span {
    ($($tt:tt)*) => {
        #[cfg(feature = "verbose")]
        let s = tracing::trace_span!($($tt)*);
        #[cfg(feature = "verbose")]
        let _s = s.enter();
    };
}

/// Debug log when `log` feature enabled.
macro_rules! debug {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        log::debug!($($tt)*)
    };
}

pub(crate) use verbose;
pub(crate) use span;
pub(crate) use debug;
