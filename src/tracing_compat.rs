//! Logging shim for queue operations.
//!
//! With the `tracing` feature enabled this re-exports the `tracing` macros the
//! crate uses. Without it, the same names expand to nothing, so call sites do
//! not need their own `cfg` attributes.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
mod noop {
    /// No-op trace-level logging macro.
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// No-op debug-level logging macro.
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    pub(crate) use debug;
    pub(crate) use trace;
}

#[cfg(not(feature = "tracing"))]
pub(crate) use noop::{debug, trace};
