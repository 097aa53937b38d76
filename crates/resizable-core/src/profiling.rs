//! Profiling scopes based on the `puffin` crate.
//!
//! With the `profiling` feature disabled the macros expand to nothing, so
//! call sites never need their own `cfg`.

#[cfg(feature = "profiling")]
pub use puffin::{profile_function, profile_scope};

#[cfg(not(feature = "profiling"))]
pub use crate::{noop_profile_function as profile_function, noop_profile_scope as profile_scope};

#[cfg(not(feature = "profiling"))]
#[doc(hidden)]
#[macro_export]
macro_rules! noop_profile_function {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "profiling"))]
#[doc(hidden)]
#[macro_export]
macro_rules! noop_profile_scope {
    ($($arg:tt)*) => {};
}

/// Turn puffin scope collection on or off.
#[cfg(feature = "profiling")]
pub fn set_enabled(enabled: bool) {
    puffin::set_scopes_on(enabled);
}

/// Mark the start of a new frame for profiling.
///
/// Call this once per host frame to organize profiling data by frame.
#[cfg(feature = "profiling")]
#[inline]
pub fn new_frame() {
    puffin::GlobalProfiler::lock().new_frame();
}
