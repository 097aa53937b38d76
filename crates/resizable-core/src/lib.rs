//! Resizable Core
//!
//! Shared vocabulary for the resizable workspace: geometry and math types,
//! edge/handle flags, and the [`host::ElementHost`] capability trait that a
//! UI toolkit implements to host a resize behavior.

pub mod alloc;
pub mod edges;
pub mod geometry;
pub mod host;
pub mod logging;
pub mod math;
pub mod profiling;
