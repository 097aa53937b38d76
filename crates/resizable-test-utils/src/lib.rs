//! Test utilities for the resizable workspace.
//!
//! The main component is [`MockElementHost`], an [`ElementHost`] that keeps
//! a simulated element box in memory and records every call made to it.
//!
//! # Example
//!
//! ```rust
//! use resizable_core::host::{ElementHost, StyleWrite};
//! use resizable_test_utils::MockElementHost;
//!
//! let host = MockElementHost::with_box(50.0, 50.0, 100.0, 100.0);
//! host.write_style(StyleWrite::Width(150.0));
//!
//! assert_eq!(host.width(), 150.0);
//! assert_eq!(host.count_style_writes(), 1);
//! ```
//!
//! # Interior Mutability
//!
//! `ElementHost` methods take `&self`, so the mock keeps its state behind
//! `parking_lot::Mutex` and records calls without needing `&mut`.

pub mod mock_host;

pub use mock_host::*;
pub use resizable_core::host::ElementHost;
