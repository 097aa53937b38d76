//! Pointer-driven resizing of a rectangular element.
//!
//! [`Resizable::attach`] places grab zones on an element's corners (and
//! optionally edges). Dragging a zone resizes the element from that side;
//! dragging from the top or left also moves it so the opposite side stays
//! put, composing with any translation the element already had.
//!
//! The element is reached only through [`ElementHost`], so the same
//! behavior drives any toolkit that can implement it.
//!
//! - [`engine`] owns the gesture lifecycle.
//! - [`gesture`] turns pointer samples into geometry.
//! - [`transform`] decodes the pre-existing translation.
//! - [`zones`] creates and tracks the grab zones.

pub mod config;
pub mod engine;
pub mod error;
pub mod gesture;
pub mod listeners;
pub mod resizable;
pub mod transform;
pub mod zones;

pub use config::{ResizeConfig, ResizeOptions, SizeBounds};
pub use engine::DragEngine;
pub use error::{ResizeError, ResizeResult};
pub use gesture::{Gesture, ResizeFrame};
pub use listeners::GlobalListeners;
pub use resizable::Resizable;
pub use transform::decode_translation;

pub use resizable_core::edges::{Edges, Handle, Handles, ResizeCursor};
pub use resizable_core::host::{ElementHost, PositionMode, StyleWrite, ZoneId, ZoneSpec};
