//! Host capability trait.
//!
//! The resize behavior never touches a concrete UI toolkit. Everything it
//! needs from the element it is attached to goes through [`ElementHost`]:
//! geometry queries, style writes, zone creation and global pointer
//! listener management.
//!
//! # Borrow Checking Pattern
//!
//! Methods take `&self`. Real hosts wrap handles that are already shared
//! (DOM nodes, retained widget ids), and mock hosts record calls through
//! interior mutability. This keeps the trait object-safe and lets the
//! behavior hold the host by value without lifetimes.

use crate::edges::{Edges, Handle, ResizeCursor};
use crate::geometry::{Rect, Size};
use crate::math::Vec3;

/// How the element is positioned while it is being resized from the
/// top or left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PositionMode {
    /// Move the element by writing `left`/`top` layout coordinates.
    #[default]
    Absolute,
    /// Move the element by writing a translation.
    Relative,
}

impl PositionMode {
    /// CSS `position` keyword.
    pub fn css_name(&self) -> &'static str {
        match self {
            PositionMode::Absolute => "absolute",
            PositionMode::Relative => "relative",
        }
    }
}

/// A single style mutation applied to the element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleWrite {
    /// Width in pixels.
    Width(f32),
    /// Height in pixels.
    Height(f32),
    /// Left layout coordinate in pixels.
    Left(f32),
    /// Top layout coordinate in pixels.
    Top(f32),
    /// Translation in pixels, replacing the element transform.
    Translate(Vec3),
    /// Positioning scheme of the element.
    Position(PositionMode),
}

impl StyleWrite {
    /// CSS property name and value for this write.
    pub fn to_css(&self) -> (&'static str, String) {
        match self {
            StyleWrite::Width(width) => ("width", format!("{width}px")),
            StyleWrite::Height(height) => ("height", format!("{height}px")),
            StyleWrite::Left(left) => ("left", format!("{left}px")),
            StyleWrite::Top(top) => ("top", format!("{top}px")),
            StyleWrite::Translate(offset) => (
                "transform",
                format!(
                    "translate3d({}px, {}px, {}px)",
                    offset.x, offset.y, offset.z
                ),
            ),
            StyleWrite::Position(mode) => ("position", mode.css_name().to_string()),
        }
    }
}

/// Offsets of a zone from the element box, in pixels.
///
/// `None` leaves the side unset, so the zone keeps its natural position on
/// that axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ZonePlacement {
    pub top: Option<f32>,
    pub bottom: Option<f32>,
    pub left: Option<f32>,
    pub right: Option<f32>,
}

/// Everything a host needs to materialize one zone.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneSpec {
    /// Which handle this zone is.
    pub handle: Handle,
    /// Side length of the square zone.
    pub size: f32,
    /// Where the zone sits relative to the element box.
    pub placement: ZonePlacement,
    /// Sides that get a visible border.
    pub borders: Edges,
    /// CSS border shorthand applied to each bordered side.
    pub border_style: String,
    /// Cursor shown while hovering the zone.
    pub cursor: ResizeCursor,
}

impl ZoneSpec {
    /// Class name attached to every zone element.
    pub const CLASS: &'static str = "resizeable";
    /// Attribute carrying the handle tag.
    pub const TAG_ATTRIBUTE: &'static str = "data-coordinates";

    /// Tag identifying the handle.
    pub fn tag(&self) -> &'static str {
        self.handle.tag()
    }
}

/// Identifier of a zone created by a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZoneId(pub u64);

/// Identifier of a global pointer-move/up listener pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Errors reported by a host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// The host could not create a zone.
    ZoneCreation(String),
    /// The element is no longer available.
    ElementDetached,
}

impl std::fmt::Display for HostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HostError::ZoneCreation(msg) => write!(f, "Failed to create resize zone: {}", msg),
            HostError::ElementDetached => write!(f, "Element is no longer attached"),
        }
    }
}

impl std::error::Error for HostError {}

/// Result type for host operations.
pub type HostResult<T> = Result<T, HostError>;

/// Capabilities a UI toolkit exposes for one resizable element.
pub trait ElementHost {
    // Geometry queries

    /// Inner size of the element (client width/height).
    fn client_size(&self) -> Size<f32>;

    /// Bounding box of the element, translation included.
    fn bounding_rect(&self) -> Rect<f32>;

    /// Resolved (computed) transform of the element, if any.
    fn computed_transform(&self) -> Option<String>;

    // Style writes

    /// Apply one style mutation to the element.
    fn write_style(&self, write: StyleWrite);

    // Zones

    /// Create a zone on the element and route its pointer-down to the
    /// behavior under the returned id.
    fn insert_zone(&self, spec: &ZoneSpec) -> HostResult<ZoneId>;

    /// Remove a zone previously created by [`ElementHost::insert_zone`].
    fn remove_zone(&self, id: ZoneId);

    // Global pointer listeners

    /// Start delivering global pointer-move and pointer-up events.
    fn listen_global(&self) -> ListenerId;

    /// Stop delivering events for a listener pair.
    fn unlisten_global(&self, id: ListenerId);
}

impl<H: ElementHost + ?Sized> ElementHost for &H {
    fn client_size(&self) -> Size<f32> {
        (**self).client_size()
    }

    fn bounding_rect(&self) -> Rect<f32> {
        (**self).bounding_rect()
    }

    fn computed_transform(&self) -> Option<String> {
        (**self).computed_transform()
    }

    fn write_style(&self, write: StyleWrite) {
        (**self).write_style(write)
    }

    fn insert_zone(&self, spec: &ZoneSpec) -> HostResult<ZoneId> {
        (**self).insert_zone(spec)
    }

    fn remove_zone(&self, id: ZoneId) {
        (**self).remove_zone(id)
    }

    fn listen_global(&self) -> ListenerId {
        (**self).listen_global()
    }

    fn unlisten_global(&self, id: ListenerId) {
        (**self).unlisten_global(id)
    }
}
