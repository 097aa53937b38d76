//! Edge and handle vocabulary.
//!
//! A [`Handle`] is one grabbable zone (a corner or a plain edge). Each handle
//! decodes once into the [`Edges`] it moves, so the drag math never inspects
//! tag strings.

use bitflags::bitflags;

bitflags! {
    /// Sides of the element affected by a drag.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Edges: u8 {
        const TOP    = 0b0001;
        const BOTTOM = 0b0010;
        const LEFT   = 0b0100;
        const RIGHT  = 0b1000;
    }
}

impl Edges {
    /// True when the drag changes the horizontal position of the element.
    #[inline]
    pub fn moves_x(&self) -> bool {
        self.contains(Self::LEFT)
    }

    /// True when the drag changes the vertical position of the element.
    #[inline]
    pub fn moves_y(&self) -> bool {
        self.contains(Self::TOP)
    }

    /// Resize cursor pointing along these edges.
    ///
    /// Returns `None` for an empty set or for opposite edges, which no
    /// handle produces.
    pub fn cursor(&self) -> Option<ResizeCursor> {
        let vertical = match (self.contains(Self::TOP), self.contains(Self::BOTTOM)) {
            (true, false) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
            (true, true) => return None,
        };
        let horizontal = match (self.contains(Self::RIGHT), self.contains(Self::LEFT)) {
            (true, false) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
            (true, true) => return None,
        };

        let cursor = match (vertical, horizontal) {
            (Some(true), None) => ResizeCursor::North,
            (Some(false), None) => ResizeCursor::South,
            (None, Some(true)) => ResizeCursor::East,
            (None, Some(false)) => ResizeCursor::West,
            (Some(true), Some(true)) => ResizeCursor::NorthEast,
            (Some(true), Some(false)) => ResizeCursor::NorthWest,
            (Some(false), Some(true)) => ResizeCursor::SouthEast,
            (Some(false), Some(false)) => ResizeCursor::SouthWest,
            (None, None) => return None,
        };
        Some(cursor)
    }
}

/// Directional resize cursor shown over a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeCursor {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeCursor {
    /// CSS cursor keyword.
    pub fn css_name(&self) -> &'static str {
        match self {
            ResizeCursor::North => "n-resize",
            ResizeCursor::South => "s-resize",
            ResizeCursor::East => "e-resize",
            ResizeCursor::West => "w-resize",
            ResizeCursor::NorthEast => "ne-resize",
            ResizeCursor::NorthWest => "nw-resize",
            ResizeCursor::SouthEast => "se-resize",
            ResizeCursor::SouthWest => "sw-resize",
        }
    }
}

/// A single grabbable zone position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    LeftTop,
    LeftBottom,
    RightTop,
    RightBottom,
    Left,
    Right,
    Top,
    Bottom,
}

impl Handle {
    /// Every handle, corners first.
    pub const ALL: [Handle; 8] = [
        Handle::LeftTop,
        Handle::LeftBottom,
        Handle::RightTop,
        Handle::RightBottom,
        Handle::Left,
        Handle::Right,
        Handle::Top,
        Handle::Bottom,
    ];

    /// Edges moved when this handle is dragged.
    pub fn edges(&self) -> Edges {
        match self {
            Handle::LeftTop => Edges::LEFT | Edges::TOP,
            Handle::LeftBottom => Edges::LEFT | Edges::BOTTOM,
            Handle::RightTop => Edges::RIGHT | Edges::TOP,
            Handle::RightBottom => Edges::RIGHT | Edges::BOTTOM,
            Handle::Left => Edges::LEFT,
            Handle::Right => Edges::RIGHT,
            Handle::Top => Edges::TOP,
            Handle::Bottom => Edges::BOTTOM,
        }
    }

    /// Stable identity tag attached to the zone element.
    pub fn tag(&self) -> &'static str {
        match self {
            Handle::LeftTop => "leftTop",
            Handle::LeftBottom => "leftBottom",
            Handle::RightTop => "rightTop",
            Handle::RightBottom => "rightBottom",
            Handle::Left => "left",
            Handle::Right => "right",
            Handle::Top => "top",
            Handle::Bottom => "bottom",
        }
    }

    /// Parse a zone tag, ignoring ASCII case.
    pub fn from_tag(tag: &str) -> Option<Handle> {
        Handle::ALL
            .into_iter()
            .find(|handle| handle.tag().eq_ignore_ascii_case(tag))
    }

    /// The set flag matching this handle.
    pub fn flag(&self) -> Handles {
        match self {
            Handle::LeftTop => Handles::LEFT_TOP,
            Handle::LeftBottom => Handles::LEFT_BOTTOM,
            Handle::RightTop => Handles::RIGHT_TOP,
            Handle::RightBottom => Handles::RIGHT_BOTTOM,
            Handle::Left => Handles::LEFT,
            Handle::Right => Handles::RIGHT,
            Handle::Top => Handles::TOP,
            Handle::Bottom => Handles::BOTTOM,
        }
    }

    /// Cursor shown over this handle.
    pub fn cursor(&self) -> ResizeCursor {
        match self {
            Handle::LeftTop => ResizeCursor::NorthWest,
            Handle::LeftBottom => ResizeCursor::SouthWest,
            Handle::RightTop => ResizeCursor::NorthEast,
            Handle::RightBottom => ResizeCursor::SouthEast,
            Handle::Left => ResizeCursor::West,
            Handle::Right => ResizeCursor::East,
            Handle::Top => ResizeCursor::North,
            Handle::Bottom => ResizeCursor::South,
        }
    }
}

impl std::fmt::Display for Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

bitflags! {
    /// Set of enabled handles.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Handles: u8 {
        const LEFT_TOP     = 0b0000_0001;
        const LEFT_BOTTOM  = 0b0000_0010;
        const RIGHT_TOP    = 0b0000_0100;
        const RIGHT_BOTTOM = 0b0000_1000;
        const LEFT         = 0b0001_0000;
        const RIGHT        = 0b0010_0000;
        const TOP          = 0b0100_0000;
        const BOTTOM       = 0b1000_0000;

        /// The four corners.
        const CORNERS = Self::LEFT_TOP.bits()
            | Self::LEFT_BOTTOM.bits()
            | Self::RIGHT_TOP.bits()
            | Self::RIGHT_BOTTOM.bits();

        /// The four plain edges.
        const SIDES = Self::LEFT.bits()
            | Self::RIGHT.bits()
            | Self::TOP.bits()
            | Self::BOTTOM.bits();
    }
}

impl Handles {
    /// Enabled handles in creation order.
    pub fn handles(&self) -> impl Iterator<Item = Handle> + '_ {
        Handle::ALL
            .into_iter()
            .filter(move |handle| self.contains(handle.flag()))
    }
}

impl Default for Handles {
    fn default() -> Self {
        Self::CORNERS
    }
}

impl From<Handle> for Handles {
    fn from(handle: Handle) -> Self {
        handle.flag()
    }
}
