//! Geometry of one drag gesture.
//!
//! A [`Gesture`] is the snapshot taken when a zone is grabbed. Every
//! pointer-move is resolved against that snapshot (never against the
//! previous move), so the element size always equals the origin size plus
//! the cumulative pointer displacement.

use resizable_core::edges::Edges;
use resizable_core::host::{ElementHost, PositionMode, StyleWrite};
use resizable_core::math::{IVec3, Vec2, Vec3};

use crate::config::{ResizeConfig, SizeBounds};
use crate::transform::decode_translation;

/// Values written to the element for one pointer-move.
///
/// A `None` field was either not affected by the grabbed zone or rejected
/// by the size bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResizeFrame {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub left: Option<f32>,
    pub top: Option<f32>,
    pub translate: Option<Vec3>,
}

impl ResizeFrame {
    /// True when nothing is written.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Style writes in application order.
    pub fn writes(&self) -> impl Iterator<Item = StyleWrite> {
        [
            self.width.map(StyleWrite::Width),
            self.height.map(StyleWrite::Height),
            self.left.map(StyleWrite::Left),
            self.top.map(StyleWrite::Top),
            self.translate.map(StyleWrite::Translate),
        ]
        .into_iter()
        .flatten()
    }
}

/// State captured when a zone is grabbed.
#[derive(Debug, Clone, PartialEq)]
pub struct Gesture {
    /// Edges moved by the grabbed zone.
    pub edges: Edges,
    /// Client width/height at grab time.
    pub origin_size: Vec2,
    /// Pointer page position at grab time.
    pub origin_pointer: Vec2,
    /// Bounding-box left/top at grab time, translation included.
    pub origin_position: Vec2,
    /// Translation already applied to the element at grab time.
    pub origin_offset: IVec3,
    /// Bounds in effect for this gesture.
    pub bounds: SizeBounds,
    /// Positioning mode in effect for this gesture.
    pub mode: PositionMode,
    /// Translation as of the last accepted position change.
    applied_offset: Vec3,
    /// Pointer sample of the last processed move.
    last_pointer: Vec2,
}

impl Gesture {
    /// Build a gesture from explicit origin values.
    pub fn new(
        edges: Edges,
        origin_size: Vec2,
        origin_pointer: Vec2,
        origin_position: Vec2,
        origin_offset: IVec3,
        bounds: SizeBounds,
        mode: PositionMode,
    ) -> Self {
        Self {
            edges,
            origin_size,
            origin_pointer,
            origin_position,
            origin_offset,
            bounds,
            mode,
            applied_offset: origin_offset.as_vec3(),
            last_pointer: origin_pointer,
        }
    }

    /// Snapshot the element through its host.
    pub fn capture<H: ElementHost + ?Sized>(
        host: &H,
        edges: Edges,
        pointer: Vec2,
        config: &ResizeConfig,
    ) -> Self {
        let size = host.client_size();
        let rect = host.bounding_rect();
        let transform = host.computed_transform();

        Self::new(
            edges,
            Vec2::new(size.width, size.height),
            pointer,
            rect.origin(),
            decode_translation(transform.as_deref()),
            config.bounds(),
            config.position,
        )
    }

    /// Pointer displacement from the grab position.
    pub fn delta(&self, pointer: Vec2) -> Vec2 {
        pointer - self.origin_pointer
    }

    /// Layout left/top at grab time, translation excluded.
    fn origin_layout_position(&self) -> Vec2 {
        self.origin_position - self.origin_offset.truncate().as_vec2()
    }

    /// Resolve a pointer sample into the values to write.
    ///
    /// Each axis is gated by the bounds on its own; a rejected left/top
    /// size also drops its position change. Repeating the previous sample
    /// yields an empty frame.
    pub fn resolve(&mut self, pointer: Vec2) -> ResizeFrame {
        if pointer == self.last_pointer {
            return ResizeFrame::default();
        }
        self.last_pointer = pointer;

        let delta = self.delta(pointer);
        let mut frame = ResizeFrame::default();

        if self.edges.contains(Edges::RIGHT) {
            let width = self.origin_size.x + delta.x;
            if self.bounds.accepts(width) {
                frame.width = Some(width);
            } else {
                tracing::trace!("Rejected width {} from right edge", width);
            }
        }

        if self.edges.contains(Edges::BOTTOM) {
            let height = self.origin_size.y + delta.y;
            if self.bounds.accepts(height) {
                frame.height = Some(height);
            } else {
                tracing::trace!("Rejected height {} from bottom edge", height);
            }
        }

        let mut moved_x = false;
        if self.edges.contains(Edges::LEFT) {
            let width = self.origin_size.x - delta.x;
            if self.bounds.accepts(width) {
                frame.width = Some(width);
                moved_x = true;
            } else {
                tracing::trace!("Rejected width {} from left edge", width);
            }
        }

        let mut moved_y = false;
        if self.edges.contains(Edges::TOP) {
            let height = self.origin_size.y - delta.y;
            if self.bounds.accepts(height) {
                frame.height = Some(height);
                moved_y = true;
            } else {
                tracing::trace!("Rejected height {} from top edge", height);
            }
        }

        if !(moved_x || moved_y) {
            return frame;
        }

        match self.mode {
            PositionMode::Absolute => {
                let layout = self.origin_layout_position() + delta;
                if moved_x {
                    frame.left = Some(layout.x);
                }
                if moved_y {
                    frame.top = Some(layout.y);
                }
            }
            PositionMode::Relative => {
                let offset = self.origin_offset.as_vec3();
                if moved_x {
                    self.applied_offset.x = offset.x + delta.x;
                }
                if moved_y {
                    self.applied_offset.y = offset.y + delta.y;
                }
                frame.translate = Some(self.applied_offset);
            }
        }

        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gesture(edges: Edges, mode: PositionMode) -> Gesture {
        Gesture::new(
            edges,
            Vec2::new(100.0, 100.0),
            Vec2::new(200.0, 200.0),
            Vec2::new(50.0, 50.0),
            IVec3::ZERO,
            SizeBounds::default(),
            mode,
        )
    }

    #[test]
    fn test_right_bottom_corner() {
        let mut g = gesture(Edges::RIGHT | Edges::BOTTOM, PositionMode::Absolute);
        let frame = g.resolve(Vec2::new(250.0, 230.0));

        assert_eq!(frame.width, Some(150.0));
        assert_eq!(frame.height, Some(130.0));
        assert_eq!(frame.left, None);
        assert_eq!(frame.top, None);
        assert_eq!(frame.translate, None);
    }

    #[test]
    fn test_single_edge_leaves_other_axis() {
        let mut g = gesture(Edges::RIGHT, PositionMode::Absolute);
        let frame = g.resolve(Vec2::new(230.0, 280.0));

        assert_eq!(frame.width, Some(130.0));
        assert_eq!(frame.height, None);
    }

    #[test]
    fn test_repeated_sample_is_noop() {
        let mut g = gesture(Edges::RIGHT, PositionMode::Absolute);
        assert!(g.resolve(Vec2::new(200.0, 200.0)).is_empty());
        assert!(!g.resolve(Vec2::new(210.0, 200.0)).is_empty());
        assert!(g.resolve(Vec2::new(210.0, 200.0)).is_empty());
        // Returning to the grab position restores the origin size.
        assert_eq!(g.resolve(Vec2::new(200.0, 200.0)).width, Some(100.0));
    }

    #[test]
    fn test_left_edge_absolute() {
        let mut g = gesture(Edges::LEFT, PositionMode::Absolute);
        let frame = g.resolve(Vec2::new(180.0, 200.0));

        assert_eq!(frame.width, Some(120.0));
        assert_eq!(frame.left, Some(30.0));
        assert_eq!(frame.top, None);
    }

    #[test]
    fn test_left_top_relative_uses_one_sample() {
        let mut g = gesture(Edges::LEFT | Edges::TOP, PositionMode::Relative);
        let frame = g.resolve(Vec2::new(190.0, 215.0));

        assert_eq!(frame.width, Some(110.0));
        assert_eq!(frame.height, Some(85.0));
        assert_eq!(frame.translate, Some(Vec3::new(-10.0, 15.0, 0.0)));
    }

    #[test]
    fn test_rejected_axis_keeps_previous_offset() {
        let mut g = gesture(Edges::LEFT | Edges::TOP, PositionMode::Relative);
        g.resolve(Vec2::new(190.0, 190.0));

        // Height would drop to 10, below the minimum; x still moves.
        let frame = g.resolve(Vec2::new(180.0, 290.0));
        assert_eq!(frame.width, Some(120.0));
        assert_eq!(frame.height, None);
        assert_eq!(frame.translate, Some(Vec3::new(-20.0, -10.0, 0.0)));
    }

    #[test]
    fn test_preexisting_offset_is_kept() {
        let mut g = Gesture::new(
            Edges::LEFT,
            Vec2::new(100.0, 100.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(60.0, 45.0),
            IVec3::new(10, -5, 3),
            SizeBounds::default(),
            PositionMode::Relative,
        );
        let frame = g.resolve(Vec2::new(-15.0, 0.0));
        assert_eq!(frame.translate, Some(Vec3::new(-5.0, -5.0, 3.0)));

        g.mode = PositionMode::Absolute;
        let frame = g.resolve(Vec2::new(-20.0, 0.0));
        // Layout left excludes the translation: 60 - 10 - 20.
        assert_eq!(frame.left, Some(30.0));
        assert_eq!(frame.translate, None);
    }

    #[test]
    fn test_frame_writes_order() {
        let frame = ResizeFrame {
            width: Some(1.0),
            height: None,
            left: Some(2.0),
            top: None,
            translate: None,
        };
        let writes: Vec<_> = frame.writes().collect();
        assert_eq!(writes, vec![StyleWrite::Width(1.0), StyleWrite::Left(2.0)]);
    }
}
