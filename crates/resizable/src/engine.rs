//! Drag engine: the gesture lifecycle.

use resizable_core::edges::Edges;
use resizable_core::host::ElementHost;
use resizable_core::math::Vec2;
use resizable_core::profiling::profile_function;

use crate::config::ResizeConfig;
use crate::gesture::{Gesture, ResizeFrame};
use crate::listeners::GlobalListeners;

/// A gesture together with the listeners it holds.
#[derive(Debug)]
struct ActiveGesture {
    gesture: Gesture,
    listeners: GlobalListeners,
}

/// Owns the state of the current drag gesture, if any.
///
/// Armed by a pointer-down on a zone, fed every global pointer-move, and
/// disarmed by pointer-up. While armed it holds exactly one
/// [`GlobalListeners`] pair.
#[derive(Debug, Default)]
pub struct DragEngine {
    active: Option<ActiveGesture>,
}

impl DragEngine {
    /// Create an idle engine.
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Check if a gesture is in progress.
    pub fn is_armed(&self) -> bool {
        self.active.is_some()
    }

    /// Get the current gesture.
    pub fn gesture(&self) -> Option<&Gesture> {
        self.active.as_ref().map(|active| &active.gesture)
    }

    /// Listener pair held by the current gesture.
    pub fn listeners(&self) -> Option<&GlobalListeners> {
        self.active.as_ref().map(|active| &active.listeners)
    }

    /// Start a gesture for the given edges.
    ///
    /// Does nothing and returns `false` when the configuration is disabled.
    /// Arming while already armed releases the previous listeners first.
    pub fn arm<H: ElementHost + ?Sized>(
        &mut self,
        host: &H,
        edges: Edges,
        pointer: Vec2,
        config: &ResizeConfig,
    ) -> bool {
        if config.disabled {
            tracing::trace!("Ignoring pointer-down while disabled");
            return false;
        }

        if let Some(previous) = self.active.take() {
            tracing::debug!("Re-arming over an unfinished gesture");
            previous.listeners.release(host);
        }

        let gesture = Gesture::capture(host, edges, pointer, config);
        tracing::debug!(
            "Armed resize {:?}: size={:?} position={:?} offset={:?}",
            edges,
            gesture.origin_size,
            gesture.origin_position,
            gesture.origin_offset
        );

        let listeners = GlobalListeners::acquire(host);
        self.active = Some(ActiveGesture { gesture, listeners });
        true
    }

    /// Feed a pointer-move.
    ///
    /// Returns the applied frame, or `None` when idle or disabled. A
    /// disabled engine stays armed and picks up again once re-enabled.
    pub fn update<H: ElementHost + ?Sized>(
        &mut self,
        host: &H,
        pointer: Vec2,
        disabled: bool,
    ) -> Option<ResizeFrame> {
        profile_function!();

        let active = self.active.as_mut()?;
        if disabled {
            return None;
        }

        let frame = active.gesture.resolve(pointer);
        for write in frame.writes() {
            host.write_style(write);
        }

        if !frame.is_empty() {
            tracing::trace!("Applied resize frame {:?}", frame);
        }
        Some(frame)
    }

    /// End the gesture and release its listeners.
    ///
    /// Only the listeners are touched, so this is safe after the element has
    /// gone away. Returns the finished gesture, or `None` when idle.
    pub fn disarm<H: ElementHost + ?Sized>(&mut self, host: &H) -> Option<Gesture> {
        let active = self.active.take()?;
        active.listeners.release(host);
        tracing::debug!("Disarmed resize {:?}", active.gesture.edges);
        Some(active.gesture)
    }
}
