//! Mock implementation of [`ElementHost`] for testing.
//!
//! The mock simulates an element box the way a browser lays out a
//! positioned element: `left`/`top`/`width`/`height` plus a translation.
//! The bounding rect includes the translation and the computed transform is
//! reported in resolved `matrix(...)`/`matrix3d(...)` form.

use parking_lot::Mutex;
use resizable_core::alloc::{HashMap, HashSet};
use resizable_core::edges::Handle;
use resizable_core::geometry::{Rect, Size};
use resizable_core::host::{
    ElementHost, HostError, HostResult, ListenerId, PositionMode, StyleWrite, ZoneId, ZoneSpec,
};
use resizable_core::math::Vec3;

/// Records a host call for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    WriteStyle(StyleWrite),
    InsertZone { id: ZoneId, handle: Handle },
    RemoveZone(ZoneId),
    ListenGlobal(ListenerId),
    UnlistenGlobal(ListenerId),
}

/// Simulated element state.
#[derive(Debug, Clone)]
struct ElementBox {
    left: f32,
    top: f32,
    width: f32,
    height: f32,
    translation: Vec3,
    /// Raw transform reported instead of the resolved matrix, if set.
    transform_override: Option<String>,
    position: Option<PositionMode>,
    removed: bool,
}

/// Mock implementation of [`ElementHost`].
///
/// # Example
///
/// ```rust
/// use resizable_core::host::ElementHost;
/// use resizable_test_utils::MockElementHost;
///
/// let host = MockElementHost::with_box(0.0, 0.0, 100.0, 100.0);
/// let listener = host.listen_global();
/// assert_eq!(host.active_listener_count(), 1);
///
/// host.unlisten_global(listener);
/// assert_eq!(host.active_listener_count(), 0);
/// ```
pub struct MockElementHost {
    element: Mutex<ElementBox>,

    /// Recorded calls for verification
    calls: Mutex<Vec<HostCall>>,

    /// Live zones keyed by id
    zones: Mutex<HashMap<ZoneId, ZoneSpec>>,

    /// Listener pairs that have not been released
    listeners: Mutex<HashSet<ListenerId>>,

    /// Counters for generating IDs
    next_zone_id: Mutex<u64>,
    next_listener_id: Mutex<u64>,

    /// Number of zone insertions that succeed before the next one fails
    fail_zone_after: Mutex<Option<usize>>,
}

impl MockElementHost {
    /// Create a mock element at the origin with zero size.
    pub fn new() -> Self {
        Self::with_box(0.0, 0.0, 0.0, 0.0)
    }

    /// Create a mock element with the given layout box and no transform.
    pub fn with_box(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            element: Mutex::new(ElementBox {
                left,
                top,
                width,
                height,
                translation: Vec3::ZERO,
                transform_override: None,
                position: None,
                removed: false,
            }),
            calls: Mutex::new(Vec::new()),
            zones: Mutex::new(HashMap::new()),
            listeners: Mutex::new(HashSet::new()),
            next_zone_id: Mutex::new(1),
            next_listener_id: Mutex::new(1),
            fail_zone_after: Mutex::new(None),
        }
    }

    /// Apply an existing translation, as if set by unrelated code.
    pub fn with_translation(self, translation: Vec3) -> Self {
        self.element.lock().translation = translation;
        self
    }

    /// Report this string verbatim as the computed transform.
    pub fn with_transform_override(self, transform: impl Into<String>) -> Self {
        self.element.lock().transform_override = Some(transform.into());
        self
    }

    /// Let `count` zone insertions succeed, then fail every following one.
    pub fn fail_zones_after(&self, count: usize) {
        *self.fail_zone_after.lock() = Some(count);
    }

    /// Simulate the element being removed from its document.
    pub fn remove_element(&self) {
        self.element.lock().removed = true;
    }

    // Element state

    pub fn width(&self) -> f32 {
        self.element.lock().width
    }

    pub fn height(&self) -> f32 {
        self.element.lock().height
    }

    /// Layout left coordinate, translation excluded.
    pub fn left(&self) -> f32 {
        self.element.lock().left
    }

    /// Layout top coordinate, translation excluded.
    pub fn top(&self) -> f32 {
        self.element.lock().top
    }

    pub fn translation(&self) -> Vec3 {
        self.element.lock().translation
    }

    pub fn position_mode(&self) -> Option<PositionMode> {
        self.element.lock().position
    }

    /// Left edge on screen, translation included.
    pub fn visual_left(&self) -> f32 {
        let element = self.element.lock();
        element.left + element.translation.x
    }

    /// Top edge on screen, translation included.
    pub fn visual_top(&self) -> f32 {
        let element = self.element.lock();
        element.top + element.translation.y
    }

    // Call inspection

    /// Get all recorded calls.
    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().clone()
    }

    /// Clear recorded calls.
    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    /// Style writes recorded so far.
    pub fn style_writes(&self) -> Vec<StyleWrite> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                HostCall::WriteStyle(write) => Some(*write),
                _ => None,
            })
            .collect()
    }

    pub fn count_style_writes(&self) -> usize {
        self.style_writes().len()
    }

    /// Ids of zones currently present on the element.
    pub fn zone_ids(&self) -> Vec<ZoneId> {
        let mut ids: Vec<_> = self.zones.lock().keys().copied().collect();
        ids.sort();
        ids
    }

    /// Spec of a live zone.
    pub fn zone(&self, id: ZoneId) -> Option<ZoneSpec> {
        self.zones.lock().get(&id).cloned()
    }

    /// Live zone id for a handle.
    pub fn zone_for(&self, handle: Handle) -> Option<ZoneId> {
        self.zones
            .lock()
            .iter()
            .find(|(_, spec)| spec.handle == handle)
            .map(|(id, _)| *id)
    }

    pub fn zone_count(&self) -> usize {
        self.zones.lock().len()
    }

    pub fn active_listener_count(&self) -> usize {
        self.listeners.lock().len()
    }

    fn record(&self, call: HostCall) {
        self.calls.lock().push(call);
    }
}

impl Default for MockElementHost {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolved transform string for a pure translation.
fn resolved_transform(translation: Vec3) -> Option<String> {
    if translation == Vec3::ZERO {
        None
    } else if translation.z == 0.0 {
        Some(format!(
            "matrix(1, 0, 0, 1, {}, {})",
            translation.x, translation.y
        ))
    } else {
        Some(format!(
            "matrix3d(1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, {}, {}, {}, 1)",
            translation.x, translation.y, translation.z
        ))
    }
}

impl ElementHost for MockElementHost {
    fn client_size(&self) -> Size<f32> {
        let element = self.element.lock();
        if element.removed {
            return Size::default();
        }
        Size::new(element.width, element.height)
    }

    fn bounding_rect(&self) -> Rect<f32> {
        let element = self.element.lock();
        if element.removed {
            return Rect::default();
        }
        Rect::new(
            element.left + element.translation.x,
            element.top + element.translation.y,
            element.width,
            element.height,
        )
    }

    fn computed_transform(&self) -> Option<String> {
        let element = self.element.lock();
        match &element.transform_override {
            Some(raw) => Some(raw.clone()),
            None => resolved_transform(element.translation),
        }
    }

    fn write_style(&self, write: StyleWrite) {
        self.record(HostCall::WriteStyle(write));

        let mut element = self.element.lock();
        match write {
            StyleWrite::Width(width) => element.width = width,
            StyleWrite::Height(height) => element.height = height,
            StyleWrite::Left(left) => element.left = left,
            StyleWrite::Top(top) => element.top = top,
            StyleWrite::Translate(translation) => {
                element.translation = translation;
                element.transform_override = None;
            }
            StyleWrite::Position(mode) => element.position = Some(mode),
        }
    }

    fn insert_zone(&self, spec: &ZoneSpec) -> HostResult<ZoneId> {
        if self.element.lock().removed {
            return Err(HostError::ElementDetached);
        }

        {
            let mut fail_after = self.fail_zone_after.lock();
            if let Some(remaining) = fail_after.as_mut() {
                if *remaining == 0 {
                    return Err(HostError::ZoneCreation(format!(
                        "mock refused zone {}",
                        spec.tag()
                    )));
                }
                *remaining -= 1;
            }
        }

        let id = {
            let mut next = self.next_zone_id.lock();
            let id = ZoneId(*next);
            *next += 1;
            id
        };

        self.zones.lock().insert(id, spec.clone());
        self.record(HostCall::InsertZone {
            id,
            handle: spec.handle,
        });
        Ok(id)
    }

    fn remove_zone(&self, id: ZoneId) {
        self.zones.lock().remove(&id);
        self.record(HostCall::RemoveZone(id));
    }

    fn listen_global(&self) -> ListenerId {
        let id = {
            let mut next = self.next_listener_id.lock();
            let id = ListenerId(*next);
            *next += 1;
            id
        };

        self.listeners.lock().insert(id);
        self.record(HostCall::ListenGlobal(id));
        id
    }

    fn unlisten_global(&self, id: ListenerId) {
        self.listeners.lock().remove(&id);
        self.record(HostCall::UnlistenGlobal(id));
    }
}
