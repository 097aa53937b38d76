//! Handle manager: creation, placement and lookup of resize zones.

use resizable_core::edges::{Edges, Handle, Handles};
use resizable_core::host::{ElementHost, ZoneId, ZonePlacement, ZoneSpec};

use crate::error::{ResizeError, ResizeResult};

/// Describe the zone for a handle.
///
/// The zone is a `thickness`-sided square straddling every side it borders
/// (offset by half its thickness outward), with a border on those sides.
pub fn zone_spec(handle: Handle, thickness: f32, border_style: &str) -> ZoneSpec {
    let edges = handle.edges();
    let offset = Some(-thickness / 2.0);
    let side = |edge: Edges| if edges.contains(edge) { offset } else { None };

    ZoneSpec {
        handle,
        size: thickness,
        placement: ZonePlacement {
            top: side(Edges::TOP),
            bottom: side(Edges::BOTTOM),
            left: side(Edges::LEFT),
            right: side(Edges::RIGHT),
        },
        borders: edges,
        border_style: border_style.to_string(),
        cursor: handle.cursor(),
    }
}

/// Zones currently materialized on an element.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ZoneSet {
    zones: Vec<(ZoneId, Handle)>,
}

impl ZoneSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self { zones: Vec::new() }
    }

    /// Handle that owns a zone id.
    pub fn handle_for(&self, id: ZoneId) -> Option<Handle> {
        self.zones
            .iter()
            .find(|(zone, _)| *zone == id)
            .map(|(_, handle)| *handle)
    }

    /// Zone id created for a handle.
    pub fn zone_for(&self, handle: Handle) -> Option<ZoneId> {
        self.zones
            .iter()
            .find(|(_, h)| *h == handle)
            .map(|(zone, _)| *zone)
    }

    /// Ids in creation order.
    pub fn ids(&self) -> impl Iterator<Item = ZoneId> + '_ {
        self.zones.iter().map(|(zone, _)| *zone)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

/// Create one zone per enabled handle.
///
/// If the host fails part-way, the zones created so far are removed before
/// the error is returned.
pub fn create_zones<H: ElementHost + ?Sized>(
    host: &H,
    handles: Handles,
    thickness: f32,
    border_style: &str,
) -> ResizeResult<ZoneSet> {
    let mut set = ZoneSet::new();

    for handle in handles.handles() {
        let spec = zone_spec(handle, thickness, border_style);
        match host.insert_zone(&spec) {
            Ok(id) => set.zones.push((id, handle)),
            Err(source) => {
                tracing::warn!("Failed to create {} zone: {}", handle, source);
                destroy_zones(host, &mut set);
                return Err(ResizeError::ZoneCreation { handle, source });
            }
        }
    }

    tracing::debug!("Created {} resize zones", set.len());
    Ok(set)
}

/// Remove every zone in the set, leaving it empty.
pub fn destroy_zones<H: ElementHost + ?Sized>(host: &H, zones: &mut ZoneSet) {
    for (id, _) in zones.zones.drain(..) {
        host.remove_zone(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resizable_core::edges::ResizeCursor;
    use resizable_test_utils::MockElementHost;

    #[test]
    fn test_corner_zone_placement() {
        let spec = zone_spec(Handle::LeftTop, 10.0, "1px solid red");

        assert_eq!(spec.size, 10.0);
        assert_eq!(
            spec.placement,
            ZonePlacement {
                top: Some(-5.0),
                bottom: None,
                left: Some(-5.0),
                right: None,
            }
        );
        assert_eq!(spec.borders, Edges::LEFT | Edges::TOP);
        assert_eq!(spec.border_style, "1px solid red");
        assert_eq!(spec.cursor, ResizeCursor::NorthWest);
        assert_eq!(spec.tag(), "leftTop");
    }

    #[test]
    fn test_edge_zone_placement() {
        let spec = zone_spec(Handle::Bottom, 8.0, "none");

        assert_eq!(spec.placement.bottom, Some(-4.0));
        assert_eq!(spec.placement.top, None);
        assert_eq!(spec.placement.left, None);
        assert_eq!(spec.borders, Edges::BOTTOM);
        assert_eq!(spec.cursor.css_name(), "s-resize");
    }

    #[test]
    fn test_create_only_enabled_handles() {
        let host = MockElementHost::new();
        let zones = create_zones(&host, Handles::RIGHT_BOTTOM | Handles::LEFT, 10.0, "x").unwrap();

        assert_eq!(zones.len(), 2);
        assert_eq!(host.zone_count(), 2);
        let id = zones.zone_for(Handle::Left).unwrap();
        assert_eq!(zones.handle_for(id), Some(Handle::Left));
        assert_eq!(zones.zone_for(Handle::LeftTop), None);
    }

    #[test]
    fn test_create_rolls_back_on_failure() {
        let host = MockElementHost::new();
        host.fail_zones_after(2);

        let err = create_zones(&host, Handles::CORNERS, 10.0, "x").unwrap_err();
        assert!(matches!(
            err,
            ResizeError::ZoneCreation {
                handle: Handle::RightTop,
                ..
            }
        ));
        assert_eq!(host.zone_count(), 0);
    }

    #[test]
    fn test_destroy_empties_set() {
        let host = MockElementHost::new();
        let mut zones = create_zones(&host, Handles::CORNERS, 10.0, "x").unwrap();

        destroy_zones(&host, &mut zones);
        assert!(zones.is_empty());
        assert_eq!(host.zone_count(), 0);

        destroy_zones(&host, &mut zones);
        assert_eq!(host.zone_count(), 0);
    }
}
