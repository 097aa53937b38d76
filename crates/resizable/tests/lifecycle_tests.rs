//! Attach/update/detach lifecycle tests.

use resizable::{
    Handle, Handles, PositionMode, ResizeConfig, ResizeError, ResizeOptions, Resizable,
    StyleWrite,
};
use resizable_core::math::Vec2;
use resizable_test_utils::{HostCall, MockElementHost};

#[test]
fn test_attach_creates_default_corner_zones() {
    let host = MockElementHost::with_box(0.0, 0.0, 100.0, 100.0);
    let resizable = Resizable::attach(&host, ResizeOptions::default()).unwrap();

    assert_eq!(resizable.zones().len(), 4);
    assert_eq!(host.zone_count(), 4);
    assert_eq!(host.position_mode(), Some(PositionMode::Absolute));

    let zone = host.zone(host.zone_for(Handle::RightBottom).unwrap()).unwrap();
    assert_eq!(zone.size, 10.0);
    assert_eq!(zone.placement.right, Some(-5.0));
    assert_eq!(zone.placement.bottom, Some(-5.0));
    assert_eq!(zone.border_style, "2px solid rgba(0, 0, 0, 0.4)");
    assert_eq!(zone.cursor.css_name(), "se-resize");
}

#[test]
fn test_disabled_handles_are_not_created() {
    let host = MockElementHost::new();
    let options = ResizeOptions {
        handles: Some(Handles::LEFT_TOP | Handles::RIGHT),
        ..Default::default()
    };
    let _resizable = Resizable::attach(&host, options).unwrap();

    assert_eq!(host.zone_count(), 2);
    assert!(host.zone_for(Handle::LeftTop).is_some());
    assert!(host.zone_for(Handle::Right).is_some());
    assert!(host.zone_for(Handle::RightBottom).is_none());
}

#[test]
fn test_detach_removes_exactly_created_zones() {
    let host = MockElementHost::with_box(0.0, 0.0, 100.0, 100.0);
    let mut resizable = Resizable::attach(&host, ResizeConfig::default()).unwrap();
    let created = host.zone_ids();

    let zone = resizable.zones().zone_for(Handle::LeftBottom).unwrap();
    resizable.pointer_down(zone, Vec2::new(0.0, 100.0));
    host.clear_calls();

    resizable.detach();

    let mut removed: Vec<_> = host
        .calls()
        .into_iter()
        .filter_map(|call| match call {
            HostCall::RemoveZone(id) => Some(id),
            _ => None,
        })
        .collect();
    removed.sort();

    assert_eq!(removed, created);
    assert_eq!(host.zone_count(), 0);
    assert_eq!(host.active_listener_count(), 0);
    assert!(!resizable.is_attached());
}

#[test]
fn test_detach_is_idempotent() {
    let host = MockElementHost::with_box(0.0, 0.0, 100.0, 100.0);
    let mut resizable = Resizable::attach(&host, ResizeConfig::default()).unwrap();

    resizable.detach();
    host.clear_calls();
    resizable.detach();

    assert!(host.calls().is_empty());
}

#[test]
fn test_detach_leaves_element_styles() {
    let host = MockElementHost::with_box(0.0, 0.0, 100.0, 100.0);
    let mut resizable = Resizable::attach(&host, ResizeConfig::default()).unwrap();

    resizable.grab(Handle::RightBottom, Vec2::new(100.0, 100.0));
    resizable.pointer_move(Vec2::new(140.0, 120.0));
    host.clear_calls();
    resizable.detach();

    assert_eq!(host.count_style_writes(), 0);
    assert_eq!((host.width(), host.height()), (140.0, 120.0));
}

#[test]
fn test_drop_detaches() {
    let host = MockElementHost::with_box(0.0, 0.0, 100.0, 100.0);
    {
        let mut resizable = Resizable::attach(&host, ResizeConfig::default()).unwrap();
        resizable.grab(Handle::LeftTop, Vec2::ZERO);
        assert_eq!(host.active_listener_count(), 1);
    }

    assert_eq!(host.zone_count(), 0);
    assert_eq!(host.active_listener_count(), 0);
}

#[test]
fn test_events_after_detach_are_ignored() {
    let host = MockElementHost::with_box(0.0, 0.0, 100.0, 100.0);
    let mut resizable = Resizable::attach(&host, ResizeConfig::default()).unwrap();
    let zone = resizable.zones().zone_for(Handle::RightTop).unwrap();

    resizable.detach();
    host.clear_calls();

    assert!(!resizable.pointer_down(zone, Vec2::ZERO));
    assert!(!resizable.grab(Handle::RightTop, Vec2::ZERO));
    assert!(resizable.pointer_move(Vec2::new(10.0, 10.0)).is_none());
    assert!(!resizable.pointer_up());
    assert!(host.calls().is_empty());
    assert_eq!(
        resizable.update(ResizeConfig::default()),
        Err(ResizeError::Detached)
    );
}

#[test]
fn test_update_replaces_whole_config() {
    let host = MockElementHost::new();
    let first = ResizeOptions {
        minimum_size: Some(50.0),
        maximum_size: Some(300.0),
        disabled: Some(true),
        ..Default::default()
    };
    let mut resizable = Resizable::attach(&host, first).unwrap();

    resizable
        .update(ResizeOptions {
            handle_size: Some(12.0),
            ..Default::default()
        })
        .unwrap();

    let config = resizable.config();
    assert_eq!(config.minimum_size, 20.0);
    assert_eq!(config.maximum_size, None);
    assert!(!config.disabled);
    assert_eq!(config.handle_size, 12.0);
}

#[test]
fn test_update_rebuilds_zones_when_handles_change() {
    let host = MockElementHost::new();
    let mut resizable = Resizable::attach(&host, ResizeConfig::default()).unwrap();
    let before = host.zone_ids();

    resizable
        .update(ResizeConfig::default().handles(Handles::SIDES))
        .unwrap();

    assert_eq!(host.zone_count(), 4);
    assert!(host.zone_ids().iter().all(|id| !before.contains(id)));
    assert!(host.zone_for(Handle::Top).is_some());
    assert!(host.zone_for(Handle::LeftTop).is_none());

    let zone = resizable.zones().zone_for(Handle::Top).unwrap();
    assert_eq!(resizable.zones().handle_for(zone), Some(Handle::Top));
}

#[test]
fn test_update_keeps_zones_when_unchanged() {
    let host = MockElementHost::new();
    let mut resizable = Resizable::attach(&host, ResizeConfig::default()).unwrap();
    host.clear_calls();

    resizable
        .update(ResizeConfig::default().minimum_size(5.0).maximum_size(500.0))
        .unwrap();

    assert!(host.calls().is_empty());
}

#[test]
fn test_update_writes_new_position_mode() {
    let host = MockElementHost::new();
    let mut resizable = Resizable::attach(&host, ResizeConfig::default()).unwrap();
    host.clear_calls();

    resizable
        .update(ResizeConfig::default().position(PositionMode::Relative))
        .unwrap();

    assert_eq!(
        host.style_writes(),
        vec![StyleWrite::Position(PositionMode::Relative)]
    );
    assert_eq!(host.position_mode(), Some(PositionMode::Relative));
}

#[test]
fn test_gesture_keeps_bounds_it_started_with() {
    let host = MockElementHost::with_box(0.0, 0.0, 100.0, 100.0);
    let mut resizable = Resizable::attach(&host, ResizeConfig::default()).unwrap();

    resizable.grab(Handle::RightBottom, Vec2::new(100.0, 100.0));
    resizable
        .update(ResizeConfig::default().maximum_size(110.0))
        .unwrap();
    resizable.pointer_move(Vec2::new(150.0, 150.0));
    assert_eq!(host.width(), 150.0);
    resizable.pointer_up();

    resizable.grab(Handle::RightBottom, Vec2::new(150.0, 150.0));
    resizable.pointer_move(Vec2::new(160.0, 160.0));
    assert_eq!(host.width(), 150.0);
}

#[test]
fn test_attach_failure_cleans_up() {
    let host = MockElementHost::new();
    host.fail_zones_after(3);

    let err = Resizable::attach(&host, ResizeConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        ResizeError::ZoneCreation {
            handle: Handle::RightBottom,
            ..
        }
    ));
    assert_eq!(host.zone_count(), 0);
    assert!(err.to_string().starts_with("Failed to create rightBottom zone"));
}

#[test]
fn test_unknown_zone_is_ignored() {
    let host = MockElementHost::new();
    let mut resizable = Resizable::attach(&host, ResizeConfig::default()).unwrap();

    assert!(!resizable.pointer_down(resizable::ZoneId(999), Vec2::ZERO));
    assert!(!resizable.is_resizing());
}
