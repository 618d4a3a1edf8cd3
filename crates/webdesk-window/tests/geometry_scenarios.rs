//! Window Geometry Scenario Tests
//!
//! End-to-end drag, snap, maximize, and resize flows through the public API.

use webdesk_window::{
    GeometryConfig, PreviewChange, Rect, ResizeDirection, Screen, SnapSide, SnapZone, StateKind,
    Vec2, WindowGeometryController, WindowState,
};

const SCREEN: Screen = Screen::new(1920.0, 1080.0, 48.0);

fn window_at(rect: Rect) -> WindowGeometryController {
    WindowGeometryController::new(rect, GeometryConfig::default())
}

/// Dragging to the top edge previews, then commits a maximize on release.
#[test]
fn test_drag_to_top_maximizes() {
    let original = Rect::new(100.0, 100.0, 600.0, 400.0);
    let mut ctl = window_at(original);

    ctl.begin_drag(Vec2::new(150.0, 120.0)).unwrap();
    let tick = ctl.update_drag(Vec2::new(140.0, 5.0), &SCREEN).unwrap();
    assert_eq!(tick.preview, Some(PreviewChange::Show(SnapZone::Top)));

    let end = ctl.end_drag(Vec2::new(140.0, 1.0), &SCREEN).unwrap();
    assert_eq!(end.change.kind, StateKind::Maximized);
    assert_eq!(end.change.rect, Rect::new(0.0, 0.0, 1920.0, 1032.0));
    assert_eq!(end.preview, PreviewChange::Hide);
    assert_eq!(ctl.state(), &WindowState::Maximized { saved: original });

    // Restoring returns the pre-drag geometry exactly
    let back = ctl.toggle_maximize(&SCREEN).unwrap();
    assert_eq!(back.rect, original);
    assert_eq!(back.kind, StateKind::Free);
}

/// Switching snap sides keeps the rect saved before the first snap.
#[test]
fn test_snap_side_switch_keeps_saved_rect() {
    let saved = Rect::new(50.0, 50.0, 500.0, 300.0);
    let mut ctl = window_at(saved);

    ctl.snap(SnapSide::Left, &SCREEN).unwrap();
    let change = ctl.snap(SnapSide::Right, &SCREEN).unwrap();

    assert_eq!(change.kind, StateKind::Snapped(SnapSide::Right));
    assert_eq!(change.rect, Rect::new(0.0, 960.0, 960.0, 1032.0));
    assert_eq!(
        ctl.state(),
        &WindowState::Snapped {
            side: SnapSide::Right,
            saved
        }
    );

    // Bouncing back and forth never overwrites it
    ctl.snap(SnapSide::Left, &SCREEN).unwrap();
    ctl.snap(SnapSide::Right, &SCREEN).unwrap();
    assert_eq!(ctl.state().saved_rect(), Some(saved));

    // Maximize from snapped still restores to the free rect
    ctl.toggle_maximize(&SCREEN).unwrap();
    assert_eq!(ctl.toggle_maximize(&SCREEN).unwrap().rect, saved);
}

/// Dragging a maximized window keeps the cursor over the same point.
#[test]
fn test_unmaximize_drag_has_no_jump() {
    let saved = Rect::new(200.0, 300.0, 640.0, 480.0);
    // Maximized frame whose title bar starts at (300, 200)
    let mut ctl = WindowGeometryController::from_parts(
        Rect::new(200.0, 300.0, 1620.0, 832.0),
        WindowState::Maximized { saved },
        GeometryConfig::default(),
    );

    let pointer = Vec2::new(320.0, 210.0);
    let change = ctl.begin_drag(pointer).unwrap();
    assert_eq!(change.kind, StateKind::Free);
    assert_eq!(change.rect, saved);
    assert_eq!(pointer - change.rect.origin(), Vec2::new(20.0, 10.0));

    // The drag continues from the restored rect
    let tick = ctl.update_drag(Vec2::new(420.0, 260.0), &SCREEN).unwrap();
    assert_eq!(tick.rect, Rect::new(250.0, 400.0, 640.0, 480.0));
}

/// Dragging a window maximized through the normal path.
#[test]
fn test_unmaximize_drag_from_full_screen() {
    let saved = Rect::new(200.0, 300.0, 640.0, 480.0);
    let mut ctl = window_at(saved);
    ctl.toggle_maximize(&SCREEN).unwrap();

    let pointer = Vec2::new(320.0, 10.0);
    let change = ctl.begin_drag(pointer).unwrap();
    assert_eq!(change.rect, Rect::new(0.0, 0.0, 640.0, 480.0));
    assert!(change.rect.contains(pointer));

    // Dropping it elsewhere leaves it free with the saved size
    let end = ctl.end_drag(Vec2::new(700.0, 300.0), &SCREEN).unwrap();
    assert_eq!(end.change.kind, StateKind::Free);
    assert_eq!(end.change.rect, Rect::new(290.0, 380.0, 640.0, 480.0));
}

/// Right-edge resize never drops below the minimum width or moves left.
#[test]
fn test_resize_right_floor() {
    let config = GeometryConfig::default();
    let mut ctl = window_at(Rect::new(100.0, 100.0, config.min_width, 400.0));

    assert!(ctl.begin_resize(ResizeDirection::R, Vec2::new(350.0, 300.0)));
    let rect = ctl.update_resize(Vec2::new(-650.0, 300.0)).unwrap();
    assert_eq!(rect.width, config.min_width);
    assert_eq!(rect.left, 100.0);
    assert!(ctl.end_resize());
    assert_eq!(ctl.kind(), StateKind::Free);
}

/// Top-left corner: width underflow holds the horizontal axis only.
#[test]
fn test_resize_corner_gates_each_axis() {
    let start = Rect::new(100.0, 100.0, 600.0, 400.0);
    let mut ctl = window_at(start);
    let grab = Vec2::new(100.0, 100.0);

    assert!(ctl.begin_resize(ResizeDirection::Tl, grab));
    let rect = ctl.update_resize(grab + Vec2::new(500.0, 50.0)).unwrap();
    assert_eq!(rect.width, 600.0);
    assert_eq!(rect.left, 100.0);
    assert_eq!(rect.height, 350.0);
    assert_eq!(rect.top, 150.0);

    // Once dx is back within range the horizontal axis follows again
    let rect = ctl.update_resize(grab + Vec2::new(100.0, 50.0)).unwrap();
    assert_eq!(rect, Rect::new(150.0, 200.0, 500.0, 350.0));
}

/// Minimize and restore are exact for every visible state.
#[test]
fn test_minimize_restore_every_state() {
    let start = Rect::new(120.0, 80.0, 700.0, 500.0);

    let setups: [fn(&mut WindowGeometryController); 3] = [
        |_| {},
        |ctl| {
            ctl.toggle_maximize(&SCREEN);
        },
        |ctl| {
            ctl.snap(SnapSide::Left, &SCREEN);
        },
    ];

    for setup in setups {
        let mut ctl = window_at(start);
        setup(&mut ctl);
        let state = ctl.state().clone();
        let rect = ctl.rect();

        let hidden = ctl.minimize().unwrap();
        assert_eq!(hidden.kind, StateKind::Minimized);
        assert_eq!(hidden.rect, rect);

        let shown = ctl.restore().unwrap();
        assert_eq!(ctl.state(), &state);
        assert_eq!(shown.rect, rect);
    }
}

/// Snap halves tile the viewport width for odd and even sizes.
#[test]
fn test_snap_halves_sum_to_viewport() {
    for (w, h, taskbar) in [(1920.0, 1080.0, 48.0), (1366.0, 768.0, 40.0), (1001.0, 701.0, 0.0)] {
        let screen = Screen::new(w, h, taskbar);
        let mut ctl = window_at(Rect::new(10.0, 10.0, 400.0, 300.0));
        let left = ctl.snap(SnapSide::Left, &screen).unwrap().rect;
        let right = ctl.snap(SnapSide::Right, &screen).unwrap().rect;
        assert_eq!(left.width + right.width, w);
        assert_eq!(left.height, h - taskbar);
        assert_eq!(right.height, h - taskbar);
    }
}

/// Focus loss mid-drag tears the session down without committing a snap.
#[test]
fn test_blur_mid_drag() {
    let mut ctl = window_at(Rect::new(100.0, 100.0, 600.0, 400.0));
    ctl.begin_drag(Vec2::new(150.0, 120.0)).unwrap();
    ctl.update_drag(Vec2::new(1.0, 400.0), &SCREEN).unwrap();

    assert_eq!(ctl.cancel_session(), Some(PreviewChange::Hide));
    assert_eq!(ctl.kind(), StateKind::Free);
    assert!(ctl.end_drag(Vec2::new(0.0, 400.0), &SCREEN).is_none());
    assert!(ctl.update_drag(Vec2::new(0.0, 400.0), &SCREEN).is_none());
}

/// Custom limits loaded from JSON drive snapping and resizing.
#[test]
fn test_custom_config() {
    let config = GeometryConfig::from_json(
        r#"{"min_width": 320, "min_height": 200, "snap_threshold": 30, "commit_edge": 4}"#,
    )
    .unwrap();
    let mut ctl = WindowGeometryController::new(Rect::new(100.0, 100.0, 600.0, 400.0), config);

    ctl.begin_drag(Vec2::new(150.0, 120.0)).unwrap();
    let tick = ctl.update_drag(Vec2::new(25.0, 500.0), &SCREEN).unwrap();
    assert_eq!(tick.preview, Some(PreviewChange::Show(SnapZone::Left)));
    let end = ctl.end_drag(Vec2::new(3.0, 500.0), &SCREEN).unwrap();
    assert_eq!(end.change.kind, StateKind::Snapped(SnapSide::Left));

    let mut ctl = WindowGeometryController::new(Rect::new(100.0, 100.0, 100.0, 100.0), config);
    assert_eq!(ctl.rect().width, 320.0);
    assert_eq!(ctl.rect().height, 200.0);
    assert!(ctl.begin_resize(ResizeDirection::B, Vec2::ZERO));
    assert_eq!(ctl.update_resize(Vec2::new(0.0, -50.0)).unwrap().height, 200.0);
}
