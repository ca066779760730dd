use super::*;

fn marker(name: &str, x: f64, y: f64) -> PlantMarker {
    PlantMarker {
        id: PlantId::new_v4(),
        name: name.to_owned(),
        kind: None,
        x,
        y,
        planting_date: None,
    }
}

fn engine_with(markers: Vec<PlantMarker>) -> EngineCore {
    let mut core = EngineCore::new();
    core.load_snapshot(markers);
    core
}

fn committed_position(actions: &[Action]) -> Option<Point> {
    actions.iter().find_map(|a| match a {
        Action::PositionCommitted { position, .. } => Some(*position),
        _ => None,
    })
}

// =============================================================
// Pointer-down
// =============================================================

#[test]
fn pointer_down_on_a_marker_arms_the_gesture() {
    let m = marker("Tomato", 100.0, 100.0);
    let id = m.id;
    let mut core = engine_with(vec![m]);

    let actions = core.on_pointer_down(Point::new(110.0, 95.0));

    assert_eq!(
        core.input,
        InputState::Armed {
            id,
            down: Point::new(110.0, 95.0),
            offset: Point::new(10.0, -5.0),
        }
    );
    assert_eq!(actions, vec![Action::SetCursor("grabbing".to_owned())]);
}

#[test]
fn pointer_down_on_empty_space_stays_idle() {
    let mut core = engine_with(vec![marker("Tomato", 100.0, 100.0)]);
    let actions = core.on_pointer_down(Point::new(500.0, 500.0));
    assert_eq!(core.input, InputState::Idle);
    assert!(actions.is_empty());
}

#[test]
fn pointer_down_on_overlapping_markers_arms_the_first_in_list_order() {
    let first = marker("First", 300.0, 300.0);
    let second = marker("Second", 300.0, 300.0);
    let first_id = first.id;
    let mut core = engine_with(vec![first, second]);

    core.on_pointer_down(Point::new(300.0, 300.0));
    assert_eq!(core.input.active_marker(), Some(first_id));
}

// =============================================================
// Click vs. drag disambiguation
// =============================================================

#[test]
fn release_within_the_threshold_is_a_select_not_a_move() {
    let m = marker("Basil", 100.0, 100.0);
    let id = m.id;
    let mut core = engine_with(vec![m]);

    core.on_pointer_down(Point::new(100.0, 100.0));
    // 4 px of travel — under the 5 px threshold.
    let move_actions = core.on_pointer_move(Point::new(104.0, 100.0));
    assert!(move_actions.is_empty());
    assert!(matches!(core.input, InputState::Armed { .. }));

    let up_actions = core.on_pointer_up(Point::new(104.0, 100.0));
    assert!(up_actions.contains(&Action::MarkerSelected(id)));
    assert!(committed_position(&up_actions).is_none());
    assert_eq!(core.selection(), Some(id));
    assert_eq!(core.input, InputState::Idle);
}

#[test]
fn travel_exactly_at_the_threshold_stays_armed() {
    let mut core = engine_with(vec![marker("Basil", 100.0, 100.0)]);
    core.on_pointer_down(Point::new(100.0, 100.0));
    core.on_pointer_move(Point::new(105.0, 100.0));
    assert!(matches!(core.input, InputState::Armed { .. }));
}

#[test]
fn crossing_the_threshold_starts_a_drag() {
    let m = marker("Basil", 100.0, 100.0);
    let id = m.id;
    let mut core = engine_with(vec![m]);

    core.on_pointer_down(Point::new(100.0, 100.0));
    let actions = core.on_pointer_move(Point::new(106.0, 100.0));

    assert!(core.input.is_dragging(&id));
    assert_eq!(actions, vec![Action::RenderNeeded]);
    // The marker already tracks the pointer.
    assert_eq!(core.marker(&id).map(PlantMarker::position), Some(Point::new(106.0, 100.0)));
}

#[test]
fn a_path_that_exceeded_the_threshold_commits_even_if_it_returns_to_the_start() {
    let m = marker("Basil", 100.0, 100.0);
    let id = m.id;
    let mut core = engine_with(vec![m]);

    core.on_pointer_down(Point::new(100.0, 100.0));
    core.on_pointer_move(Point::new(120.0, 100.0));
    core.on_pointer_move(Point::new(101.0, 100.0));
    let actions = core.on_pointer_up(Point::new(101.0, 100.0));

    assert!(!actions.contains(&Action::MarkerSelected(id)));
    assert_eq!(committed_position(&actions), Some(Point::new(101.0, 100.0)));
}

// =============================================================
// Live drag
// =============================================================

#[test]
fn dragging_tracks_the_pointer_with_the_grab_offset() {
    let m = marker("Pepper", 100.0, 100.0);
    let id = m.id;
    let mut core = engine_with(vec![m]);

    // Grab 10 px right of center.
    core.on_pointer_down(Point::new(110.0, 100.0));
    core.on_pointer_move(Point::new(130.0, 100.0));
    core.on_pointer_move(Point::new(200.0, 250.0));

    assert_eq!(core.marker(&id).map(PlantMarker::position), Some(Point::new(190.0, 250.0)));
}

#[test]
fn live_positions_are_clamped_to_the_canvas() {
    let m = marker("Pepper", 50.0, 50.0);
    let id = m.id;
    let mut core = engine_with(vec![m]);

    core.on_pointer_down(Point::new(50.0, 50.0));
    core.on_pointer_move(Point::new(-100.0, 300.0));

    assert_eq!(core.marker(&id).map(PlantMarker::position), Some(Point::new(25.0, 300.0)));
}

// =============================================================
// Commit
// =============================================================

#[test]
fn releasing_a_drag_commits_the_clamped_release_point() {
    let m = marker("Spinach", 100.0, 300.0);
    let mut core = engine_with(vec![m]);

    core.on_pointer_down(Point::new(100.0, 300.0));
    core.on_pointer_move(Point::new(60.0, 300.0));
    let actions = core.on_pointer_up(Point::new(10.0, 300.0));

    // 800×600 canvas, radius 25: raw (10, 300) clamps to (25, 300).
    assert_eq!(committed_position(&actions), Some(Point::new(25.0, 300.0)));
    assert!(actions.contains(&Action::RenderNeeded));
    assert_eq!(core.input, InputState::Idle);
}

#[test]
fn the_scene_reflects_the_committed_position_immediately() {
    let m = marker("Spinach", 100.0, 100.0);
    let id = m.id;
    let mut core = engine_with(vec![m]);

    core.on_pointer_down(Point::new(100.0, 100.0));
    core.on_pointer_move(Point::new(150.0, 150.0));
    core.on_pointer_up(Point::new(200.0, 150.0));

    assert_eq!(core.marker(&id).map(PlantMarker::position), Some(Point::new(200.0, 150.0)));
}

#[test]
fn identical_release_points_commit_identical_positions() {
    let run = || {
        let m = marker("Spinach", 100.0, 100.0);
        let mut core = engine_with(vec![m]);
        core.on_pointer_down(Point::new(100.0, 100.0));
        core.on_pointer_move(Point::new(300.0, 200.0));
        committed_position(&core.on_pointer_up(Point::new(900.0, -40.0)))
    };
    assert_eq!(run(), run());
    assert_eq!(run(), Some(Point::new(775.0, 25.0)));
}

// =============================================================
// Placement
// =============================================================

#[test]
fn release_over_empty_space_requests_placement_at_that_exact_point() {
    let mut core = engine_with(vec![marker("Tomato", 100.0, 100.0)]);
    let actions = core.on_pointer_up(Point::new(417.0, 230.5));
    assert_eq!(actions, vec![Action::PlacementRequested(Point::new(417.0, 230.5))]);
}

#[test]
fn release_over_a_marker_with_no_armed_gesture_does_nothing() {
    // The press happened over empty space; releasing on a marker is neither
    // a select nor a placement.
    let mut core = engine_with(vec![marker("Tomato", 100.0, 100.0)]);
    let actions = core.on_pointer_up(Point::new(100.0, 100.0));
    assert!(actions.is_empty());
}

#[test]
fn placement_is_requested_on_an_empty_canvas() {
    let mut core = engine_with(Vec::new());
    let actions = core.on_pointer_up(Point::new(10.0, 10.0));
    assert_eq!(actions, vec![Action::PlacementRequested(Point::new(10.0, 10.0))]);
}

// =============================================================
// Hover affordance
// =============================================================

#[test]
fn idle_moves_update_the_hover_cursor() {
    let mut core = engine_with(vec![marker("Tomato", 100.0, 100.0)]);
    assert_eq!(
        core.on_pointer_move(Point::new(100.0, 100.0)),
        vec![Action::SetCursor("grab".to_owned())]
    );
    assert_eq!(
        core.on_pointer_move(Point::new(500.0, 500.0)),
        vec![Action::SetCursor("crosshair".to_owned())]
    );
}

// =============================================================
// Snapshot reloads and rollback
// =============================================================

#[test]
fn a_failed_commit_rolls_back_via_an_authoritative_snapshot() {
    let m = marker("Lettuce", 100.0, 100.0);
    let id = m.id;
    let authoritative = m.clone();
    let mut core = engine_with(vec![m]);

    core.on_pointer_down(Point::new(100.0, 100.0));
    core.on_pointer_move(Point::new(200.0, 150.0));
    let actions = core.on_pointer_up(Point::new(200.0, 150.0));
    assert_eq!(committed_position(&actions), Some(Point::new(200.0, 150.0)));

    // Persistence failed; the host refetches and reloads the old truth.
    core.load_snapshot(vec![authoritative]);
    assert_eq!(core.marker(&id).map(PlantMarker::position), Some(Point::new(100.0, 100.0)));
}

#[test]
fn snapshot_reload_drops_a_gesture_whose_marker_vanished() {
    let m = marker("Lettuce", 100.0, 100.0);
    let mut core = engine_with(vec![m]);

    core.on_pointer_down(Point::new(100.0, 100.0));
    core.on_pointer_move(Point::new(150.0, 150.0));
    assert!(matches!(core.input, InputState::Dragging { .. }));

    core.load_snapshot(Vec::new());
    assert_eq!(core.input, InputState::Idle);
}

#[test]
fn snapshot_reload_keeps_a_gesture_whose_marker_survived() {
    let m = marker("Lettuce", 100.0, 100.0);
    let refreshed = m.clone();
    let mut core = engine_with(vec![m]);

    core.on_pointer_down(Point::new(100.0, 100.0));
    core.load_snapshot(vec![refreshed]);
    assert!(matches!(core.input, InputState::Armed { .. }));
}

#[test]
fn snapshot_reload_drops_a_selection_whose_marker_vanished() {
    let m = marker("Lettuce", 100.0, 100.0);
    let mut core = engine_with(vec![m]);

    core.on_pointer_down(Point::new(100.0, 100.0));
    core.on_pointer_up(Point::new(100.0, 100.0));
    assert!(core.selection().is_some());

    core.load_snapshot(Vec::new());
    assert!(core.selection().is_none());
}

#[test]
fn a_drag_whose_marker_vanished_mid_gesture_commits_nothing() {
    let m = marker("Lettuce", 100.0, 100.0);
    let mut core = engine_with(vec![m]);

    core.on_pointer_down(Point::new(100.0, 100.0));
    core.on_pointer_move(Point::new(150.0, 150.0));

    // Simulate a concurrent deletion arriving while the scene is untouched
    // by the reload guard (the marker list is swapped out from under the
    // drag, then the drag continues).
    core.scene.load_snapshot(Vec::new());
    let move_actions = core.on_pointer_move(Point::new(160.0, 160.0));
    assert_eq!(move_actions, vec![Action::RenderNeeded]);
    assert_eq!(core.input, InputState::Idle);
}
