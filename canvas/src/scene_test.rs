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

// =============================================================
// PlantMarker
// =============================================================

#[test]
fn position_reads_the_marker_center() {
    let m = marker("Basil", 120.0, 45.0);
    assert_eq!(m.position(), Point::new(120.0, 45.0));
}

#[test]
fn deserializes_backend_field_names() {
    let json = r#"{
        "id": "00000000-0000-0000-0000-000000000001",
        "name": "Tomato 1",
        "type": "Tomato",
        "x": 100.0,
        "y": 200.0,
        "planting-date": "2025-04-01"
    }"#;
    let m: PlantMarker = serde_json::from_str(json).unwrap();
    assert_eq!(m.name, "Tomato 1");
    assert_eq!(m.kind.as_deref(), Some("Tomato"));
    assert_eq!(m.planting_date.as_deref(), Some("2025-04-01"));
    assert_eq!(m.position(), Point::new(100.0, 200.0));
}

#[test]
fn tolerates_markers_without_type_or_date() {
    let json = r#"{
        "id": "00000000-0000-0000-0000-000000000002",
        "name": "Mystery",
        "x": 1.0,
        "y": 2.0
    }"#;
    let m: PlantMarker = serde_json::from_str(json).unwrap();
    assert!(m.kind.is_none());
    assert!(m.planting_date.is_none());
}

#[test]
fn serializing_skips_absent_optional_fields() {
    let m = marker("Basil", 10.0, 20.0);
    let value = serde_json::to_value(&m).unwrap();
    let obj = value.as_object().unwrap();
    assert!(!obj.contains_key("type"));
    assert!(!obj.contains_key("planting-date"));
}

// =============================================================
// SceneModel
// =============================================================

#[test]
fn new_scene_is_empty() {
    let scene = SceneModel::new();
    assert!(scene.is_empty());
    assert_eq!(scene.len(), 0);
}

#[test]
fn load_snapshot_replaces_all_markers() {
    let mut scene = SceneModel::new();
    scene.load_snapshot(vec![marker("A", 0.0, 0.0), marker("B", 1.0, 1.0)]);
    assert_eq!(scene.len(), 2);

    let replacement = marker("C", 2.0, 2.0);
    let replacement_id = replacement.id;
    scene.load_snapshot(vec![replacement]);
    assert_eq!(scene.len(), 1);
    assert!(scene.contains(&replacement_id));
}

#[test]
fn load_snapshot_preserves_list_order() {
    let a = marker("A", 0.0, 0.0);
    let b = marker("B", 1.0, 1.0);
    let c = marker("C", 2.0, 2.0);
    let ids = [a.id, b.id, c.id];

    let mut scene = SceneModel::new();
    scene.load_snapshot(vec![a, b, c]);
    let stored: Vec<PlantId> = scene.markers().iter().map(|m| m.id).collect();
    assert_eq!(stored, ids);
}

#[test]
fn get_finds_a_marker_by_id() {
    let m = marker("Pepper", 50.0, 60.0);
    let id = m.id;
    let mut scene = SceneModel::new();
    scene.load_snapshot(vec![m]);
    assert_eq!(scene.get(&id).map(|m| m.name.as_str()), Some("Pepper"));
}

#[test]
fn get_returns_none_for_unknown_id() {
    let scene = SceneModel::new();
    assert!(scene.get(&PlantId::new_v4()).is_none());
}

#[test]
fn set_position_moves_an_existing_marker() {
    let m = marker("Lettuce", 10.0, 10.0);
    let id = m.id;
    let mut scene = SceneModel::new();
    scene.load_snapshot(vec![m]);

    assert!(scene.set_position(&id, Point::new(200.0, 150.0)));
    assert_eq!(scene.get(&id).map(PlantMarker::position), Some(Point::new(200.0, 150.0)));
}

#[test]
fn set_position_returns_false_for_a_vanished_marker() {
    let mut scene = SceneModel::new();
    scene.load_snapshot(vec![marker("A", 0.0, 0.0)]);
    assert!(!scene.set_position(&PlantId::new_v4(), Point::new(5.0, 5.0)));
}

#[test]
fn set_position_does_not_disturb_other_markers() {
    let a = marker("A", 1.0, 1.0);
    let b = marker("B", 2.0, 2.0);
    let (a_id, b_id) = (a.id, b.id);
    let mut scene = SceneModel::new();
    scene.load_snapshot(vec![a, b]);

    scene.set_position(&a_id, Point::new(99.0, 99.0));
    assert_eq!(scene.get(&b_id).map(PlantMarker::position), Some(Point::new(2.0, 2.0)));
}
