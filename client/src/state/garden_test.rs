use super::*;

// =============================================================
// GardenState
// =============================================================

#[test]
fn default_state_has_nothing_open() {
    let state = GardenState::default();
    assert!(state.garden_id.is_none());
    assert!(state.info.is_none());
    assert!(state.error.is_none());
    assert!(state.selected.is_none());
    assert!(state.pending_placement.is_none());
    assert_eq!(state.plants_refresh_seq, 0);
}

#[test]
fn refresh_requests_bump_the_sequence() {
    let mut state = GardenState::default();
    state.request_plants_refresh();
    state.request_plants_refresh();
    assert_eq!(state.plants_refresh_seq, 2);
}

#[test]
fn reset_for_clears_stale_page_state() {
    let mut state = GardenState {
        garden_id: Some("old".to_owned()),
        error: Some("Failed to fetch plants".to_owned()),
        pending_placement: Some((100.0, 200.0)),
        plants_refresh_seq: 7,
        ..GardenState::default()
    };

    state.reset_for(Some("new".to_owned()));

    assert_eq!(state.garden_id.as_deref(), Some("new"));
    assert!(state.error.is_none());
    assert!(state.pending_placement.is_none());
    assert_eq!(state.plants_refresh_seq, 0);
}
