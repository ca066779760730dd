use super::*;

// =============================================================
// Endpoint builders
// =============================================================

#[test]
fn garden_endpoints_nest_under_api_canvases() {
    assert_eq!(gardens_endpoint(), "/api/canvases");
    assert_eq!(garden_endpoint("g1"), "/api/canvases/g1");
    assert_eq!(garden_plants_endpoint("g1"), "/api/canvases/g1/plants");
}

#[test]
fn plant_endpoints_nest_under_api_plants() {
    let id = PlantId::new_v4();
    assert_eq!(plant_endpoint(&id), format!("/api/plants/{id}"));
    assert_eq!(plant_metrics_endpoint(&id), format!("/api/plants/{id}/metrics"));
}

// =============================================================
// Headers and failure messages
// =============================================================

#[test]
fn bearer_prefixes_the_token() {
    assert_eq!(bearer("abc.def.ghi"), "Bearer abc.def.ghi");
}

#[test]
fn failure_messages_carry_the_status_code() {
    assert_eq!(
        request_failed_message("position update", 500),
        "position update request failed: 500"
    );
}
