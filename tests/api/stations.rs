use crate::helpers::{body_json, send_get, spawn_app, MockClimateStore};
use climate_api::db::Station;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn stations_project_the_exact_contract_fields() {
    let mut store = MockClimateStore::new();
    store.expect_stations().times(1).returning(|| {
        Ok(vec![Station {
            id: 1,
            station: String::from("USC001"),
            name: String::from("Test"),
            latitude: 21.3,
            longitude: -157.8,
            elevation: 3.0,
        }])
    });

    let test_app = spawn_app(Arc::new(store)).await;
    let response = send_get(test_app.app, "/api/v1.0/stations").await;

    assert!(response.status().is_success());
    assert_eq!(
        body_json(response).await,
        json!([{
            "Id": 1,
            "Station": "USC001",
            "Name": "Test",
            "Latitude": 21.3,
            "Longitude": -157.8,
            "Elevation": 3.0
        }])
    );
}

#[tokio::test]
async fn stations_list_may_be_empty() {
    let mut store = MockClimateStore::new();
    store.expect_stations().times(1).returning(|| Ok(vec![]));

    let test_app = spawn_app(Arc::new(store)).await;
    let response = send_get(test_app.app, "/api/v1.0/stations").await;

    assert!(response.status().is_success());
    assert_eq!(body_json(response).await, json!([]));
}
