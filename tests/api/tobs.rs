use crate::helpers::{body_json, send_get, spawn_app, MockClimateStore};
use climate_api::db::TemperatureObservation;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn tobs_come_from_the_most_active_station_within_the_window() {
    let mut store = MockClimateStore::new();
    store
        .expect_max_measurement_date()
        .times(1)
        .returning(|| Ok(String::from("2017-08-23")));
    store
        .expect_most_active_station()
        .times(1)
        .returning(|| Ok(Some(String::from("USC00519281"))));
    store
        .expect_temperature_observations_since()
        .withf(|cutoff, station| cutoff == "2016-08-23" && station == "USC00519281")
        .times(1)
        .returning(|_, _| {
            Ok(vec![
                TemperatureObservation {
                    date: String::from("2017-01-01"),
                    temperature: 72.0,
                },
                TemperatureObservation {
                    date: String::from("2017-01-02"),
                    temperature: 70.0,
                },
            ])
        });

    let test_app = spawn_app(Arc::new(store)).await;
    let response = send_get(test_app.app, "/api/v1.0/tobs").await;

    assert!(response.status().is_success());
    assert_eq!(
        body_json(response).await,
        json!([
            {"Date": "2017-01-01", "Temperature": 72.0},
            {"Date": "2017-01-02", "Temperature": 70.0}
        ])
    );
}

#[tokio::test]
async fn tobs_are_empty_when_no_measurement_matches_a_known_station() {
    let mut store = MockClimateStore::new();
    store
        .expect_max_measurement_date()
        .times(1)
        .returning(|| Ok(String::from("2017-08-23")));
    store
        .expect_most_active_station()
        .times(1)
        .returning(|| Ok(None));

    let test_app = spawn_app(Arc::new(store)).await;
    let response = send_get(test_app.app, "/api/v1.0/tobs").await;

    assert!(response.status().is_success());
    assert_eq!(body_json(response).await, json!([]));
}
