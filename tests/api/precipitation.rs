use crate::helpers::{body_json, send_get, spawn_app, MockClimateStore};
use climate_api::db::{Error, PrecipitationReading};
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn precipitation_returns_single_key_objects_in_store_order() {
    let mut store = MockClimateStore::new();
    store
        .expect_max_measurement_date()
        .times(1)
        .returning(|| Ok(String::from("2017-08-23")));
    store
        .expect_measurements_since()
        .withf(|cutoff| cutoff == "2016-08-23")
        .times(1)
        .returning(|_| {
            Ok(vec![
                PrecipitationReading {
                    date: String::from("2016-08-24"),
                    prcp: Some(0.08),
                },
                PrecipitationReading {
                    date: String::from("2016-08-25"),
                    prcp: None,
                },
            ])
        });

    let test_app = spawn_app(Arc::new(store)).await;
    let response = send_get(test_app.app, "/api/v1.0/precipitation").await;

    assert!(response.status().is_success());
    assert_eq!(
        body_json(response).await,
        json!([{"2016-08-24": 0.08}, {"2016-08-25": null}])
    );
}

#[tokio::test]
async fn precipitation_on_empty_dataset_is_a_server_error() {
    let mut store = MockClimateStore::new();
    store
        .expect_max_measurement_date()
        .times(1)
        .returning(|| Err(Error::NoData));

    let test_app = spawn_app(Arc::new(store)).await;
    let response = send_get(test_app.app, "/api/v1.0/precipitation").await;

    assert_eq!(response.status().as_u16(), 500);
}
