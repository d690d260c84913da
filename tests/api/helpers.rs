use axum::{
    body::{to_bytes, Body},
    http::Request,
    response::Response,
    Router,
};
use climate_api::{
    app,
    db::{
        ClimateData, Error, PrecipitationReading, Station, TemperatureObservation,
        TemperatureSummary,
    },
    AppState, ClimateService,
};
use hyper::Method;
use mockall::mock;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::sync::Arc;
use tower::ServiceExt;

mock! {
    pub ClimateStore {}

    #[async_trait::async_trait]
    impl ClimateData for ClimateStore {
        async fn max_measurement_date(&self) -> Result<String, Error>;
        async fn measurements_since(
            &self,
            cutoff: &str,
        ) -> Result<Vec<PrecipitationReading>, Error>;
        async fn stations(&self) -> Result<Vec<Station>, Error>;
        async fn most_active_station(&self) -> Result<Option<String>, Error>;
        async fn temperature_observations_since(
            &self,
            cutoff: &str,
            station: &str,
        ) -> Result<Vec<TemperatureObservation>, Error>;
        #[mockall::concretize]
        async fn temperature_aggregate(
            &self,
            start: &str,
            end: Option<&str>,
        ) -> Result<TemperatureSummary, Error>;
    }
}

pub struct TestApp {
    pub app: Router,
}

/// Build the router over a substituted store (usually a `MockClimateStore`).
pub async fn spawn_app(store: Arc<dyn ClimateData>) -> TestApp {
    let state = AppState {
        remote_url: String::from("http://localhost:9300"),
        service: Arc::new(ClimateService::new(store)),
    };

    TestApp { app: app(state) }
}

/// In-memory SQLite pool seeded with the dataset schema, for tests that
/// exercise the real access layer end to end.
pub async fn empty_dataset() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory sqlite");

    sqlx::raw_sql(
        "CREATE TABLE station (
            id INTEGER PRIMARY KEY,
            station TEXT NOT NULL,
            name TEXT NOT NULL,
            latitude REAL NOT NULL,
            longitude REAL NOT NULL,
            elevation REAL NOT NULL
        );
        CREATE TABLE measurement (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            station TEXT NOT NULL,
            date TEXT NOT NULL,
            prcp REAL,
            tobs REAL NOT NULL
        );",
    )
    .execute(&pool)
    .await
    .expect("Failed to create dataset schema");

    pool
}

pub async fn send_get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    app.oneshot(request).await.expect("Failed to execute request.")
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).expect("response body is not valid JSON")
}
