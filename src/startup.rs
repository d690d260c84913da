use anyhow::anyhow;
use axum::{
    body::Body,
    extract::Request,
    middleware::{self, Next},
    response::IntoResponse,
    routing::get,
    Router,
};
use hyper::{header::ACCEPT, Method};
use log::info;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    db::{ClimateAccess, Database, Station, TemperatureObservation},
    index_handler, precipitation, routes, stations, temperature_range_between,
    temperature_range_from, tobs, ClimateService,
};

#[derive(Clone)]
pub struct AppState {
    pub remote_url: String,
    pub service: Arc<ClimateService>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::climate::precipitation::precipitation,
        routes::climate::stations::stations,
        routes::climate::tobs::tobs,
        routes::climate::temperature::temperature_range_from,
        routes::climate::temperature::temperature_range_between,
    ),
    components(schemas(Station, TemperatureObservation)),
    tags(
        (name = "climate data api", description = "a read-only REST api over a fixed climate observation dataset")
    )
)]
struct ApiDoc;

pub async fn build_app_state(
    remote_url: String,
    database: String,
) -> Result<AppState, anyhow::Error> {
    let db = Database::new(&database)
        .await
        .map_err(|e| anyhow!("error opening climate dataset: {}", e))?;

    let store = Arc::new(ClimateAccess::new(db.pool().clone()));
    let service = Arc::new(ClimateService::new(store));

    Ok(AppState {
        remote_url,
        service,
    })
}

pub fn app(app_state: AppState) -> Router {
    let api_docs = ApiDoc::openapi();
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([ACCEPT])
        .allow_origin(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/api/v1.0/precipitation", get(precipitation))
        .route("/api/v1.0/stations", get(stations))
        .route("/api/v1.0/tobs", get(tobs))
        .route("/api/v1.0/{start_date}", get(temperature_range_from))
        .route(
            "/api/v1.0/{start_date}/{end_date}",
            get(temperature_range_between),
        )
        .with_state(Arc::new(app_state))
        .layer(middleware::from_fn(log_request))
        .merge(Scalar::with_url("/docs", api_docs))
        .layer(cors)
}

async fn log_request(request: Request<Body>, next: Next) -> impl IntoResponse {
    let now = time::OffsetDateTime::now_utc();
    let path = request
        .uri()
        .path_and_query()
        .map(|p| p.as_str())
        .unwrap_or_default();
    info!(target: "http_request","new request, {} {}", request.method().as_str(), path);

    let response = next.run(request).await;
    let response_time = time::OffsetDateTime::now_utc() - now;
    info!(target: "http_response", "response, code: {}, time: {}", response.status().as_str(), response_time);

    response
}
