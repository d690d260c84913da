use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::internal_error;
use crate::{AppState, TemperatureRange};

/// Handler for GET /api/v1.0/{start_date}
///
/// The path segment is passed to the store as-is: a malformed date compares
/// lexicographically against the stored ISO dates and answers
/// `[null, null, null]` rather than an error. Intentional; matches what this
/// API has always done.
#[utoipa::path(
    get,
    path = "/api/v1.0/{start_date}",
    params(
        ("start_date" = String, Path, description = "Inclusive ISO YYYY-MM-DD lower bound; not validated"),
    ),
    responses(
        (status = OK, description = "The [min, avg, max] temperature triple for dates >= start_date; elements are null when no rows match"),
        (status = INTERNAL_SERVER_ERROR, description = "Dataset is unreachable")
    )
)]
pub async fn temperature_range_from(
    State(state): State<Arc<AppState>>,
    Path(start_date): Path<String>,
) -> Result<Json<TemperatureRange>, (StatusCode, String)> {
    let range = state
        .service
        .temperature_range(&start_date, None)
        .await
        .map_err(internal_error)?;

    Ok(Json(range))
}

/// Handler for GET /api/v1.0/{start_date}/{end_date}
///
/// Same pass-through behavior as the start-only variant; the end bound is
/// inclusive.
#[utoipa::path(
    get,
    path = "/api/v1.0/{start_date}/{end_date}",
    params(
        ("start_date" = String, Path, description = "Inclusive ISO YYYY-MM-DD lower bound; not validated"),
        ("end_date" = String, Path, description = "Inclusive ISO YYYY-MM-DD upper bound; not validated"),
    ),
    responses(
        (status = OK, description = "The [min, avg, max] temperature triple for the date range; elements are null when no rows match"),
        (status = INTERNAL_SERVER_ERROR, description = "Dataset is unreachable")
    )
)]
pub async fn temperature_range_between(
    State(state): State<Arc<AppState>>,
    Path((start_date, end_date)): Path<(String, String)>,
) -> Result<Json<TemperatureRange>, (StatusCode, String)> {
    let range = state
        .service
        .temperature_range(&start_date, Some(&end_date))
        .await
        .map_err(internal_error)?;

    Ok(Json(range))
}
