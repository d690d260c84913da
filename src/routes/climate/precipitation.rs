use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use super::internal_error;
use crate::{AppState, DailyPrecipitation};

/// Handler for GET /api/v1.0/precipitation
#[utoipa::path(
    get,
    path = "/api/v1.0/precipitation",
    responses(
        (status = OK, description = "Precipitation readings from the last year of data, one single-entry {date: prcp} object per reading, in store order"),
        (status = INTERNAL_SERVER_ERROR, description = "Dataset is empty or unreachable")
    )
)]
pub async fn precipitation(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<DailyPrecipitation>>, (StatusCode, String)> {
    let readings = state
        .service
        .precipitation_last_year()
        .await
        .map_err(internal_error)?;

    Ok(Json(readings))
}
