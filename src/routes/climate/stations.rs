use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use super::internal_error;
use crate::{db::Station, AppState};

/// Handler for GET /api/v1.0/stations
#[utoipa::path(
    get,
    path = "/api/v1.0/stations",
    responses(
        (status = OK, description = "Every station in the dataset", body = Vec<Station>),
        (status = INTERNAL_SERVER_ERROR, description = "Dataset is unreachable")
    )
)]
pub async fn stations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Station>>, (StatusCode, String)> {
    let stations = state.service.stations().await.map_err(internal_error)?;

    Ok(Json(stations))
}
