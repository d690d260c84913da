use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use super::internal_error;
use crate::{db::TemperatureObservation, AppState};

/// Handler for GET /api/v1.0/tobs
#[utoipa::path(
    get,
    path = "/api/v1.0/tobs",
    responses(
        (status = OK, description = "Temperature observations of the most active station over the last year of data", body = Vec<TemperatureObservation>),
        (status = INTERNAL_SERVER_ERROR, description = "Dataset is empty or unreachable")
    )
)]
pub async fn tobs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TemperatureObservation>>, (StatusCode, String)> {
    let observations = state
        .service
        .temperature_observations_last_year()
        .await
        .map_err(internal_error)?;

    Ok(Json(observations))
}
