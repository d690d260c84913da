use std::sync::Arc;

use axum::{extract::State, response::Html};
use maud::{html, Markup, DOCTYPE};

use crate::AppState;

/// Handler for the route listing page (GET /)
pub async fn index_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(index_page(&state.remote_url).into_string())
}

fn index_page(api_base: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Climate Observations API" }
            }
            body {
                h3 { "Available Routes:" }

                h4 { "Precipitation (last year of data):" }
                p {
                    a href={ (api_base) "/api/v1.0/precipitation" } { "/api/v1.0/precipitation" }
                }

                h4 { "Stations:" }
                p {
                    a href={ (api_base) "/api/v1.0/stations" } { "/api/v1.0/stations" }
                }

                h4 { "Temperature observations of the most active station (last year of data):" }
                p {
                    a href={ (api_base) "/api/v1.0/tobs" } { "/api/v1.0/tobs" }
                }

                h4 { "Minimum, average, and max temperature from a start date:" }
                p { code { "/api/v1.0/{start_date}" } }

                h4 { "Minimum, average, and max temperature for a start/end range:" }
                p { code { "/api/v1.0/{start_date}/{end_date}" } }

                p {
                    a href={ (api_base) "/docs" } { "API Docs" }
                }
            }
        }
    }
}
