pub mod precipitation;
pub mod stations;
pub mod temperature;
pub mod tobs;

pub use precipitation::*;
pub use stations::*;
pub use temperature::*;
pub use tobs::*;

use axum::http::StatusCode;
use log::error;

use crate::db;

/// Store failures all surface the same way: logged, then a plain 500 back to
/// the caller. No partial results are synthesized.
pub(crate) fn internal_error(err: db::Error) -> (StatusCode, String) {
    error!("error answering climate query: {}", err);
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}
