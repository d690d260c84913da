use async_trait::async_trait;
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};
use utoipa::ToSchema;

/// A weather station. Field names serialize in the `Id`/`Station`/... casing
/// the API has always returned.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Station {
    pub id: i64,
    pub station: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

/// One daily precipitation reading. `prcp` is nullable in the dataset and
/// stays nullable end to end.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct PrecipitationReading {
    pub date: String,
    pub prcp: Option<f64>,
}

/// One temperature observation.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct TemperatureObservation {
    pub date: String,
    pub temperature: f64,
}

/// Min/avg/max temperature over a date range. All `None` when no rows
/// matched, mirroring SQL aggregates over an empty set.
#[derive(Debug, Clone, Copy, PartialEq, Default, FromRow)]
pub struct TemperatureSummary {
    pub min: Option<f64>,
    pub avg: Option<f64>,
    pub max: Option<f64>,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("measurement table has no rows")]
    NoData,
    #[error("failed to query sqlite: {0}")]
    Query(#[from] sqlx::Error),
    #[error("failed to format date string: {0}")]
    TimeFormat(#[from] time::error::Format),
    #[error("failed to parse date string: {0}")]
    TimeParse(#[from] time::error::Parse),
}

/// Read-only access to the climate dataset. Operations are independent; each
/// one takes a pooled connection for its statement and releases it on every
/// exit path. Dates are stored as ISO `YYYY-MM-DD` strings, so the range
/// operations compare them lexicographically without parsing.
#[async_trait]
pub trait ClimateData: Send + Sync {
    /// Latest observation date in the dataset. `Error::NoData` when the
    /// measurement table is empty.
    async fn max_measurement_date(&self) -> Result<String, Error>;

    /// Precipitation readings strictly after `cutoff`, in store order.
    async fn measurements_since(&self, cutoff: &str)
        -> Result<Vec<PrecipitationReading>, Error>;

    /// The full station table, in store order.
    async fn stations(&self) -> Result<Vec<Station>, Error>;

    /// Station code with the most measurement rows, counting only rows whose
    /// code exists in the station table. Ties go to the lexicographically
    /// smallest code. `None` when no measurement row matches a known station.
    async fn most_active_station(&self) -> Result<Option<String>, Error>;

    /// Temperature observations for `station` strictly after `cutoff`.
    async fn temperature_observations_since(
        &self,
        cutoff: &str,
        station: &str,
    ) -> Result<Vec<TemperatureObservation>, Error>;

    /// Min/avg/max temperature for `date >= start`, bounded by `date <= end`
    /// when given. The bounds are compared as strings against the stored
    /// dates; nothing is parsed or validated here.
    async fn temperature_aggregate(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> Result<TemperatureSummary, Error>;
}

pub struct ClimateAccess {
    pool: SqlitePool,
}

impl ClimateAccess {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClimateData for ClimateAccess {
    async fn max_measurement_date(&self) -> Result<String, Error> {
        let max: Option<String> = sqlx::query_scalar("SELECT MAX(date) FROM measurement")
            .fetch_one(&self.pool)
            .await?;
        max.ok_or(Error::NoData)
    }

    async fn measurements_since(
        &self,
        cutoff: &str,
    ) -> Result<Vec<PrecipitationReading>, Error> {
        let readings = sqlx::query_as::<_, PrecipitationReading>(
            "SELECT date, prcp FROM measurement WHERE date > ?",
        )
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await?;
        Ok(readings)
    }

    async fn stations(&self) -> Result<Vec<Station>, Error> {
        let stations = sqlx::query_as::<_, Station>(
            "SELECT id, station, name, latitude, longitude, elevation FROM station",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(stations)
    }

    async fn most_active_station(&self) -> Result<Option<String>, Error> {
        let code: Option<String> = sqlx::query_scalar(
            "SELECT m.station FROM measurement m
             JOIN station s ON s.station = m.station
             GROUP BY m.station
             ORDER BY COUNT(*) DESC, m.station ASC
             LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(code)
    }

    async fn temperature_observations_since(
        &self,
        cutoff: &str,
        station: &str,
    ) -> Result<Vec<TemperatureObservation>, Error> {
        let observations = sqlx::query_as::<_, TemperatureObservation>(
            "SELECT date, tobs AS temperature FROM measurement
             WHERE date > ? AND station = ?",
        )
        .bind(cutoff)
        .bind(station)
        .fetch_all(&self.pool)
        .await?;
        Ok(observations)
    }

    async fn temperature_aggregate(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> Result<TemperatureSummary, Error> {
        let summary = match end {
            Some(end) => {
                sqlx::query_as::<_, TemperatureSummary>(
                    "SELECT MIN(tobs) AS min, AVG(tobs) AS avg, MAX(tobs) AS max
                     FROM measurement WHERE date >= ? AND date <= ?",
                )
                .bind(start)
                .bind(end)
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, TemperatureSummary>(
                    "SELECT MIN(tobs) AS min, AVG(tobs) AS avg, MAX(tobs) AS max
                     FROM measurement WHERE date >= ?",
                )
                .bind(start)
                .fetch_one(&self.pool)
                .await?
            }
        };
        Ok(summary)
    }
}
