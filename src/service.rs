use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::sync::Arc;
use time::{format_description::FormatItem, macros::format_description, Date, Duration};

use crate::db::{ClimateData, Error, Station, TemperatureObservation, TemperatureSummary};

/// Stored dates are ISO `YYYY-MM-DD`. Parsing only happens when the rolling
/// window start has to be derived from the latest observation date.
const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Length of the rolling "last year" window, in calendar days.
const OBSERVATION_WINDOW_DAYS: i64 = 365;

/// One precipitation reading, serialized as a single-entry `{date: prcp}`
/// object. The API has always returned a list of one-key objects rather than
/// one map keyed by date; the shape is kept for compatibility.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyPrecipitation {
    pub date: String,
    pub prcp: Option<f64>,
}

impl Serialize for DailyPrecipitation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.date, &self.prcp)?;
        map.end()
    }
}

/// A temperature summary as the range endpoints return it: the bare
/// `[min, avg, max]` array, each element null when no rows matched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureRange(pub TemperatureSummary);

impl Serialize for TemperatureRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(3))?;
        seq.serialize_element(&self.0.min)?;
        seq.serialize_element(&self.0.avg)?;
        seq.serialize_element(&self.0.max)?;
        seq.end()
    }
}

/// The five derived queries behind the API, over an injected read-only store.
/// Stateless; every call is request-scoped.
pub struct ClimateService {
    store: Arc<dyn ClimateData>,
}

impl ClimateService {
    pub fn new(store: Arc<dyn ClimateData>) -> Self {
        Self { store }
    }

    /// Start of the rolling window: 365 calendar days before the latest
    /// observation. A day count, not "one year", so the window crossing a
    /// leap day is still exactly 365 days wide.
    async fn observation_window_start(&self) -> Result<String, Error> {
        let latest = self.store.max_measurement_date().await?;
        let latest = Date::parse(&latest, DATE_FORMAT)?;
        let start = latest - Duration::days(OBSERVATION_WINDOW_DAYS);
        Ok(start.format(DATE_FORMAT)?)
    }

    /// Precipitation readings from the last year of data, one single-entry
    /// `{date: prcp}` object per reading, in store order.
    pub async fn precipitation_last_year(&self) -> Result<Vec<DailyPrecipitation>, Error> {
        let cutoff = self.observation_window_start().await?;
        let readings = self.store.measurements_since(&cutoff).await?;
        Ok(readings
            .into_iter()
            .map(|reading| DailyPrecipitation {
                date: reading.date,
                prcp: reading.prcp,
            })
            .collect())
    }

    pub async fn stations(&self) -> Result<Vec<Station>, Error> {
        self.store.stations().await
    }

    /// Temperature observations recorded by the most active station over the
    /// last year of data. When no measurement row matches a known station
    /// there is no "most active" one and the result is empty.
    pub async fn temperature_observations_last_year(
        &self,
    ) -> Result<Vec<TemperatureObservation>, Error> {
        let cutoff = self.observation_window_start().await?;
        let Some(station) = self.store.most_active_station().await? else {
            return Ok(Vec::new());
        };
        self.store
            .temperature_observations_since(&cutoff, &station)
            .await
    }

    /// Min/avg/max temperature from `start` on, bounded by `end` inclusive
    /// when given. The bounds are passed through unvalidated: a malformed
    /// date compares lexicographically against the stored ISO dates and an
    /// unmatched range comes back as `[null, null, null]`.
    pub async fn temperature_range(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> Result<TemperatureRange, Error> {
        let summary = self.store.temperature_aggregate(start, end).await?;
        Ok(TemperatureRange(summary))
    }
}
